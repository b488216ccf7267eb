//! Centralized error handling for lineup storage and discovery
//!
//! # Error Categories
//!
//! - **Not found**: a lineup lookup by id matched nothing
//! - **Validation**: malformed input rejected before it reaches storage
//! - **Storage**: SeaORM/driver failures, tagged with the operation and key
//! - **Collaborator**: the channel store failed while hydrating a lineup
//!
//! # Usage
//!
//! ```rust
//! use tuner_lineup::errors::{LineupError, LineupResult};
//!
//! fn check_port(port: i32) -> LineupResult<u16> {
//!     u16::try_from(port)
//!         .ok()
//!         .filter(|p| *p != 0)
//!         .ok_or_else(|| LineupError::validation("port", "must be between 1 and 65535"))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for lineup store results
pub type LineupResult<T> = Result<T, LineupError>;

/// Convenience type alias for channel collaborator results
pub type ChannelProviderResult<T> = Result<T, ChannelProviderError>;
