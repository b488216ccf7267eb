//! SeaORM repository implementations
//!
//! Repositories work across SQLite, PostgreSQL, and MySQL through a shared
//! `Arc<DatabaseConnection>`.

pub mod traits;
pub mod lineup;
pub mod lineup_channel;

// Re-export for convenience
pub use lineup::LineupSeaOrmRepository;
pub use lineup_channel::LineupChannelSeaOrmRepository;
pub use traits::LineupChannelProvider;
