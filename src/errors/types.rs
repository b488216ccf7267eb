//! Error type definitions for lineup storage and discovery
//!
//! Every failure is returned to the caller typed by kind with the originating
//! cause preserved as the error `source`, so callers can log the full chain.

use thiserror::Error;

/// Errors returned by the lineup store
#[derive(Error, Debug)]
pub enum LineupError {
    /// Lookup by id matched nothing
    #[error("Not found: lineup with id {id}")]
    NotFound { id: i32 },

    /// Input rejected before reaching storage
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// Connectivity, constraint violation or any lower-layer failure
    #[error("Storage error during {operation} ({key}): {source}")]
    Storage {
        operation: &'static str,
        key: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// The channel store failed while hydrating a lineup
    #[error("Channel hydration failed for lineup {lineup_id}: {source}")]
    Collaborator {
        lineup_id: i32,
        #[source]
        source: ChannelProviderError,
    },
}

/// Errors surfaced by a channel collaborator
#[derive(Error, Debug)]
pub enum ChannelProviderError {
    /// Database errors from SeaORM
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Any other failure reported by a non-database provider
    #[error("Channel provider unavailable: {message}")]
    Unavailable { message: String },
}

/// Errors raised while rendering a discovery document
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::SeError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl LineupError {
    /// Create a validation error for a named field
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Wrap a storage error with the operation name and identifying key
    pub fn storage<K: ToString>(operation: &'static str, key: K, source: sea_orm::DbErr) -> Self {
        Self::Storage {
            operation,
            key: key.to_string(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl ChannelProviderError {
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
