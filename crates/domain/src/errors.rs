//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for papersync
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PaperSyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PaperSyncError {
    /// Stable label suitable for logging fields and report summaries.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Platform(_) => "platform",
            Self::Network(_) => "network",
            Self::Auth(_) => "auth",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Storage(_) => "storage",
            Self::Render(_) => "render",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for papersync operations
pub type Result<T> = std::result::Result<T, PaperSyncError>;

/// Problems that make a single spreadsheet row unusable.
///
/// These never abort a batch: the row is skipped and the problem is
/// reported.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowError {
    #[error("Error parsing date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("No ID provided for channel '{label}'")]
    MissingId { label: String },
}
