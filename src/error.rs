/// Error types for site-match
///
/// This module defines all possible errors that can occur in the crate.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for site-match operations
#[derive(Error, Debug)]
pub enum MatchError {
    /// I/O errors (snapshot files, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error (alias tables, group rules)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog entry failed validation
    #[error("Invalid project: {0}")]
    InvalidProject(String),

    /// Project not found in the catalog
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Unrecognized match strategy name
    #[error("Unknown match strategy: {0}")]
    UnknownStrategy(String),
}

/// Result type alias for site-match operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Convert MatchError to a user-friendly error message
impl MatchError {
    pub fn user_message(&self) -> String {
        match self {
            MatchError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            MatchError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            MatchError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            MatchError::InvalidProject(reason) => {
                format!("Invalid project: {}", reason)
            }
            MatchError::ProjectNotFound(name) => {
                format!("Project '{}' not found in catalog", name)
            }
            MatchError::UnknownStrategy(name) => {
                format!("Unknown match strategy '{}'. Use first, all, or specific", name)
            }
        }
    }
}
