//! Error types for the native bridge.
//!
//! The version query itself never fails; these cover configuration and
//! logger setup around it.

use thiserror::Error;

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors that can occur while configuring the bridge
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Configuration rejected by validation
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (reading a configuration file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
