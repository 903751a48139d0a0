// SPDX-License-Identifier: MIT

//! Error types for pixname

use thiserror::Error;

/// Result type alias for pixname operations
pub type Result<T> = std::result::Result<T, PixnameError>;

/// Pixname error types
#[derive(Error, Debug)]
pub enum PixnameError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Naming service error: {0}")]
    Service(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
