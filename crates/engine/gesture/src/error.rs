//! Error types for gesture configuration

use thiserror::Error;

/// Result type for gesture operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or validating gesture settings
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A setting is out of its allowed range
    #[error("Invalid config: {0}")]
    Config(String),
}
