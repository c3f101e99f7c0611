//! Common error types for FontCanvas

use thiserror::Error;

/// Common result type for FontCanvas operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across FontCanvas modules
#[derive(Error, Debug)]
pub enum Error {
    /// Durable storage error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored payload could not be serialized or parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed user input (short username/password, empty required field)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Registering a username that already exists
    #[error("Username already registered: {0}")]
    DuplicateUsername(String),

    /// Login with no matching username/password pair
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Comparison set already holds the maximum number of fonts
    #[error("Comparison set is full (max {0} fonts)")]
    CapacityExceeded(usize),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Remote suggestion service failure (callers degrade to fallbacks)
    #[error("Remote service error: {0}")]
    Remote(String),
}
