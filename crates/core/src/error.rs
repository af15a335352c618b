//! Error types for cargopack.

use thiserror::Error;

/// Result type alias for cargopack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during packing operations.
///
/// An item that does not fit is *not* an error: packers report it in the
/// `unplaced` list of their result. These variants only cover invalid input
/// rejected at the engine boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid item provided.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Invalid cargo bounds provided.
    #[error("Invalid cargo bounds: {0}")]
    InvalidBounds(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
