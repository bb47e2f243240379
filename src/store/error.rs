//! Error types for the user store.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No record exists under the given identifier.
    #[error("user not found: {0}")]
    NotFound(u64),
}
