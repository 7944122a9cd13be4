//! Provides the error type used throughout this crate.

use thiserror::Error;

/// The error type shared by the queue and the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// Removal from a container that holds no elements
    #[error("Container is empty")]
    EmptyContainer,
    /// The operation's precondition does not hold for the receiver
    #[error("Invalid operation: {0}")]
    InvalidOperation(&'static str),
}

/// Result alias for fallible operations in this crate
pub type Result<T> = std::result::Result<T, StructureError>;
