//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// capacity, positional lookups). Storage and terminal failures belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a name that is too long).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The inventory already holds as many items as it may.
    #[error("inventory is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// A 1-based position does not name an item in the inventory.
    #[error("no item at position {position} (inventory holds {len})")]
    IndexOutOfRange { position: usize, len: usize },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    pub fn index_out_of_range(position: usize, len: usize) -> Self {
        Self::IndexOutOfRange { position, len }
    }
}
