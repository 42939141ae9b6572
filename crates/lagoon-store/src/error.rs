//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the store context                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller (UI layer) displays a user-friendly message                    │
//! │                                                                         │
//! │  CoreError passes through unchanged: an EmptyCart stays an EmptyCart.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store failures are never retried or masked here; the core computations
//! are deterministic and the caller decides what a failed append means.

use thiserror::Error;

use lagoon_core::CoreError;

/// Storage layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the store file failed.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store document could not be (de)serialized.
    ///
    /// ## When This Occurs
    /// - Corrupted store file
    /// - Store file written by an incompatible version
    #[error("Store serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A business rule rejected the operation (e.g. empty-cart payment).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_passes_through() {
        let err: StoreError = CoreError::EmptyCart.into();
        assert_eq!(err.to_string(), "Cannot process payment: cart is empty");
        assert!(matches!(err, StoreError::Core(CoreError::EmptyCart)));
    }
}
