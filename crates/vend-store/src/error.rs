//! # Store Error Types
//!
//! Error types for catalog operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (vend-core)   Unknown product id   Poisoned lock      │
//! │       │                              │                    │             │
//! │       └──────────────┬───────────────┴────────────────────┘             │
//! │                      ▼                                                  │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in vend-server) ← status code + JSON body                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use uuid::Uuid;
use vend_core::ValidationError;

/// Catalog operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A sale referenced a product that is not in the catalog.
    ///
    /// ## When This Occurs
    /// - Client sent a well-formed UUID that was never created
    /// - Client is talking to a restarted server (the catalog is volatile)
    #[error("product with id of {id} does not exist in the catalog")]
    ProductNotFound { id: Uuid },

    /// Input rejected by the store's own checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A thread panicked while holding the catalog lock.
    #[error("catalog lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Creates a ProductNotFound error for the given id.
    pub fn not_found(id: Uuid) -> Self {
        StoreError::ProductNotFound { id }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_id() {
        let id = Uuid::nil();
        let err = StoreError::not_found(id);
        assert_eq!(
            err.to_string(),
            "product with id of 00000000-0000-0000-0000-000000000000 does not exist in the catalog"
        );
    }

    #[test]
    fn test_validation_is_transparent() {
        let err: StoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "name is required");
    }
}
