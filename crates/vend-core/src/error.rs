//! # Error Types
//!
//! Domain-specific error types for vend-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vend-core errors (this file)                                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  vend-store errors (separate crate)                                    │
//! │  └── StoreError       - Catalog operation failures                     │
//! │                                                                         │
//! │  vend-server errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → ApiError → HTTP response         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when request input doesn't meet requirements.
/// Used for early validation before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },


    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    /// Value must be positive.
    #[error("{field} must be positive, got {actual}")]
    MustBePositive { field: String, actual: i64 },

    /// An amount derived from the input does not fit in 64-bit cents.
    #[error("{field} exceeds the representable amount")]
    Overflow { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A validation failure inside one element of a request list.
    #[error("item with index of [{index}]: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Tags this error with the position of the offending list element.
    pub fn at_index(self, index: usize) -> Self {
        ValidationError::AtIndex {
            index,
            source: Box::new(self),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
