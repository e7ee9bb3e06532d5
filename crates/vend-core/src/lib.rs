//! # vend-core: Pure Business Logic for Vend POS
//!
//! This crate contains the domain model and pricing rules as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Vend POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 vend-server (axum HTTP)                         │   │
//! │  │    GET /products ── POST /products ── POST /sales               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                vend-store (Mutex<HashMap>)                      │   │
//! │  │          list_products, create_product, sale                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vend-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  totals   │  │   rules   │  │   │
//! │  │   │ LineItem  │  │           │  │ discounts │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem, SaleSummary)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Totals, flat discount allocation, sale regrouping
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use uuid::Uuid;
//! use vend_core::{apply_discount, summarize_sale, Money, Product};
//!
//! let shorts = Product::new(Uuid::new_v4(), "Nike Shorts", Money::from_cents(1000));
//! let units = vec![shorts.clone(), shorts];
//!
//! let summary = summarize_sale(&apply_discount(units, 0)?)?;
//! assert_eq!(summary.total_price.cents(), 2000);
//! assert_eq!(summary.lines[0].quantity, 2);
//! # Ok::<(), vend_core::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use pricing::{apply_discount, summarize_sale, total_price};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of units (summed over all line items) in one sale.
///
/// ## Business Reason
/// A sale expands every unit into its own entry, so an unbounded total
/// would let one request allocate without limit. Individual quantities
/// are otherwise only required to be positive.
pub const MAX_SALE_UNITS: i64 = 1_000_000;
