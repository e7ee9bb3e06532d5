//! # vend-store: Storage Layer for Vend POS
//!
//! This crate holds the product catalog. State lives for the lifetime of
//! the process and is lost on restart.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vend POS Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (POST /sales)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    vend-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ ProductStore  │    │ InMemoryStore │    │    seed      │  │   │
//! │  │   │   (trait)     │◄───│ Mutex<Map>    │◄───│ demo catalog │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> (copies) ──► vend-core pricing                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`repository`] - `ProductStore` trait and the in-memory implementation
//! - [`seed`] - Demo catalog
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use vend_store::{seed_demo_catalog, InMemoryStore, ProductStore};
//!
//! let store: Arc<dyn ProductStore> = Arc::new(InMemoryStore::new());
//! seed_demo_catalog(store.as_ref())?;
//! assert_eq!(store.list_products()?.len(), 3);
//! # Ok::<(), vend_store::StoreError>(())
//! ```

pub mod error;
pub mod repository;
pub mod seed;

pub use error::{StoreError, StoreResult};
pub use repository::memory::InMemoryStore;
pub use repository::ProductStore;
pub use seed::seed_demo_catalog;
