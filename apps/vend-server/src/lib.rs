//! # Vend Server
//!
//! HTTP front end for the Vend POS catalog and sales.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vend Server                                      │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► middleware ───► routes ───► vend-store    │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                                             vend-core                   │
//! │                                     (discount, grouping, totals)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The router is built by [`build_app`] around an injected store, so tests
//! can drive it in-process without binding a socket.

pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use vend_store::ProductStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        AppState { store }
    }
}

/// Builds the complete application: routes, state and middleware.
pub fn build_app(store: Arc<dyn ProductStore>) -> Router {
    let app = routes::router().with_state(AppState::new(store));
    middleware::apply(app)
}
