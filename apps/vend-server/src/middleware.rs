//! HTTP middleware stack.
//!
//! ## Layer Order
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  request ──► SetRequestId      (x-request-id, UUID v4)   │
//! │          ──► Trace             (span per request)        │
//! │          ──► PropagateRequestId (echo on the response)   │
//! │          ──► CatchPanic        (panic becomes a 500)     │
//! │          ──► Router                                      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! A client-supplied `x-request-id` is kept as is.

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info_span, Level, Span};

/// Wraps `router` with the standard middleware stack.
pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CatchPanicLayer::new());

    router.layer(middleware)
}

fn make_request_span(req: &Request<Body>) -> Span {
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-");

    info_span!(
        "http_request",
        method = %req.method(),
        uri = %req.uri(),
        request_id = %request_id,
    )
}
