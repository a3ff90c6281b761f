//! HTTP-level middleware (cross-cutting concerns).
//!
//! Responsibility:
//! - Request-Id generation + propagation (X-Request-Id)
//! - Access logging (TraceLayer), level picked from `EngineMode`
//! - Panic recovery: a panicking handler becomes a JSON 500, the server keeps running
//! - Body size limits
//! - Global timeouts

use std::any::Any;
use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::header::HeaderName;
use axum::response::{IntoResponse, Response};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::EngineMode;
use crate::error::ApiError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply HTTP-level middleware to the given Router.
///
/// In `Release`/`Test` mode access logs are emitted at DEBUG, so the default
/// filter keeps them out of the output.
pub fn apply(router: Router, mode: EngineMode) -> Router {
    apply_with_timeout(router, mode, REQUEST_TIMEOUT)
}

fn apply_with_timeout(router: Router, mode: EngineMode, timeout: Duration) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let access_log_level = if mode.is_verbose() {
        Level::INFO
    } else {
        Level::DEBUG
    };

    // Request-id layers sit outside HandleErrorLayer so 408/500 responses carry the id too.
    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        // Make the service error `Infallible` by converting errors into responses.
        .layer(HandleErrorLayer::new(handle_layer_error))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(access_log_level))
                .on_response(DefaultOnResponse::new().level(access_log_level)),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TimeoutLayer::new(timeout));

    router.layer(layers)
}

async fn handle_layer_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        tracing::error!(error = %err, "unhandled middleware error");
        ApiError::Internal
    }
}

// The panic hook has already logged the payload and location.
fn handle_panic(_payload: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal.into_response()
}
