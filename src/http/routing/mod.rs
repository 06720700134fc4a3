use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;

use crate::http::types::ApiError;
use crate::infrastructure::request_log::RequestLog;

// Health probe, the todo routes, a JSON 404 for everything else, and request
// logging around all of it.
pub fn app(router: Router, request_log: RequestLog) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(router)
        .fallback(unmatched_route)
        .layer(middleware::from_fn_with_state(request_log, log_requests))
}

// Records every request before it is dispatched; the logged path excludes the
// query string.
async fn log_requests(State(log): State<RequestLog>, req: Request, next: Next) -> Response {
    let path = req.uri().path();
    tracing::debug!(method = %req.method(), path, "request");
    log.record(req.method().as_str(), path);
    next.run(req).await
}

async fn unmatched_route() -> ApiError { ApiError::route_not_found() }
