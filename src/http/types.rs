use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

// Request-path failure, rendered as {"error": message} with its status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn todo_not_found() -> Self {
        Self { status: StatusCode::NOT_FOUND, message: "Todo not found".into() }
    }

    pub fn route_not_found() -> Self {
        Self { status: StatusCode::NOT_FOUND, message: "Not Found".into() }
    }

    pub fn invalid_json() -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: "Invalid JSON".into() }
    }

    pub fn title_required() -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: "Title is required".into() }
    }

    pub fn invalid_id() -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: "Invalid todo id".into() }
    }

    pub fn invalid_query() -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: "Invalid query parameter".into() }
    }

    // Store failures and other unexpected errors for this request. The cause
    // goes to the operator via tracing; the client gets a generic body.
    pub fn internal(err: anyhow::Error) -> Self {
        tracing::error!("request failed: {err:#}");
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: "Internal server error".into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
