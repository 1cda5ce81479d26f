//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the goal endpoints under a single Axum router with permissive CORS,
//! request tracing, and a panic catch-all that turns any escaped handler
//! panic into the generic 500 body instead of a dropped connection.

pub mod goals;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/goals", post(goals::create_goal))
        .route("/goals/{user_id}", get(goals::list_goals))
        .route("/healthz", get(healthz))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Convert an escaped handler panic into the generic 500 response. The panic
/// detail is logged server-side and never reaches the client.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };
    tracing::error!(%detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Something went wrong!" })),
    )
        .into_response()
}
