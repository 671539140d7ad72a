//! Common routes: API banner, readiness, OpenAPI document.

use crate::handlers::{api_banner, ready};
use crate::openapi::openapi_json;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/api", get(api_banner))
        .route("/ready", get(ready))
        .route("/docs/openapi.json", get(openapi_json))
        .with_state(state)
}
