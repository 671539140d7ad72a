//! Router assembly: product routes nested under `/api/products`, diagnostics, global layers.

use crate::config::Settings;
use crate::routes::{common_routes, product_routes};
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub fn app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/products", product_routes(state))
        .layer(RequestBodyLimitLayer::new(settings.body_limit))
        .layer(TraceLayer::new_for_http())
}
