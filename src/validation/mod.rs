//! Request validation: per-route rule tables evaluated before dispatch, failures
//! aggregated into a single 400 response.

mod extract;
mod middleware;
mod rules;

pub use extract::ValidatedJson;
pub use middleware::{check_rules, handle_input_errors, ValidationErrors};
pub use rules::{evaluate, Check, FieldError, Location, RequestFields, Rule};

use axum::{middleware::from_fn, middleware::from_fn_with_state, routing::MethodRouter};

/// Wrap a method router so that `rules` run first, then the error aggregator, then the handler.
pub fn validated<S>(route: MethodRouter<S>, rules: &'static [Rule]) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    // Layers run outermost-first: the last one added executes first.
    route
        .route_layer(from_fn(handle_input_errors))
        .route_layer(from_fn_with_state(rules, check_rules))
}
