//! The two request stages that run before a handler: rule evaluation and error aggregation.

use super::rules::{evaluate, FieldError, RequestFields, Rule};
use crate::error::AppError;
use axum::{
    body::{to_bytes, Body},
    extract::{RawPathParams, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::collections::HashMap;

/// Failures collected for the current request; stored as a request extension.
#[derive(Clone, Debug, Default)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Evaluate `rules` against the path parameters and JSON body, appending failures to
/// the [`ValidationErrors`] extension. The body is handed on unchanged.
pub async fn check_rules(
    State(rules): State<&'static [Rule]>,
    path: Option<RawPathParams>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let params: HashMap<String, String> = path
        .map(|raw| raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
        .unwrap_or_default();

    let (mut parts, body) = request.into_parts();
    // Size is bounded by the RequestBodyLimitLayer installed on the app.
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|e| AppError::BadRequest(format!("no se pudo leer el cuerpo: {}", e)))?;
    let json = parse_body(&bytes)?;

    let errors = evaluate(rules, &RequestFields { params: &params, body: &json });
    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), path = %parts.uri.path(), "validation failed");
    }
    match parts.extensions.get_mut::<ValidationErrors>() {
        Some(existing) => existing.0.extend(errors),
        None => {
            parts.extensions.insert(ValidationErrors(errors));
        }
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

/// Stop the chain with 400 when any rule failed; otherwise continue untouched.
pub async fn handle_input_errors(request: Request, next: Next) -> Response {
    match request.extensions().get::<ValidationErrors>() {
        Some(errors) if !errors.is_empty() => AppError::Validation(errors.0.clone()).into_response(),
        _ => next.run(request).await,
    }
}

/// Empty or whitespace-only bodies read as `{}`. The `Content-Type` header is not consulted.
pub(crate) fn parse_body(bytes: &[u8]) -> Result<Value, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(bytes).map_err(|e| AppError::BadRequest(format!("JSON no válido: {}", e)))
}
