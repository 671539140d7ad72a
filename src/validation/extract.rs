//! Body extractor for routes guarded by [`check_rules`](super::check_rules).

use super::middleware::parse_body;
use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Deserializes the body with the same parsing the rules stage used, so a request
/// that passed validation is never turned away for its `Content-Type`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        let value = parse_body(&bytes)?;
        serde_json::from_value(value)
            .map(ValidatedJson)
            .map_err(|e| AppError::BadRequest(format!("JSON no válido: {}", e)))
    }
}
