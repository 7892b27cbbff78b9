//! Request extractors
//!
//! [`ValidatedJson`] parses a JSON body and checks it against the record
//! schema before the handler runs.

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;

use super::errors::ApiError;
use crate::schema::Record;

/// A request body that satisfied its record schema
#[derive(Debug, Clone)]
pub struct ValidatedJson<R>(pub R);

#[async_trait]
impl<S, R> FromRequest<S> for ValidatedJson<R>
where
    S: Send + Sync,
    R: Record,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

        let normalized = R::validate(&body)?;
        let record = serde_json::from_value(Value::Object(normalized))
            .map_err(|e| ApiError::InvalidBody(e.to_string()))?;

        Ok(ValidatedJson(record))
    }
}
