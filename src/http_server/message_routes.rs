//! Class Chat HTTP Routes
//!
//! Messages are scoped to a class by the path segment. Clients poll the
//! list endpoint; there is no push channel.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

use super::errors::{ApiError, ApiResult};
use super::extract::ValidatedJson;
use super::response::{public_documents, CreatedResponse};
use crate::schema::Message;
use crate::store::{Database, Document, Filter};

/// Messages returned when the client gives no limit
pub const DEFAULT_MESSAGE_LIMIT: usize = 50;

#[derive(Debug, Default, Deserialize)]
pub struct MessagesQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

impl MessagesQuery {
    /// Resolves the effective limit; zero means unlimited
    pub fn resolve_limit(&self) -> ApiResult<usize> {
        match self.limit {
            None => Ok(DEFAULT_MESSAGE_LIMIT),
            Some(n) => usize::try_from(n).map_err(|_| {
                ApiError::InvalidQueryParam(format!("limit must be non-negative, got {}", n))
            }),
        }
    }
}

/// Create class chat routes
pub fn message_routes(db: Database) -> Router {
    Router::new()
        .route(
            "/classes/:class_code/messages",
            get(list_messages_handler).post(post_message_handler),
        )
        .with_state(db)
}

async fn post_message_handler(
    State(db): State<Database>,
    Path(class_code): Path<String>,
    ValidatedJson(mut message): ValidatedJson<Message>,
) -> ApiResult<Json<CreatedResponse>> {
    let body_class_code = message.class_code.clone();
    if message.bind_to_class(&class_code) {
        debug!(%class_code, %body_class_code, "message class code replaced by path");
    }

    let id = db.insert_record(&message).await?;
    Ok(Json(CreatedResponse::new(id)))
}

async fn list_messages_handler(
    State(db): State<Database>,
    Path(class_code): Path<String>,
    query: Result<Query<MessagesQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Document>>> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQueryParam(e.body_text()))?;
    let limit = query.resolve_limit()?;

    let filter = Filter::new().eq("class_code", class_code);
    let docs = db.find_records::<Message>(&filter, Some(limit)).await;
    Ok(Json(public_documents(docs)))
}
