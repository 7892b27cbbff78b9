//! Record HTTP Routes
//!
//! Create and list endpoints for classes, notifications and payments.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::errors::{ApiError, ApiResult};
use super::extract::ValidatedJson;
use super::response::{public_documents, CreatedResponse};
use crate::schema::{Class, Notification, Payment};
use crate::store::{Database, Document, Filter};

// ==================
// Request Types
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct NotificationsQuery {
    #[serde(default)]
    pub class_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PaymentsQuery {
    #[serde(default)]
    pub student_id: Option<String>,
}

/// Treats an empty query parameter as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ==================
// Record Routes
// ==================

/// Create record routes
pub fn record_routes(db: Database) -> Router {
    Router::new()
        .route("/classes", get(list_classes_handler).post(create_class_handler))
        .route(
            "/notifications",
            get(list_notifications_handler).post(create_notification_handler),
        )
        .route(
            "/payments",
            get(list_payments_handler).post(create_payment_handler),
        )
        .with_state(db)
}

// ==================
// Classes
// ==================

async fn create_class_handler(
    State(db): State<Database>,
    ValidatedJson(class): ValidatedJson<Class>,
) -> ApiResult<Json<CreatedResponse>> {
    let id = db.insert_record(&class).await?;
    Ok(Json(CreatedResponse::new(id)))
}

async fn list_classes_handler(State(db): State<Database>) -> Json<Vec<Document>> {
    let docs = db.find_records::<Class>(&Filter::new(), None).await;
    Json(public_documents(docs))
}

// ==================
// Notifications
// ==================

async fn create_notification_handler(
    State(db): State<Database>,
    ValidatedJson(notification): ValidatedJson<Notification>,
) -> ApiResult<Json<CreatedResponse>> {
    let id = db.insert_record(&notification).await?;
    Ok(Json(CreatedResponse::new(id)))
}

async fn list_notifications_handler(
    State(db): State<Database>,
    query: Result<Query<NotificationsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Document>>> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQueryParam(e.body_text()))?;
    let filter = Filter::new().eq_opt("class_code", non_empty(query.class_code));
    let docs = db.find_records::<Notification>(&filter, None).await;
    Ok(Json(public_documents(docs)))
}

// ==================
// Payments
// ==================

async fn create_payment_handler(
    State(db): State<Database>,
    ValidatedJson(payment): ValidatedJson<Payment>,
) -> ApiResult<Json<CreatedResponse>> {
    let id = db.insert_record(&payment).await?;
    Ok(Json(CreatedResponse::new(id)))
}

async fn list_payments_handler(
    State(db): State<Database>,
    query: Result<Query<PaymentsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Document>>> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQueryParam(e.body_text()))?;
    let filter = Filter::new().eq_opt("student_id", non_empty(query.student_id));
    let docs = db.find_records::<Payment>(&filter, None).await;
    Ok(Json(public_documents(docs)))
}
