//! Diagnostic HTTP Routes
//!
//! Liveness, database connectivity and schema introspection. None of these
//! endpoints write anything, and none of them return an error status.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Map, Value};

use super::response::MessageResponse;
use crate::schema::all_schemas;
use crate::store::{Database, DiagnosticReport};

/// Create diagnostic routes
pub fn diagnostic_routes(db: Database) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/schema", get(schema_handler))
        .route("/test", get(test_database_handler))
        .with_state(db)
}

/// Liveness handler
async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "University backend is running".to_string(),
    })
}

/// Schema definitions for external database viewers
async fn schema_handler() -> Json<Map<String, Value>> {
    Json(all_schemas())
}

/// Connectivity report; probe failures become status text
async fn test_database_handler(State(db): State<Database>) -> Json<DiagnosticReport> {
    Json(db.probe().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_serialization() {
        let response = MessageResponse {
            message: "ok".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"ok"}"#);
    }
}
