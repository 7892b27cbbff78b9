//! # Database Adapter
//!
//! Generic persistence over named collections, shared by every record kind.
//! Sits between HTTP handlers and the configured [`DocumentStore`].
//!
//! Writes and reads fail asymmetrically: a write against an unavailable
//! store returns an error, a read returns an empty result.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::document::{Document, Filter};
use super::errors::{StoreError, StoreResult};
use super::DocumentStore;
use crate::schema::Record;

/// Maximum number of collection names reported by [`Database::probe`]
const PROBE_COLLECTION_LIMIT: usize = 10;

/// Maximum length of an error message embedded in a probe status
const PROBE_ERROR_CHARS: usize = 50;

/// Handle to the document store, cloned into every request handler
#[derive(Clone)]
pub struct Database {
    store: Option<Arc<dyn DocumentStore>>,
    url_configured: bool,
}

impl Database {
    /// Wraps a connected store
    pub fn new(store: Arc<dyn DocumentStore>, url_configured: bool) -> Self {
        Self {
            store: Some(store),
            url_configured,
        }
    }

    /// A handle with no backing store
    pub fn disconnected(url_configured: bool) -> Self {
        Self {
            store: None,
            url_configured,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> StoreResult<&Arc<dyn DocumentStore>> {
        self.store.as_ref().ok_or_else(|| {
            StoreError::Unavailable("Please check DATABASE_URL and DATABASE_NAME".to_string())
        })
    }

    /// Inserts a validated record into a collection.
    ///
    /// `created_at` and `updated_at` are stamped onto the stored document.
    /// Returns the new document's identifier.
    pub async fn create_document<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> StoreResult<String> {
        let store = self.store()?;

        let mut document = match serde_json::to_value(record)? {
            Value::Object(map) => map,
            other => {
                return Err(StoreError::Encoding(format!(
                    "record must serialize to an object, got {}",
                    other
                )))
            }
        };

        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        document.insert("created_at".to_string(), Value::String(now.clone()));
        document.insert("updated_at".to_string(), Value::String(now));

        let id = store.insert(collection, document).await?;
        debug!(collection, %id, "document created");
        Ok(id)
    }

    /// Returns documents matching every filter condition, in store order.
    ///
    /// A `limit` of `None` or zero returns all matches. An unavailable or
    /// failing store yields an empty list.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Vec<Document> {
        let store = match self.store() {
            Ok(store) => store,
            Err(e) => {
                warn!(collection, error = %e, "read skipped");
                return Vec::new();
            }
        };

        let limit = limit.filter(|&n| n > 0);
        match store.query(collection, filter, limit).await {
            Ok(documents) => documents,
            Err(e) => {
                warn!(collection, error = %e, "read failed, returning no documents");
                Vec::new()
            }
        }
    }

    /// Inserts a record into its kind's collection
    pub async fn insert_record<R: Record>(&self, record: &R) -> StoreResult<String> {
        self.create_document(R::COLLECTION, record).await
    }

    /// Reads raw documents from a record kind's collection
    pub async fn find_records<R: Record>(
        &self,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Vec<Document> {
        self.get_documents(R::COLLECTION, filter, limit).await
    }

    /// Reports connectivity without ever failing.
    pub async fn probe(&self) -> DiagnosticReport {
        let mut report = DiagnosticReport {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: if self.url_configured {
                "✅ Set".to_string()
            } else {
                "❌ Not Set".to_string()
            },
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        let Some(store) = &self.store else {
            return report;
        };

        report.database = "✅ Available".to_string();
        report.database_name = Some(store.database_name().to_string());
        report.connection_status = "Connected".to_string();

        match store.list_collections().await {
            Ok(mut names) => {
                names.truncate(PROBE_COLLECTION_LIMIT);
                report.collections = names;
                report.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                let message: String = e.to_string().chars().take(PROBE_ERROR_CHARS).collect();
                report.database = format!("⚠️  Connected but Error: {}", message);
            }
        }

        report
    }
}

/// Connectivity report served by the diagnostic endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}
