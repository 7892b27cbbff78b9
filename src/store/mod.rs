//! # Document Store
//!
//! Collection-keyed persistence behind a single interface:
//!
//! - `insert(collection, doc) -> id`
//! - `query(collection, filter, limit) -> [doc]`
//!
//! Backends:
//! - [`MongoStore`] for deployments (`DATABASE_URL`)
//! - [`MemoryStore`] for tests and `--in-memory` runs
//!
//! The [`Database`] adapter wraps whichever backend is configured and is
//! injected into HTTP handlers as shared state.

mod config;
mod database;
mod document;
mod errors;
mod memory;
mod mongo;

use async_trait::async_trait;

pub use config::DatabaseConfig;
pub use database::{Database, DiagnosticReport};
pub use document::{into_public, Document, Filter, ID_FIELD, PUBLIC_ID_FIELD};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Trait implemented by every document store backend
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a document and returns its newly assigned identifier
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<String>;

    /// Returns documents matching every filter condition, in natural order.
    ///
    /// Returned documents carry their identifier under [`ID_FIELD`] as a
    /// JSON string.
    async fn query(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<Document>>;

    /// Names of the collections present in the database
    async fn list_collections(&self) -> StoreResult<Vec<String>>;

    /// Name of the underlying database
    fn database_name(&self) -> &str;
}
