//! Database Configuration
//!
//! Chooses and builds the store backend at startup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::errors::StoreResult;
use super::{Database, MemoryStore, MongoStore};

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection string
    #[serde(default)]
    pub url: Option<String>,

    /// Database name (default: "university")
    #[serde(default = "default_name")]
    pub name: String,

    /// Use the in-memory store instead of MongoDB
    #[serde(default)]
    pub in_memory: bool,
}

fn default_name() -> String {
    "university".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: default_name(),
            in_memory: false,
        }
    }
}

impl DatabaseConfig {
    /// Whether a non-empty connection string was supplied
    pub fn url_configured(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Builds the database handle.
    ///
    /// Without a connection string (and without `in_memory`) the handle is
    /// disconnected: writes fail and reads come back empty.
    pub async fn connect(&self) -> StoreResult<Database> {
        if self.in_memory {
            info!(database = %self.name, "using in-memory document store");
            let store = MemoryStore::new(&self.name);
            return Ok(Database::new(Arc::new(store), self.url_configured()));
        }

        match self.url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => {
                let store = MongoStore::connect(url, &self.name).await?;
                info!(database = %self.name, "using MongoDB document store");
                Ok(Database::new(Arc::new(store), true))
            }
            None => {
                warn!("DATABASE_URL not set, running without a database");
                Ok(Database::disconnected(false))
            }
        }
    }
}
