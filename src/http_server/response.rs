//! # Response Formatting
//!
//! Response shapes shared by the record endpoints.

use serde::Serialize;

use crate::store::{into_public, Document};

/// Body returned after a successful insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Body returned by the root endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Reshapes stored documents for clients, exposing `id` instead of `_id`
pub fn public_documents(documents: Vec<Document>) -> Vec<Document> {
    documents.into_iter().map(into_public).collect()
}
