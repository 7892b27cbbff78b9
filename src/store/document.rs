//! # Documents and Equality Filters
//!
//! A document is a JSON object. Stored documents carry their identifier
//! under [`ID_FIELD`]; clients only ever see it as `id`.

use serde::Serialize;
use serde_json::{Map, Value};

/// A stored document: field name to value
pub type Document = Map<String, Value>;

/// Internal identifier key inside stored documents
pub const ID_FIELD: &str = "_id";

/// Public identifier key in responses
pub const PUBLIC_ID_FIELD: &str = "id";

/// An equality filter: every condition must hold (logical AND)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Filter {
    conditions: Map<String, Value>,
}

impl Filter {
    /// An empty filter matching every document
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exact-match condition on a field
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.insert(field.into(), value.into());
        self
    }

    /// Adds the condition only when a value is supplied
    pub fn eq_opt(self, field: impl Into<String>, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(v) => self.eq(field, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// The field → value conditions
    pub fn conditions(&self) -> &Map<String, Value> {
        &self.conditions
    }

    /// Check if a document matches every condition.
    ///
    /// An absent field compares equal to null.
    pub fn matches(&self, doc: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| doc.get(field).unwrap_or(&Value::Null) == expected)
    }
}

/// Moves the internal identifier to the public `id` field as a string.
pub fn into_public(mut doc: Document) -> Document {
    if let Some(id) = doc.remove(ID_FIELD) {
        let id = match id {
            Value::String(s) => s,
            other => other.to_string(),
        };
        doc.insert(PUBLIC_ID_FIELD.to_string(), Value::String(id));
    }
    doc
}
