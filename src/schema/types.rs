//! Schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string
//! - float: 64-bit floating point (integers accepted)
//!
//! A schema is an ordered list of field definitions. Declaration order is
//! the order in which validation errors are reported.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit floating point
    Float,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Float => "float",
        }
    }

    /// Returns the JSON-Schema type keyword
    pub fn json_schema_type(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Float => "number",
        }
    }
}

/// Field definition with its value constraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name as it appears in request bodies and stored documents
    pub name: String,
    /// Field data type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
    /// Human-readable description
    pub description: String,
    /// Inclusive lower bound for numeric fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Value applied when the field is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl FieldDef {
    fn new(name: &str, field_type: FieldType, required: bool, description: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            required,
            description: description.to_string(),
            minimum: None,
            default: None,
        }
    }

    /// Create a required string field
    pub fn required_string(name: &str, description: &str) -> Self {
        Self::new(name, FieldType::String, true, description)
    }

    /// Create an optional string field
    pub fn optional_string(name: &str, description: &str) -> Self {
        Self::new(name, FieldType::String, false, description)
    }

    /// Create a required float field
    pub fn required_float(name: &str, description: &str) -> Self {
        Self::new(name, FieldType::Float, true, description)
    }

    /// Sets an inclusive lower bound
    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Sets a default value; a defaulted field is never required
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self.required = false;
        self
    }

    /// Whether an explicit null is an acceptable value
    pub fn is_nullable(&self) -> bool {
        !self.required && self.default.is_none()
    }

    /// Title-cased name, e.g. `class_code` -> `Class Code`
    fn title(&self) -> String {
        self.name
            .split('_')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    fn to_json_schema(&self) -> Value {
        let mut property = Map::new();

        if !self.is_nullable() {
            property.insert("type".into(), json!(self.field_type.json_schema_type()));
        } else {
            property.insert(
                "anyOf".into(),
                json!([{ "type": self.field_type.json_schema_type() }, { "type": "null" }]),
            );
            property.insert("default".into(), Value::Null);
        }

        if let Some(default) = &self.default {
            property.insert("default".into(), default.clone());
        }
        if let Some(minimum) = self.minimum {
            property.insert("minimum".into(), json!(minimum));
        }

        property.insert("title".into(), json!(self.title()));
        property.insert("description".into(), json!(self.description));

        Value::Object(property)
    }
}

/// Complete schema definition for one record kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Record kind name, e.g. "Payment"
    pub title: String,
    /// Field definitions in declaration order
    pub fields: Vec<FieldDef>,
}

impl Schema {
    /// Create a new schema
    pub fn new(title: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }

    /// Names of all fields that must be supplied by the client
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Renders the schema as a JSON-Schema object for external viewers
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.to_json_schema()))
            .collect();

        let mut schema = Map::new();
        schema.insert("title".into(), json!(self.title));
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), json!(self.required_fields()));

        Value::Object(schema)
    }
}
