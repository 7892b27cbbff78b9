//! Record kinds stored by the backend
//!
//! Each record kind lives in its own collection, named after the lowercase
//! kind name. No cross-collection references are enforced.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::SchemaResult;
use super::types::{FieldDef, Schema};
use super::validator::SchemaValidator;

/// A validated document shape bound to a collection.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection holding documents of this kind
    const COLLECTION: &'static str;

    /// Declarative schema for this kind
    fn schema() -> Schema;

    /// Validates a raw body and returns its normalized form
    fn validate(body: &Value) -> SchemaResult<Map<String, Value>> {
        let schema = Self::schema();
        SchemaValidator::new(&schema).validate(body)
    }
}

/// A class offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub code: String,
    pub name: String,
    pub instructor: String,
    pub schedule: String,
}

impl Record for Class {
    const COLLECTION: &'static str = "class";

    fn schema() -> Schema {
        Schema::new(
            "Class",
            vec![
                FieldDef::required_string("code", "Unique class code, e.g., CS101"),
                FieldDef::required_string("name", "Class title"),
                FieldDef::required_string("instructor", "Instructor full name"),
                FieldDef::required_string(
                    "schedule",
                    "When the class meets, e.g., Mon/Wed 10:00-11:15",
                ),
            ],
        )
    }
}

/// A broadcast notification, optionally targeted at one class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub class_code: Option<String>,
}

impl Record for Notification {
    const COLLECTION: &'static str = "notification";

    fn schema() -> Schema {
        Schema::new(
            "Notification",
            vec![
                FieldDef::required_string("title", "Notification title"),
                FieldDef::required_string("body", "Notification content"),
                FieldDef::optional_string(
                    "class_code",
                    "Optional class code if targeted to a specific class",
                ),
            ],
        )
    }
}

/// A tuition payment owed or made by a student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub student_id: String,
    pub amount: f64,
    pub term: String,
    pub status: String,
}

impl Record for Payment {
    const COLLECTION: &'static str = "payment";

    fn schema() -> Schema {
        Schema::new(
            "Payment",
            vec![
                FieldDef::required_string("student_id", "Student identifier"),
                FieldDef::required_float("amount", "Amount to be paid").with_minimum(0.0),
                FieldDef::required_string("term", "Term/semester identifier, e.g., Fall 2025"),
                FieldDef::required_string("status", "Payment status: pending, paid, failed")
                    .with_default("pending"),
            ],
        )
    }
}

/// A chat message posted to a class channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub class_code: String,
    pub author: String,
    pub content: String,
}

impl Message {
    /// Binds the message to the class named in the request path.
    ///
    /// The path is authoritative: a different body value is replaced.
    /// Returns whether the body value was overwritten.
    pub fn bind_to_class(&mut self, class_code: &str) -> bool {
        if self.class_code == class_code {
            return false;
        }
        self.class_code = class_code.to_string();
        true
    }
}

impl Record for Message {
    const COLLECTION: &'static str = "message";

    fn schema() -> Schema {
        Schema::new(
            "Message",
            vec![
                FieldDef::required_string(
                    "class_code",
                    "Class code to which this message belongs",
                ),
                FieldDef::required_string("author", "Display name or student id of sender"),
                FieldDef::required_string("content", "Message text content"),
            ],
        )
    }
}

/// JSON schemas of every record kind, keyed by collection name
pub fn all_schemas() -> Map<String, Value> {
    let mut schemas = Map::new();
    schemas.insert(Class::COLLECTION.into(), Class::schema().to_json_schema());
    schemas.insert(
        Notification::COLLECTION.into(),
        Notification::schema().to_json_schema(),
    );
    schemas.insert(Payment::COLLECTION.into(), Payment::schema().to_json_schema());
    schemas.insert(Message::COLLECTION.into(), Message::schema().to_json_schema());
    schemas
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_names() {
        assert_eq!(Class::COLLECTION, "class");
        assert_eq!(Notification::COLLECTION, "notification");
        assert_eq!(Payment::COLLECTION, "payment");
        assert_eq!(Message::COLLECTION, "message");
    }

    #[test]
    fn test_payment_validation_fills_status() {
        let normalized =
            Payment::validate(&json!({"student_id": "s1", "amount": 0, "term": "Fall 2025"}))
                .unwrap();
        let payment: Payment = serde_json::from_value(Value::Object(normalized)).unwrap();

        assert_eq!(payment.amount, 0.0);
        assert_eq!(payment.status, "pending");
    }

    #[test]
    fn test_notification_class_code_is_optional() {
        let normalized = Notification::validate(&json!({"title": "t", "body": "b"})).unwrap();
        let notification: Notification =
            serde_json::from_value(Value::Object(normalized)).unwrap();
        assert_eq!(notification.class_code, None);
    }

    #[test]
    fn test_class_requires_every_field() {
        let err = Class::validate(&json!({"code": "CS101"})).unwrap_err();
        assert_eq!(err.details().len(), 3);
        assert!(err.has_field("schedule"));
    }

    #[test]
    fn test_message_bind_to_class() {
        let mut message = Message {
            class_code: "CS999".into(),
            author: "ada".into(),
            content: "hi".into(),
        };

        assert!(message.bind_to_class("CS101"));
        assert_eq!(message.class_code, "CS101");
        assert!(!message.bind_to_class("CS101"));
    }

    #[test]
    fn test_all_schemas_keys() {
        let schemas = all_schemas();
        let mut keys: Vec<&str> = schemas.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["class", "message", "notification", "payment"]);
        assert_eq!(schemas["payment"]["properties"]["amount"]["minimum"], 0.0);
    }
}
