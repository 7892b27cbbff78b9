//! Schema validator for request bodies
//!
//! Validation semantics:
//! - All required fields are present
//! - Field types match (string is exact, float accepts any JSON number)
//! - Null is accepted only by optional fields without a default
//! - Numeric lower bounds hold
//! - Defaults are applied to absent fields, never to explicit nulls
//! - Optional absent fields become explicit nulls
//! - Undeclared fields are dropped
//!
//! The validator never stops at the first failure; every violation is
//! collected in field declaration order.

use serde_json::{Map, Value};

use super::errors::{SchemaResult, ValidationDetails, ValidationErrors};
use super::types::{FieldDef, FieldType, Schema};

/// Validates documents against a single schema.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a document and returns its normalized form.
    ///
    /// The returned map contains exactly the declared fields, with
    /// defaults filled in.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` listing every offending field.
    pub fn validate(&self, document: &Value) -> SchemaResult<Map<String, Value>> {
        let obj = document.as_object().ok_or_else(|| {
            ValidationErrors::new(
                &self.schema.title,
                vec![ValidationDetails::type_mismatch(
                    "$root",
                    "object",
                    json_type_name(document),
                )],
            )
        })?;

        let mut normalized = Map::new();
        let mut details = Vec::new();

        for field in &self.schema.fields {
            match check_field(field, obj.get(&field.name)) {
                Ok(value) => {
                    normalized.insert(field.name.clone(), value);
                }
                Err(detail) => details.push(detail),
            }
        }

        if details.is_empty() {
            Ok(normalized)
        } else {
            Err(ValidationErrors::new(&self.schema.title, details))
        }
    }
}

/// Checks one field and resolves the value to store for it.
fn check_field(field: &FieldDef, value: Option<&Value>) -> Result<Value, ValidationDetails> {
    let value = match value {
        None => {
            if let Some(default) = &field.default {
                return Ok(default.clone());
            }
            if field.required {
                return Err(ValidationDetails::missing_field(&field.name));
            }
            return Ok(Value::Null);
        }
        // Only optional fields without a default are nullable.
        Some(Value::Null) if field.is_nullable() => return Ok(Value::Null),
        Some(v) => v,
    };

    match field.field_type {
        FieldType::String => {
            if !value.is_string() {
                return Err(type_error(field, value));
            }
        }
        FieldType::Float => {
            let number = value.as_f64().ok_or_else(|| type_error(field, value))?;
            if let Some(minimum) = field.minimum {
                if number < minimum {
                    return Err(ValidationDetails::below_minimum(&field.name, minimum, number));
                }
            }
        }
    }

    Ok(value.clone())
}

fn type_error(field: &FieldDef, value: &Value) -> ValidationDetails {
    ValidationDetails::type_mismatch(
        &field.name,
        field.field_type.type_name(),
        json_type_name(value),
    )
}

/// Returns the JSON type name of a value
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payment_schema() -> Schema {
        Schema::new(
            "Payment",
            vec![
                FieldDef::required_string("student_id", "Student identifier"),
                FieldDef::required_float("amount", "Amount").with_minimum(0.0),
                FieldDef::optional_string("term", "Term"),
                FieldDef::required_string("status", "Status").with_default("pending"),
            ],
        )
    }

    #[test]
    fn test_valid_document_is_normalized() {
        let schema = payment_schema();
        let validator = SchemaValidator::new(&schema);

        let out = validator
            .validate(&json!({"student_id": "s1", "amount": 10, "extra": true}))
            .unwrap();

        assert_eq!(out["student_id"], "s1");
        assert_eq!(out["amount"], 10);
        assert_eq!(out["term"], Value::Null);
        assert_eq!(out["status"], "pending");
        assert!(!out.contains_key("extra"));
    }

    #[test]
    fn test_errors_are_collected_in_declaration_order() {
        let schema = payment_schema();
        let validator = SchemaValidator::new(&schema);

        let err = validator
            .validate(&json!({"amount": "ten", "term": 3}))
            .unwrap_err();

        let fields: Vec<&str> = err.details().iter().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, vec!["student_id", "amount", "term"]);
        assert_eq!(err.details()[1].expected, "float");
        assert_eq!(err.details()[1].actual, "string");
        assert_eq!(err.details()[2].actual, "int");
    }

    #[test]
    fn test_minimum_is_inclusive() {
        let schema = payment_schema();
        let validator = SchemaValidator::new(&schema);

        assert!(validator
            .validate(&json!({"student_id": "s1", "amount": 0}))
            .is_ok());

        let err = validator
            .validate(&json!({"student_id": "s1", "amount": -0.01}))
            .unwrap_err();
        assert!(err.has_field("amount"));
    }

    #[test]
    fn test_null_required_field_is_type_mismatch() {
        let schema = payment_schema();
        let validator = SchemaValidator::new(&schema);

        let err = validator
            .validate(&json!({"student_id": null, "amount": 1}))
            .unwrap_err();
        assert_eq!(
            err.details(),
            &[ValidationDetails::type_mismatch("student_id", "string", "null")]
        );
    }

    #[test]
    fn test_null_does_not_take_default() {
        let schema = payment_schema();
        let validator = SchemaValidator::new(&schema);

        let err = validator
            .validate(&json!({"student_id": "s1", "amount": 1, "status": null}))
            .unwrap_err();
        assert_eq!(
            err.details(),
            &[ValidationDetails::type_mismatch("status", "string", "null")]
        );
    }

    #[test]
    fn test_null_accepted_by_optional_field() {
        let schema = payment_schema();
        let validator = SchemaValidator::new(&schema);

        let out = validator
            .validate(&json!({"student_id": "s1", "amount": 1, "term": null}))
            .unwrap();
        assert_eq!(out["term"], Value::Null);
    }

    #[test]
    fn test_explicit_value_overrides_default() {
        let schema = payment_schema();
        let validator = SchemaValidator::new(&schema);

        let out = validator
            .validate(&json!({"student_id": "s1", "amount": 1.5, "status": "paid"}))
            .unwrap();
        assert_eq!(out["status"], "paid");
    }

    #[test]
    fn test_non_object_root_rejected() {
        let schema = payment_schema();
        let validator = SchemaValidator::new(&schema);

        let err = validator.validate(&json!([1, 2])).unwrap_err();
        assert_eq!(err.details()[0].field, "$root");
        assert_eq!(err.details()[0].actual, "array");
    }
}
