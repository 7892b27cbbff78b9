//! Schema validation error types
//!
//! A failed validation yields every offending field, not just the first.

use std::fmt;

use serde::Serialize;

/// Validation failure details for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetails {
    /// Field name, or `$root` when the body itself is malformed
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, "field to be present", "missing")
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(field, expected, actual)
    }

    pub fn below_minimum(field: impl Into<String>, minimum: f64, actual: f64) -> Self {
        Self::new(
            field,
            format!("value greater than or equal to {}", minimum),
            actual.to_string(),
        )
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// All violations found in one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Record kind the document was checked against
    schema: String,
    details: Vec<ValidationDetails>,
}

impl ValidationErrors {
    pub fn new(schema: impl Into<String>, details: Vec<ValidationDetails>) -> Self {
        Self {
            schema: schema.into(),
            details,
        }
    }

    /// Returns the per-field details
    pub fn details(&self) -> &[ValidationDetails] {
        &self.details
    }

    pub fn into_details(self) -> Vec<ValidationDetails> {
        self.details
    }

    /// Whether a given field is among the violations
    pub fn has_field(&self, field: &str) -> bool {
        self.details.iter().any(|d| d.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} validation failed with {} error(s)",
            self.schema,
            self.details.len()
        )?;
        for detail in &self.details {
            write!(f, "; {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Result type for schema validation
pub type SchemaResult<T> = Result<T, ValidationErrors>;
