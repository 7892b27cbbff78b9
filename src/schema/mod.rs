//! Schema subsystem
//!
//! Declarative record shapes enforced once, when a request body is parsed.
//!
//! # Design Principles
//!
//! - Explicit per-field constraint checks, no reflection
//! - Every violation reported, in declaration order
//! - No cross-field or cross-collection validation

mod errors;
mod records;
mod types;
mod validator;

pub use errors::{SchemaResult, ValidationDetails, ValidationErrors};
pub use records::{all_schemas, Class, Message, Notification, Payment, Record};
pub use types::{FieldDef, FieldType, Schema};
pub use validator::SchemaValidator;
