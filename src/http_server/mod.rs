//! # HTTP Server Module
//!
//! Axum server exposing the four record collections.
//!
//! # Endpoints
//!
//! - `/`, `/schema`, `/test` - Liveness and diagnostics
//! - `/classes` - Classes
//! - `/notifications` - Notifications, filterable by `class_code`
//! - `/payments` - Payments, filterable by `student_id`
//! - `/classes/:class_code/messages` - Per-class chat

pub mod config;
pub mod diagnostic_routes;
pub mod errors;
pub mod extract;
pub mod message_routes;
pub mod record_routes;
pub mod response;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use extract::ValidatedJson;
pub use server::HttpServer;
