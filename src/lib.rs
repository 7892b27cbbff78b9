//! university-backend - validated document API for a university mobile app
//!
//! Four collections (classes, notifications, payments, chat messages) over a
//! document store, with schema validation at the HTTP boundary.

pub mod cli;
pub mod http_server;
pub mod schema;
pub mod store;
