//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - schema: Print record schemas

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{run, run_command, schema, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
