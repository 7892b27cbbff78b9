//! CLI command implementations

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use super::args::{Cli, Command, ServeArgs};
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::schema::all_schemas;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(&args),
        Command::Schema => schema(&mut io::stdout()),
    }
}

/// Installs the global tracing subscriber, honouring `RUST_LOG`
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed by an embedding process.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Start the HTTP server
///
/// 1. Initialize logging
/// 2. Build the database handle from flags/environment
/// 3. Start the Axum server and block until shutdown
pub fn serve(args: &ServeArgs) -> CliResult<()> {
    init_logging();

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let db = args.database_config().connect().await?;
        let server = HttpServer::new(args.http_config(), db);

        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Write the record schemas as pretty JSON
pub fn schema<W: Write>(out: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, &all_schemas())?;
    writeln!(out)?;
    Ok(())
}
