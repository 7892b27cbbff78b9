//! CLI argument definitions using clap
//!
//! Commands:
//! - university-backend serve [--port <port>] [--database-url <url>] ...
//! - university-backend schema

use clap::{Args, Parser, Subcommand};

use crate::http_server::HttpServerConfig;
use crate::store::DatabaseConfig;

/// University backend - validated document API for the campus app
#[derive(Parser, Debug)]
#[command(name = "university-backend")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Print the record schemas as JSON and exit
    Schema,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// MongoDB connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database name
    #[arg(long, env = "DATABASE_NAME", default_value = "university")]
    pub database_name: String,

    /// Keep documents in memory instead of MongoDB
    #[arg(long)]
    pub in_memory: bool,

    /// Allowed CORS origin; repeat for several. Omit to allow any origin
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,
}

impl ServeArgs {
    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
        }
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database_url.clone(),
            name: self.database_name.clone(),
            in_memory: self.in_memory,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "university-backend",
            "serve",
            "--port",
            "9000",
            "--database-url",
            "mongodb://localhost:27017",
            "--database-name",
            "campus",
        ])
        .unwrap();

        let Command::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.http_config().socket_addr(), "0.0.0.0:9000");

        let db = args.database_config();
        assert_eq!(db.url.as_deref(), Some("mongodb://localhost:27017"));
        assert_eq!(db.name, "campus");
        assert!(!db.in_memory);
    }

    #[test]
    fn test_schema_command() {
        let cli = Cli::try_parse_from(["university-backend", "schema"]).unwrap();
        assert!(matches!(cli.command, Command::Schema));
    }

    #[test]
    fn test_cors_origins_repeatable() {
        let cli = Cli::try_parse_from([
            "university-backend",
            "serve",
            "--in-memory",
            "--cors-origin",
            "http://a.example",
            "--cors-origin",
            "http://b.example",
        ])
        .unwrap();

        let Command::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert!(args.in_memory);
        assert_eq!(args.http_config().cors_origins.len(), 2);
    }
}
