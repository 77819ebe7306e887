//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Mongo User API - user records over HTTP, stored in MongoDB
#[derive(Parser, Debug)]
#[command(name = "mongo-user-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Print the OpenAPI document as JSON
    Openapi,
}

/// Arguments for the serve command
///
/// Unset flags fall back to `HOST` / `PORT` from the environment.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::parse_from(["mongo-user-api", "serve", "--port", "8080", "-H", "127.0.0.1"]);

        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_defaults_to_none() {
        let cli = Cli::parse_from(["mongo-user-api", "serve"]);

        match cli.command {
            Commands::Serve(args) => {
                assert!(args.port.is_none());
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["mongo-user-api", "openapi", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Openapi));
    }
}
