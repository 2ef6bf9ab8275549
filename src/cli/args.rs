//! CLI argument definitions using clap
//!
//! Commands:
//! - planet-api serve [--config <path>] [--port <port>] [--seed]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// planet-api - A strict, filterable planet catalog service
#[derive(Parser, Debug)]
#[command(name = "planet-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the catalog HTTP server
    Serve {
        /// Path to a JSON configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Preload the starter catalog before serving
        #[arg(long)]
        seed: bool,
    },
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
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["planet-api", "serve"]).unwrap();

        let Command::Serve { config, port, seed } = cli.command;
        assert_eq!(config, None);
        assert_eq!(port, None);
        assert!(!seed);
    }

    #[test]
    fn test_serve_with_flags() {
        let cli = Cli::try_parse_from([
            "planet-api",
            "serve",
            "--config",
            "catalog.json",
            "--port",
            "9000",
            "--seed",
        ])
        .unwrap();

        let Command::Serve { config, port, seed } = cli.command;
        assert_eq!(config, Some(PathBuf::from("catalog.json")));
        assert_eq!(port, Some(9000));
        assert!(seed);
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["planet-api", "query"]).is_err());
    }
}
