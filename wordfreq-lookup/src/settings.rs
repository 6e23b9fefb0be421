//! Startup settings: command line / environment over TOML over defaults

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use wordfreq_common::config::{MatchConfig, TomlConfig};

/// Command-line arguments for wordfreq-lookup
///
/// Each option falls back to its `WORDFREQ_*` environment variable.
#[derive(Parser, Debug, Default)]
#[command(name = "wordfreq-lookup")]
#[command(about = "Word-frequency lookup service")]
#[command(version)]
pub struct CliArgs {
    /// TOML config file (defaults to the platform config location)
    #[arg(short, long, env = "WORDFREQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// SQLite database holding word_frequencies
    #[arg(short, long, env = "WORDFREQ_DATABASE")]
    pub database: Option<PathBuf>,

    /// Host name or IP address to bind (IPv6 without brackets)
    #[arg(long, env = "WORDFREQ_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "WORDFREQ_PORT")]
    pub port: Option<u16>,

    /// Create the database and schema if missing instead of requiring an existing file
    #[arg(long)]
    pub init_db: bool,
}

/// Effective settings after applying overrides to the TOML config
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub matching: MatchConfig,
    pub init_db: bool,
}

impl Settings {
    /// Values given on the command line (or via environment) win over the file
    pub fn resolve(args: CliArgs, toml: TomlConfig) -> Self {
        Self {
            database_path: args.database.unwrap_or(toml.database_path),
            host: args.host.unwrap_or(toml.host),
            port: args.port.unwrap_or(toml.port),
            log_level: toml.logging.level,
            matching: toml.matching,
            init_db: args.init_db,
        }
    }

    /// Bind the HTTP listener; `host` may be a hostname, IPv4 or bare IPv6 address
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port)).await
    }
}
