//! Bootstrap configuration
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument / environment variable (applied by the binary)
//! 2. TOML config file
//! 3. Compiled defaults
//!
//! A missing config file is not an error: the service starts on defaults and
//! logs a warning once its subscriber is installed (see [`ConfigOrigin::log`]).

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default HTTP port for wordfreq-lookup
pub const DEFAULT_PORT: u16 = 5780;

/// Contents of `config.toml`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// SQLite database holding `word_frequencies`
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub logging: LoggingConfig,
    pub matching: MatchConfig,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            logging: LoggingConfig::default(),
            matching: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// How a search term is compared against stored words
///
/// Defaults are an exact, case-sensitive comparison of the untouched term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// When false, ASCII case is ignored (SQLite `NOCASE` collation)
    pub case_sensitive: bool,
    /// When true, leading/trailing whitespace is stripped before querying
    pub trim_whitespace: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            trim_whitespace: false,
        }
    }
}

impl TomlConfig {
    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|source| Error::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the config file, falling back to defaults when none exists
    ///
    /// An explicit path that does not exist is also treated as "no file";
    /// a file that exists but fails to parse is an error. Nothing is logged
    /// here: the returned [`ConfigOrigin`] is reported once logging is up.
    pub fn load_or_default(explicit_path: Option<&Path>) -> Result<(Self, ConfigOrigin)> {
        let path = match explicit_path {
            Some(path) => Some(path.to_path_buf()),
            None => locate_config_file(),
        };

        match path {
            Some(path) if path.exists() => {
                let config = Self::from_file(&path)?;
                Ok((config, ConfigOrigin::File(path)))
            }
            Some(path) => Ok((Self::default(), ConfigOrigin::Missing(path))),
            None => Ok((Self::default(), ConfigOrigin::NotFound)),
        }
    }
}

/// Where the bootstrap config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Parsed from this file
    File(PathBuf),
    /// This path was requested but does not exist; defaults in use
    Missing(PathBuf),
    /// No file in any standard location; defaults in use
    NotFound,
}

impl ConfigOrigin {
    pub fn uses_defaults(&self) -> bool {
        !matches!(self, ConfigOrigin::File(_))
    }

    /// Emit the startup line for this origin (warning when falling back to defaults)
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => info!("Loaded config from {}", path.display()),
            ConfigOrigin::Missing(path) => {
                warn!("Config file {} not found, using defaults", path.display())
            }
            ConfigOrigin::NotFound => warn!("No config file found, using defaults"),
        }
    }
}

/// Search the platform config locations for `wordfreq/config.toml`
///
/// Checks the user config dir, then `/etc/wordfreq` on Linux. An explicit
/// path (`--config` / `WORDFREQ_CONFIG`) is handled by the caller.
pub fn locate_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("wordfreq").join("config.toml"));
    if let Some(path) = user_config.filter(|p| p.exists()) {
        return Some(path);
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/wordfreq/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// OS-dependent default database location
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("wordfreq"))
        .unwrap_or_else(|| PathBuf::from("./wordfreq_data"))
        .join("wordfreq.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TomlConfig::default();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
        assert!(config.matching.case_sensitive);
        assert!(!config.matching.trim_whitespace);
        assert!(config.database_path.ends_with("wordfreq.db"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TomlConfig::from_toml_str("port = 9000\n[matching]\ncase_sensitive = false\n").unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert!(!config.matching.case_sensitive);
        assert!(!config.matching.trim_whitespace);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(TomlConfig::from_toml_str("port = \"not a number\"").is_err());
    }
}
