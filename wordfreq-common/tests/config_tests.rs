//! Tests for bootstrap configuration loading and graceful degradation

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use wordfreq_common::config::{ConfigOrigin, TomlConfig, DEFAULT_PORT};

#[test]
fn test_full_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
database_path = "/srv/wordfreq/words.db"
host = "0.0.0.0"
port = 6000

[logging]
level = "debug"

[matching]
case_sensitive = false
trim_whitespace = true
"#
    )
    .unwrap();

    let config = TomlConfig::from_file(file.path()).unwrap();

    assert_eq!(config.database_path.to_str(), Some("/srv/wordfreq/words.db"));
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 6000);
    assert_eq!(config.logging.level, "debug");
    assert!(!config.matching.case_sensitive);
    assert!(config.matching.trim_whitespace);
}

#[test]
fn test_missing_explicit_file_uses_defaults() {
    let missing = Path::new("/nonexistent/wordfreq/config.toml");

    let (config, origin) = TomlConfig::load_or_default(Some(missing)).unwrap();

    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.matching.case_sensitive);
    assert_eq!(origin, ConfigOrigin::Missing(PathBuf::from(missing)));
    assert!(origin.uses_defaults());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "port = [").unwrap();

    let result = TomlConfig::load_or_default(Some(file.path()));
    assert!(matches!(result, Err(wordfreq_common::Error::ConfigParse { .. })));
}

#[test]
fn test_explicit_file_reports_its_origin() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "port = 6123").unwrap();

    let (config, origin) = TomlConfig::load_or_default(Some(file.path())).unwrap();

    assert_eq!(config.port, 6123);
    assert_eq!(origin, ConfigOrigin::File(file.path().to_path_buf()));
    assert!(!origin.uses_defaults());
}
