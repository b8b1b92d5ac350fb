//! Tests for the logger module

use crate::logger::config::*;
use crate::logger::open_log_file;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn create_test_config() -> LoggerConfig {
    LoggerConfig {
        console: ConsoleConfig {
            enabled: true,
            colored: false,
        },
        file: FileConfig {
            enabled: false,
            path: PathBuf::from("test.log"),
            append: true,
            format: LogFormat::Full,
        },
        level: "info".to_string(),
    }
}

#[test]
fn test_default_config_creation() {
    let config = LoggerConfig::default();
    assert!(config.console.enabled);
    assert!(config.console.colored);
    assert!(!config.file.enabled);
    assert_eq!(config.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = create_test_config();
    assert!(config.validate().is_ok());

    config.console.enabled = false;
    config.file.enabled = false;
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_level_rejected() {
    let mut config = create_test_config();
    config.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    assert!("xml".parse::<LogFormat>().is_err());
    assert_eq!(LogFormat::default(), LogFormat::Full);
}

#[test]
fn test_level_is_case_insensitive() {
    let mut config = create_test_config();
    config.level = "WARN".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_file_enabled_requires_path() {
    let mut config = create_test_config();
    config.file.enabled = true;
    config.file.path = PathBuf::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_open_log_file_creates_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("app.log");
    let config = FileConfig {
        enabled: true,
        path: path.clone(),
        append: true,
        format: LogFormat::Json,
    };

    let mut file = open_log_file(&config).unwrap();
    writeln!(file, "hello").unwrap();
    assert!(path.exists());
}

#[test]
fn test_open_log_file_append_vs_truncate() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("app.log");
    std::fs::write(&path, "old\n").unwrap();

    let mut config = FileConfig {
        enabled: true,
        path: path.clone(),
        append: true,
        format: LogFormat::Full,
    };
    writeln!(open_log_file(&config).unwrap(), "new").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "old\nnew\n");

    config.append = false;
    writeln!(open_log_file(&config).unwrap(), "fresh").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
}
