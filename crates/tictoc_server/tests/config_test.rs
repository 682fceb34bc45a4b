//! Tests for server configuration loading and precedence.

use std::io::Write;
use tempfile::NamedTempFile;
use tictoc_server::ServerConfig;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 3000);
    assert_eq!(config.log_filter(), "info,tictoc_server=debug");
}

#[test]
fn test_from_file_partial() {
    let file = write_config("port = 8080\n");
    let config = ServerConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(*config.port(), 8080);
    assert_eq!(config.host(), "127.0.0.1");
}

#[test]
fn test_from_file_full() {
    let file = write_config(
        r#"
host = "0.0.0.0"
port = 9000
log_filter = "warn"
"#,
    );
    let config = ServerConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(config.host(), "0.0.0.0");
    assert_eq!(*config.port(), 9000);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_from_file_missing() {
    let err = ServerConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_from_file_malformed() {
    let file = write_config("port = \"not a number\"\n");
    let err = ServerConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_env_overrides_file() {
    let config = ServerConfig::default().with_env(|key| match key {
        "HOST" => Some("10.0.0.1".to_string()),
        "PORT" => Some("4000".to_string()),
        _ => None,
    });
    assert_eq!(config.host(), "10.0.0.1");
    assert_eq!(*config.port(), 4000);
}

#[test]
fn test_invalid_env_port_is_ignored() {
    let config = ServerConfig::default().with_env(|key| match key {
        "PORT" => Some("eighty".to_string()),
        _ => None,
    });
    assert_eq!(*config.port(), 3000);
}

#[test]
fn test_cli_overrides_env() {
    let config = ServerConfig::default()
        .with_env(|key| (key == "PORT").then(|| "4000".to_string()))
        .with_overrides(Some("localhost".to_string()), Some(5000));
    assert_eq!(config.host(), "localhost");
    assert_eq!(*config.port(), 5000);
}

#[test]
fn test_missing_overrides_keep_values() {
    let config = ServerConfig::default().with_overrides(None, None);
    assert_eq!(config, ServerConfig::default());
}
