//! Layering and validation coverage for the config loader.

use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use marquee_config::{ConfigLoadError, ConfigLoader};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn write_toml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write toml");
    file
}

#[test]
fn defaults_apply_without_file_or_env() {
    let load = ConfigLoader::new()
        .without_env_file()
        .load_with_env(env_from(&[]))
        .expect("load");

    assert_eq!(load.config.server_url(), "http://localhost:8080");
    assert_eq!(load.config.server.request_timeout, Duration::from_secs(30));
    assert_eq!(load.config.search.scroll_threshold_px, 20.0);
    assert!(load.config.recent.persist);
    assert!(load.warnings.is_empty());
}

#[test]
fn env_overrides_file_values() {
    let file = write_toml(
        r#"
        [server]
        url = "http://files.example.com:9000"
        request_timeout = "5s"

        [search]
        scroll_threshold_px = 48.0

        [recent]
        persist = false
        "#,
    );

    let load = ConfigLoader::new()
        .without_env_file()
        .with_config_path(file.path())
        .load_with_env(env_from(&[
            ("MARQUEE_SERVER_URL", "https://env.example.com"),
            ("MARQUEE_PERSIST_RECENT", "yes"),
        ]))
        .expect("load");

    let config = load.config;
    assert_eq!(config.server_url(), "https://env.example.com");
    assert_eq!(config.server.request_timeout, Duration::from_secs(5));
    assert_eq!(config.search.scroll_threshold_px, 48.0);
    assert!(config.recent.persist);
    assert_eq!(config.metadata.config_path.as_deref(), Some(file.path()));
}

#[test]
fn schemeless_url_is_normalized_with_a_warning() {
    let load = ConfigLoader::new()
        .without_env_file()
        .load_with_env(env_from(&[("MARQUEE_SERVER_URL", "localhost:8080/")]))
        .expect("load");

    assert_eq!(load.config.server_url(), "http://localhost:8080");
    assert_eq!(load.warnings.len(), 1);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = ConfigLoader::new()
        .without_env_file()
        .with_config_path(dir.path().join("absent.toml"))
        .load_with_env(env_from(&[]))
        .expect_err("missing file must fail");

    assert!(matches!(err, ConfigLoadError::Io { .. }));
}

#[test]
fn malformed_toml_reports_parse_error() {
    let file = write_toml("[server\nurl = ");
    let err = ConfigLoader::new()
        .without_env_file()
        .with_config_path(file.path())
        .load_with_env(env_from(&[]))
        .expect_err("parse must fail");

    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn invalid_values_are_rejected() {
    let negative = ConfigLoader::new()
        .without_env_file()
        .load_with_env(env_from(&[("MARQUEE_SCROLL_THRESHOLD_PX", "-4")]))
        .expect_err("negative threshold");
    assert!(matches!(negative, ConfigLoadError::InvalidValue { .. }));

    let timeout = ConfigLoader::new()
        .without_env_file()
        .load_with_env(env_from(&[("MARQUEE_REQUEST_TIMEOUT", "soon")]))
        .expect_err("bad duration");
    assert!(matches!(timeout, ConfigLoadError::InvalidValue { .. }));

    let url = ConfigLoader::new()
        .without_env_file()
        .load_with_env(env_from(&[("MARQUEE_SERVER_URL", "http://exa mple")]))
        .expect_err("bad url");
    assert!(matches!(url, ConfigLoadError::InvalidServerUrl { .. }));
}

#[test]
fn recent_path_from_env_is_kept() {
    let load = ConfigLoader::new()
        .without_env_file()
        .load_with_env(env_from(&[
            ("MARQUEE_RECENT_PATH", "/tmp/marquee/recent.json"),
            ("MARQUEE_PERSIST_RECENT", "off"),
        ]))
        .expect("load");

    assert!(!load.config.recent.persist);
    assert!(load.config.recent.path.is_some());
    assert_eq!(load.warnings.len(), 1);
}
