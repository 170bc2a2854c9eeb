use std::collections::HashMap;
use std::time::Duration;

use loan_reports::core::config::{
    ENV_API_URL, ENV_DOWNLOAD_DIR, ENV_FALLBACK_DELAY_MS, ENV_TIMEOUT_SECS, ENV_TOKEN_FILE,
};
use loan_reports::{Config, ReportError};

use crate::common::scratch_dir;

fn from(pairs: &[(&str, &str)]) -> Result<Config, ReportError> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Config::from_lookup(|k| map.get(k).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = from(&[]).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.api_url.as_str(), "http://localhost:5000/");
    assert_eq!(cfg.timeout, Duration::from_secs(10));
    assert_eq!(cfg.fallback_delay, Duration::from_millis(500));
    assert!(cfg.token_file.is_none());
}

#[test]
fn reads_every_variable() {
    let cfg = from(&[
        (ENV_API_URL, "https://api.example.com/"),
        (ENV_TOKEN_FILE, "/tmp/token"),
        (ENV_TIMEOUT_SECS, "3"),
        (ENV_FALLBACK_DELAY_MS, "0"),
        (ENV_DOWNLOAD_DIR, "out"),
    ])
    .unwrap();

    assert_eq!(cfg.api_url.as_str(), "https://api.example.com/");
    assert_eq!(cfg.token_file.as_deref(), Some(std::path::Path::new("/tmp/token")));
    assert_eq!(cfg.timeout, Duration::from_secs(3));
    assert_eq!(cfg.fallback_delay, Duration::ZERO);
    assert_eq!(cfg.download_dir, std::path::PathBuf::from("out"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = from(&[(ENV_TIMEOUT_SECS, "  "), (ENV_API_URL, "")]).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn unparsable_values_are_config_errors() {
    let err = from(&[(ENV_TIMEOUT_SECS, "ten")]).unwrap_err();
    assert!(matches!(err, ReportError::Config(ref m) if m.contains(ENV_TIMEOUT_SECS)));

    let err = from(&[(ENV_API_URL, "not a url")]).unwrap_err();
    assert!(matches!(err, ReportError::Config(_)));
}

#[test]
fn token_file_store_persists_between_clients() {
    let dir = scratch_dir("config-token");
    let path = dir.join("nested/token");
    let cfg = from(&[(ENV_TOKEN_FILE, path.to_str().unwrap())]).unwrap();

    cfg.token_store().set_token("abc123").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "abc123");

    let client = cfg.client_builder().build().unwrap();
    assert_eq!(client.tokens().token().as_deref(), Some("abc123"));

    client.tokens().clear().unwrap();
    assert!(cfg.token_store().token().is_none());
    // clearing twice is fine
    cfg.token_store().clear().unwrap();
}
