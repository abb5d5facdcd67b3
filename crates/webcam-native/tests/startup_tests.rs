//! Startup configuration tests
//!
//! These mutate `WEBCAM_NATIVE_CONFIG`, so they serialize on a lock and are
//! kept in their own test binary. Only `test_init_reports_invalid_startup_config`
//! touches the process-wide bridge.

mod common;

use std::io::Write;

use common::{capture, lines_at};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use webcam_native::config::CONFIG_ENV;
use webcam_native::{runtime, BridgeConfig, BridgeError};

static ENV_LOCK: Mutex<()> = parking_lot::const_mutex(());

/// Helper to write a config file that stays alive for the test
fn config_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_without_env_uses_defaults() {
    let _guard = ENV_LOCK.lock();
    std::env::remove_var(CONFIG_ENV);

    assert_eq!(BridgeConfig::load().unwrap(), BridgeConfig::default());
}

#[test]
fn test_load_with_empty_env_uses_defaults() {
    let _guard = ENV_LOCK.lock();
    std::env::set_var(CONFIG_ENV, "");

    let config = BridgeConfig::load().unwrap();
    std::env::remove_var(CONFIG_ENV);
    assert_eq!(config, BridgeConfig::default());
}

#[test]
fn test_load_reads_file_named_by_env() {
    let _guard = ENV_LOCK.lock();
    let file = config_file(r#"{"tag": "CamBridge", "label": "cv"}"#);
    std::env::set_var(CONFIG_ENV, file.path());

    let config = BridgeConfig::load().unwrap();
    std::env::remove_var(CONFIG_ENV);
    assert_eq!(config.tag, "CamBridge");
    assert_eq!(config.label, "cv");
}

#[test]
fn test_load_reports_invalid_file() {
    let _guard = ENV_LOCK.lock();
    let file = config_file(r#"{"tag": ""}"#);
    std::env::set_var(CONFIG_ENV, file.path());

    let result = BridgeConfig::load();
    std::env::remove_var(CONFIG_ENV);
    assert!(matches!(result, Err(BridgeError::Config(_))));
}

#[test]
fn test_startup_config_falls_back_on_invalid_file() {
    let _guard = ENV_LOCK.lock();
    let file = config_file("{not json");
    std::env::set_var(CONFIG_ENV, file.path());

    let (config, output) = capture(runtime::startup_config);
    std::env::remove_var(CONFIG_ENV);

    assert_eq!(config, BridgeConfig::default());
    let errors = lines_at(&output, "ERROR");
    assert_eq!(errors.len(), 1, "output was: {output}");
    assert!(errors[0].contains("ignoring invalid configuration"));
}

#[test]
fn test_init_reports_invalid_startup_config() {
    let _guard = ENV_LOCK.lock();
    let file = config_file(r#"{"log_level": "loud"}"#);
    std::env::set_var(CONFIG_ENV, file.path());

    let (bridge, output) = capture(runtime::init);
    std::env::remove_var(CONFIG_ENV);

    assert_eq!(bridge.config(), &BridgeConfig::default());
    let errors = lines_at(&output, "ERROR");
    assert_eq!(errors.len(), 1, "output was: {output}");
    assert!(errors[0].contains("loud"));
}
