use send_token::core::config::{SendTokenConfig, CONFIG_PATH_ENV, SLOW_SUBMIT_WARN_ENV};
use send_token::{GasPrice, SendTokenError};
use serial_test::serial;
use std::io::Write;
use std::time::Duration;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn clear_env() {
    std::env::remove_var(CONFIG_PATH_ENV);
    std::env::remove_var(SLOW_SUBMIT_WARN_ENV);
}

#[test]
#[serial]
fn load_without_sources_uses_defaults() {
    clear_env();
    let config = SendTokenConfig::load(None).unwrap();
    assert_eq!(config, SendTokenConfig::default());
}

#[test]
#[serial]
fn load_explicit_path() {
    clear_env();
    let file = write_config(
        r#"
        [submission]
        slow_warning_secs = 12

        [logging]
        filter = "send_token=debug"

        [defaults]
        gas_price = "20 gwei"
        "#,
    );
    let config = SendTokenConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.submission.slow_warning(), Duration::from_secs(12));
    assert_eq!(config.logging.filter, "send_token=debug");
    assert_eq!(config.defaults.gas_price, Some(GasPrice::from("20 gwei")));
}

#[test]
#[serial]
fn load_path_from_env() {
    clear_env();
    let file = write_config("[submission]\nslow_warning_secs = 7\n");
    std::env::set_var(CONFIG_PATH_ENV, file.path());
    let config = SendTokenConfig::load(None).unwrap();
    clear_env();
    assert_eq!(config.submission.slow_warning_secs, 7);
}

#[test]
#[serial]
fn slow_warning_env_overrides_file() {
    clear_env();
    let file = write_config("[submission]\nslow_warning_secs = 7\n");
    std::env::set_var(SLOW_SUBMIT_WARN_ENV, "3");
    let config = SendTokenConfig::load(Some(file.path())).unwrap();
    clear_env();
    assert_eq!(config.submission.slow_warning_secs, 3);
}

#[test]
#[serial]
fn bad_slow_warning_env_is_config_error() {
    clear_env();
    std::env::set_var(SLOW_SUBMIT_WARN_ENV, "soon");
    let err = SendTokenConfig::load(None).unwrap_err();
    clear_env();
    assert!(err.is_config_error());

    std::env::set_var(SLOW_SUBMIT_WARN_ENV, "0");
    let err = SendTokenConfig::load(None).unwrap_err();
    clear_env();
    assert!(err.is_config_error());
}

#[test]
#[serial]
fn missing_file_is_io_error() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let err = SendTokenConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, SendTokenError::Io(_)));
}
