use scriptony_web::config::{AppConfig, LogFormat};
use scriptony_web::ui::theme::ThemeMode;
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    // SAFETY: every test in this file is `#[serial]`, so no other thread
    // reads or writes the environment concurrently.
    unsafe {
        for var in [
            "SCRIPTONY_SERVER__PORT",
            "SCRIPTONY_APP__VERSION",
            "SCRIPTONY_APP__ENVIRONMENT",
            "SCRIPTONY_THEME__DEFAULT_MODE",
            "CONFIG_FILE",
            "PORT",
            "HOST",
            "APP_VERSION",
            "APP_ENV",
        ] {
            env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["scriptony-web"]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.site.base_url, "https://scriptony.com");
    assert_eq!(config.theme.default_mode, ThemeMode::Light);
    assert!(config.theme.enable_system);
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(config.app.version_or_default(), "2.0.0");
    assert_eq!(config.app.environment_or_default(), "development");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    // SAFETY: serialized test.
    unsafe {
        env::set_var("SCRIPTONY_SERVER__PORT", "9090");
        env::set_var("SCRIPTONY_THEME__DEFAULT_MODE", "dark");
    }

    let config = AppConfig::load_from_args(["scriptony-web"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.theme.default_mode, ThemeMode::Dark);

    clear_env_vars();
}

#[test]
#[serial]
fn test_env_override_release_section() {
    clear_env_vars();
    // SAFETY: serialized test.
    unsafe {
        env::set_var("SCRIPTONY_APP__VERSION", "2.9.0");
        env::set_var("SCRIPTONY_APP__ENVIRONMENT", "staging");
    }

    let config = AppConfig::load_from_args(["scriptony-web"]).expect("Failed to load config");
    assert_eq!(config.app.version_or_default(), "2.9.0");
    assert_eq!(config.app.environment_or_default(), "staging");

    clear_env_vars();
}

#[test]
#[serial]
fn test_release_env_aliases() {
    clear_env_vars();
    // SAFETY: serialized test.
    unsafe {
        env::set_var("APP_VERSION", "2.7.3");
        env::set_var("APP_ENV", "production");
    }

    let config = AppConfig::load_from_args(["scriptony-web"]).expect("Failed to load config");
    assert_eq!(config.app.version_or_default(), "2.7.3");
    assert_eq!(config.app.environment_or_default(), "production");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_flags_win_over_env() {
    clear_env_vars();
    // SAFETY: serialized test.
    unsafe {
        env::set_var("SCRIPTONY_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["scriptony-web", "--port", "8181"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 8181);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("tempdir");
    let file_path = dir.path().join("scriptony.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
site:
  base_url: "https://staging.scriptony.com"
  build_label: "Staging"
logging:
  format: json
"#,
    )
    .expect("Failed to write temp config");

    let path = file_path.to_str().expect("utf-8 path");
    let config = AppConfig::load_from_args(["scriptony-web", "--config", path])
        .expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.site.base_url, "https://staging.scriptony.com");
    assert_eq!(config.site.build_label.as_deref(), Some("Staging"));
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["scriptony-web", "--config", "/definitely/not/here.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_invalid_theme_mode_is_rejected() {
    clear_env_vars();
    // SAFETY: serialized test.
    unsafe {
        env::set_var("SCRIPTONY_THEME__DEFAULT_MODE", "sepia");
    }

    let result = AppConfig::load_from_args(["scriptony-web"]);
    clear_env_vars();
    assert!(result.is_err());
}
