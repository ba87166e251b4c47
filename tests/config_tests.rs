use std::env;

use serial_test::serial;
use workforce_portal::config::{AppConfig, Env};

// Config loading reads process-wide environment variables, so these tests
// are serialized.

fn clear_portal_vars() {
    for name in [
        "APP_ENV",
        "LOGIN_PATH",
        "UNAUTHORIZED_PATH",
        "FALLBACK_LANDING_PATH",
    ] {
        unsafe { env::remove_var(name) };
    }
}

#[test]
#[serial]
fn test_load_defaults_to_local_with_documented_paths() {
    clear_portal_vars();

    let config = AppConfig::load();

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.unauthorized_path, "/unauthorized");
    assert_eq!(config.fallback_landing, "/dashboard");
}

#[test]
#[serial]
fn test_load_reads_production_env_and_overrides() {
    clear_portal_vars();
    unsafe {
        env::set_var("APP_ENV", "production");
        env::set_var("LOGIN_PATH", "/signin");
        env::set_var("FALLBACK_LANDING_PATH", "/home");
    }

    let config = AppConfig::load();
    clear_portal_vars();

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.login_path, "/signin");
    assert_eq!(config.unauthorized_path, "/unauthorized");
    assert_eq!(config.fallback_landing, "/home");
}

#[test]
#[serial]
fn test_load_fails_fast_on_relative_path() {
    clear_portal_vars();
    unsafe { env::set_var("UNAUTHORIZED_PATH", "unauthorized") };

    let result = std::panic::catch_unwind(AppConfig::load);
    clear_portal_vars();

    assert!(result.is_err(), "a relative deny target must abort startup");
}

#[test]
#[serial]
fn test_load_fails_fast_on_empty_path() {
    clear_portal_vars();
    unsafe { env::set_var("LOGIN_PATH", "") };

    let result = std::panic::catch_unwind(AppConfig::load);
    clear_portal_vars();

    assert!(result.is_err(), "an empty deny target must abort startup");
}

#[test]
fn test_default_is_test_safe() {
    // Default never touches the environment and mirrors the documented
    // targets, so guard tests can build state without variable juggling.
    let config = AppConfig::default();
    assert_eq!(config.env, Env::Local);
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.unauthorized_path, "/unauthorized");
    assert_eq!(config.fallback_landing, "/dashboard");
}
