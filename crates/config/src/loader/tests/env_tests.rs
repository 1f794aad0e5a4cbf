//! Environment variable tests for the configuration loader.

use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

use super::{CLEARED_ENV, env_lock};

fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
    let mut all: Vec<(&str, Option<&str>)> = CLEARED_ENV.to_vec();
    all.extend_from_slice(vars);
    temp_env::with_vars(all, f);
}

#[test]
#[serial]
fn test_from_env_reads_all_variables() {
    let _lock = env_lock().lock().unwrap();

    with_env(
        &[
            ("UPTIMEROBOT_API_KEY", Some("env-key")),
            ("UPTIMEROBOT_BASE_URL", Some("http://localhost:9999")),
            ("UPTIMEROBOT_TIMEOUT", Some("12")),
            ("UPTIMEROBOT_DISABLE_CACHING", Some("true")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert_eq!(config.auth.api_key.expose_secret(), "env-key");
            assert_eq!(config.connection.base_url, "http://localhost:9999");
            assert_eq!(config.connection.timeout, Duration::from_secs(12));
            assert!(config.connection.disable_caching);
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    with_env(&[("UPTIMEROBOT_API_KEY", Some("env-key"))], || {
        let config = ConfigLoader::new()
            .from_env()
            .unwrap()
            .with_api_key("cli-key".to_string())
            .build()
            .unwrap();

        assert_eq!(config.auth.api_key.expose_secret(), "cli-key");
    });
}

#[test]
#[serial]
fn test_empty_api_key_env_treated_as_unset() {
    let _lock = env_lock().lock().unwrap();

    with_env(&[("UPTIMEROBOT_API_KEY", Some("   "))], || {
        let result = ConfigLoader::new().from_env().unwrap().build();
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    });
}

#[test]
#[serial]
fn test_invalid_timeout_env_rejected() {
    let _lock = env_lock().lock().unwrap();

    with_env(&[("UPTIMEROBOT_TIMEOUT", Some("soon"))], || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "UPTIMEROBOT_TIMEOUT");
            }
            other => panic!("Expected InvalidValue, got {:?}", other.err()),
        }
    });
}

#[test]
#[serial]
fn test_invalid_disable_caching_env_rejected() {
    let _lock = env_lock().lock().unwrap();

    with_env(&[("UPTIMEROBOT_DISABLE_CACHING", Some("sometimes"))], || {
        let result = ConfigLoader::new().from_env();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    });
}

#[test]
#[serial]
fn test_env_var_or_none_trims_value() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("UPTIMEROBOT_TEST_TRIM", Some("  padded  "), || {
        assert_eq!(
            env_var_or_none("UPTIMEROBOT_TEST_TRIM").as_deref(),
            Some("padded")
        );
    });
}
