use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

use wellme::config::Config;

const WELLME_ENV_VARS: &[&str] = &[
    "WELLME_DIR",
    "WELLME_ADVICE_URL",
    "WELLME_QUOTE_URL",
    "WELLME_ACTIVITY_URL",
    "WELLME_SUGGEST_TIMEOUT_SECS",
];

/// Runs `f` with all wellme environment variables cleared, restoring the
/// original values afterwards.
fn with_clean_env(f: impl FnOnce()) {
    let saved: Vec<(&str, Option<String>)> = WELLME_ENV_VARS
        .iter()
        .map(|&name| (name, env::var(name).ok()))
        .collect();
    for name in WELLME_ENV_VARS {
        env::remove_var(name);
    }

    f();

    for (name, value) in saved {
        match value {
            Some(val) => env::set_var(name, val),
            None => env::remove_var(name),
        }
    }
}

#[test]
#[serial]
fn test_config_load_with_environment_vars() {
    with_clean_env(|| {
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().to_string_lossy().to_string();

        env::set_var("WELLME_DIR", &dir_path);
        env::set_var("WELLME_ADVICE_URL", "http://localhost:9/advice");
        env::set_var("WELLME_SUGGEST_TIMEOUT_SECS", "2");

        let config = Config::load().unwrap();
        assert_eq!(config.data_dir, PathBuf::from(&dir_path));
        assert_eq!(config.advice_url, "http://localhost:9/advice");
        assert_eq!(config.suggest_timeout, Duration::from_secs(2));
        // Unset endpoints keep their defaults
        assert_eq!(config.quote_url, "https://api.quotable.io/random");
    });
}

#[test]
#[serial]
fn test_config_load_with_fallbacks() {
    with_clean_env(|| {
        let original_home = env::var("HOME").ok();

        let temp_dir = tempdir().unwrap();
        let home_path = temp_dir.path().to_string_lossy().to_string();
        env::set_var("HOME", &home_path);

        let config = Config::load().unwrap();

        let expected_data_dir = PathBuf::from(&home_path)
            .join(".local")
            .join("share")
            .join("wellme");
        assert_eq!(config.data_dir, expected_data_dir);
        assert_eq!(config.suggest_timeout, Duration::from_secs(6));

        match original_home {
            Some(val) => env::set_var("HOME", val),
            None => env::remove_var("HOME"),
        }
    });
}

#[test]
#[serial]
fn test_config_load_rejects_bad_timeout() {
    with_clean_env(|| {
        env::set_var("WELLME_DIR", "/tmp/wellme-test");

        env::set_var("WELLME_SUGGEST_TIMEOUT_SECS", "soon");
        assert!(Config::load().is_err());

        env::set_var("WELLME_SUGGEST_TIMEOUT_SECS", "0");
        assert!(Config::load().is_err());
    });
}

#[test]
#[serial]
fn test_config_load_expands_tilde() {
    with_clean_env(|| {
        let original_home = env::var("HOME").ok();

        let temp_dir = tempdir().unwrap();
        let home_path = temp_dir.path().to_string_lossy().to_string();
        env::set_var("HOME", &home_path);
        env::set_var("WELLME_DIR", "~/moods");

        let config = Config::load().unwrap();
        assert_eq!(config.data_dir, PathBuf::from(&home_path).join("moods"));

        match original_home {
            Some(val) => env::set_var("HOME", val),
            None => env::remove_var("HOME"),
        }
    });
}
