//! Configuration management for the wellme application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring the
//! data directory, the suggestion API endpoints, and the suggestion fetch
//! timeout.
//!
//! # Environment Variables
//!
//! - `WELLME_DIR`: Path to the data directory (defaults to ~/.local/share/wellme)
//! - `WELLME_ADVICE_URL`: Endpoint for the advice category
//! - `WELLME_QUOTE_URL`: Endpoint for the quote category
//! - `WELLME_ACTIVITY_URL`: Endpoint for the activity category
//! - `WELLME_SUGGEST_TIMEOUT_SECS`: Suggestion fetch timeout in seconds (default 6)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the wellme application.
///
/// This struct holds the settings needed at runtime: where persisted state
/// lives, which endpoints the suggestion picker talks to, and how long one
/// suggestion fetch may take.
///
/// # Examples
///
/// Creating a configuration manually (useful in tests):
/// ```
/// use wellme::Config;
/// use std::path::PathBuf;
///
/// let mut config = Config::default();
/// config.data_dir = PathBuf::from("/tmp/wellme-test");
/// ```
///
/// Loading configuration from environment variables:
/// ```no_run
/// use wellme::Config;
///
/// let config = Config::load().expect("Failed to load configuration");
/// println!("Data directory: {}", config.data_dir.display());
/// ```
#[derive(Clone)]
pub struct Config {
    /// Directory where the persisted state slots are stored.
    ///
    /// Loaded from the WELLME_DIR environment variable with a fallback to
    /// ~/.local/share/wellme if not specified.
    pub data_dir: PathBuf,

    /// Endpoint for the advice category.
    pub advice_url: String,

    /// Endpoint for the quote category.
    pub quote_url: String,

    /// Endpoint for the activity category.
    pub activity_url: String,

    /// Timeout applied to one suggestion fetch.
    pub suggest_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .field("advice_url", &self.advice_url)
            .field("quote_url", &self.quote_url)
            .field("activity_url", &self.activity_url)
            .field("suggest_timeout", &self.suggest_timeout)
            .finish()
    }
}

impl Default for Config {
    /// Creates a new Config with default endpoints and timeout and an empty
    /// data directory path.
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(""),
            advice_url: constants::DEFAULT_ADVICE_URL.to_string(),
            quote_url: constants::DEFAULT_QUOTE_URL.to_string(),
            activity_url: constants::DEFAULT_ACTIVITY_URL.to_string(),
            suggest_timeout: Duration::from_secs(constants::DEFAULT_SUGGEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// This method reads configuration from environment variables, with
    /// fallbacks for missing values. It will expand the data directory path
    /// using `shellexpand` to handle `~` and environment variable references.
    ///
    /// # Returns
    ///
    /// A Result containing either the loaded Config or an AppError if path
    /// expansion fails.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails
    /// - The data directory path is empty after expansion
    /// - The timeout override is not a positive integer
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wellme::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Loaded config: {:?}", config),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        // Get data directory from WELLME_DIR env var, fallback to ~/.local/share/wellme
        let data_dir_str = env::var(constants::ENV_VAR_WELLME_DIR).unwrap_or_else(|_| {
            let home = env::var(constants::ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, constants::DEFAULT_DATA_SUBDIR)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let advice_url = env::var(constants::ENV_VAR_ADVICE_URL)
            .unwrap_or_else(|_| constants::DEFAULT_ADVICE_URL.to_string());
        let quote_url = env::var(constants::ENV_VAR_QUOTE_URL)
            .unwrap_or_else(|_| constants::DEFAULT_QUOTE_URL.to_string());
        let activity_url = env::var(constants::ENV_VAR_ACTIVITY_URL)
            .unwrap_or_else(|_| constants::DEFAULT_ACTIVITY_URL.to_string());

        let suggest_timeout = match env::var(constants::ENV_VAR_SUGGEST_TIMEOUT) {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AppError::Config(format!(
                        "{} must be a positive integer, got '{}'",
                        constants::ENV_VAR_SUGGEST_TIMEOUT,
                        raw
                    ))
                })?;
                if secs == 0 {
                    return Err(AppError::Config(format!(
                        "{} must be greater than zero",
                        constants::ENV_VAR_SUGGEST_TIMEOUT
                    )));
                }
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(constants::DEFAULT_SUGGEST_TIMEOUT_SECS),
        };

        Ok(Config {
            data_dir,
            advice_url,
            quote_url,
            activity_url,
            suggest_timeout,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// This method checks if the configuration meets the minimum requirements:
    /// - Data directory path is not empty
    /// - Data directory path is absolute
    /// - All three suggestion endpoints are non-empty
    ///
    /// # Returns
    ///
    /// A Result that is Ok(()) if the configuration is valid,
    /// or an AppError with a description of what is invalid.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` describing the first failed check.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        for (name, url) in [
            ("advice", &self.advice_url),
            ("quote", &self.quote_url),
            ("activity", &self.activity_url),
        ] {
            if url.is_empty() {
                return Err(AppError::Config(format!("{} endpoint URL is empty", name)));
            }
        }

        Ok(())
    }
}
