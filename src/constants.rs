//! Constants used throughout the application.
//!
//! This module contains all constants used in the WellMe application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "wellme";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A personal mood journal with well-being suggestions";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the WellMe data directory.
pub const ENV_VAR_WELLME_DIR: &str = "WELLME_DIR";
/// Environment variable overriding the advice endpoint.
pub const ENV_VAR_ADVICE_URL: &str = "WELLME_ADVICE_URL";
/// Environment variable overriding the quote endpoint.
pub const ENV_VAR_QUOTE_URL: &str = "WELLME_QUOTE_URL";
/// Environment variable overriding the activity endpoint.
pub const ENV_VAR_ACTIVITY_URL: &str = "WELLME_ACTIVITY_URL";
/// Environment variable overriding the suggestion fetch timeout, in seconds.
pub const ENV_VAR_SUGGEST_TIMEOUT: &str = "WELLME_SUGGEST_TIMEOUT_SECS";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for WellMe data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/wellme";

// Persisted State Slots
/// File name of the entry collection slot (JSON array of entries).
pub const ENTRIES_FILE: &str = "entries.json";
/// File name of the theme preference slot (plain string).
pub const THEME_FILE: &str = "theme";
/// File name of the last-reminder-shown slot (ISO date string).
pub const REMINDER_FILE: &str = "last_reminder";
/// Theme identifier for the light theme (the default).
pub const THEME_LIGHT: &str = "light";
/// Theme identifier for the dark theme.
pub const THEME_DARK: &str = "dark";

// Mood Scale
/// Smallest valid mood value.
pub const MOOD_MIN: u8 = 1;
/// Largest valid mood value.
pub const MOOD_MAX: u8 = 5;
/// Emoji scale shown next to mood values, indexed by `mood - 1`.
pub const MOOD_EMOJI: [&str; 5] = ["😞", "🙁", "😐", "🙂", "😄"];

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Number of calendar days covered by the trend view.
pub const TREND_DAYS: i64 = 14;

// Suggestion Picker
/// Default endpoint for the advice category.
pub const DEFAULT_ADVICE_URL: &str = "https://api.adviceslip.com/advice";
/// Default endpoint for the quote category.
pub const DEFAULT_QUOTE_URL: &str = "https://api.quotable.io/random";
/// Default endpoint for the activity category.
pub const DEFAULT_ACTIVITY_URL: &str = "https://www.boredapi.com/api/activity";
/// Default timeout for one suggestion fetch, in seconds.
pub const DEFAULT_SUGGEST_TIMEOUT_SECS: u64 = 6;
/// Upper bound on random re-picks when avoiding an immediate fallback repeat.
pub const MAX_PICK_ATTEMPTS: u32 = 10;
