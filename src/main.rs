/*!
# WellMe - A Personal Mood Journal

WellMe is a command-line tool for logging a daily mood with optional notes,
reviewing history and trends, and requesting short well-being suggestions
with a safe local fallback.

This file contains the main application flow, coordinating the various
components to implement the journal functionality.

## Usage

```
wellme <COMMAND>

Commands:
  log      Save a mood entry (defaults to today; re-saving a date overwrites)
  history  List all entries, most recent first
  delete   Delete the entry for one date
  clear    Remove all entries
  trend    Show a text chart of the last 14 days of moods
  summary  Show the last entry, days logged, and the log-today reminder
  suggest  Fetch a short well-being suggestion
  export   Export all entries as formatted JSON or a plain-text digest
  theme    Show or set the theme preference
```

## Configuration

The application can be configured with the following environment variables:
- `WELLME_DIR`: The data directory (defaults to "~/.local/share/wellme")
- `WELLME_ADVICE_URL`, `WELLME_QUOTE_URL`, `WELLME_ACTIVITY_URL`: Suggestion endpoints
- `WELLME_SUGGEST_TIMEOUT_SECS`: Suggestion fetch timeout (defaults to 6)
*/

use chrono::Local;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wellme::cli::{CliArgs, Command};
use wellme::config::Config;
use wellme::errors::{AppError, AppResult};
use wellme::journal::{parse_date_string, MoodEntry};
use wellme::ops;
use wellme::store::{self, EntryStore};

/// The main entry point for the wellme application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads and validates configuration
/// 4. Ensures the data directory exists
/// 5. Dispatches the requested operation
///
/// # Returns
///
/// A Result that is Ok(()) if the application ran successfully,
/// or an AppError if an error occurred at any point in the flow.
fn main() -> AppResult<()> {
    // Obtain the current date once at the beginning
    let today = Local::now().naive_local().date();

    // Parse command-line arguments
    let args = CliArgs::parse();

    // Initialize logging; --verbose lowers the default filter to debug
    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting wellme");
    debug!("CLI arguments: {:?}", args);

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    // Ensure the data directory exists
    store::ensure_data_directory_exists(&config.data_dir)?;
    let entry_store = EntryStore::new(config.data_dir.clone());

    match args.command {
        Command::Log {
            mood,
            good,
            tomorrow,
            date,
        } => {
            let date = match date {
                Some(raw) => parse_date_string(&raw)
                    .map_err(|e| AppError::Journal(format!("Invalid date format: {}", e)))?,
                None => today,
            };
            let entry = MoodEntry {
                date,
                mood,
                note_good: good,
                note_tomorrow: tomorrow,
            };
            ops::save_entry(&entry_store, entry, today)?;
        }
        Command::History => ops::show_history(&entry_store)?,
        Command::Delete { date } => {
            let date = parse_date_string(&date)
                .map_err(|e| AppError::Journal(format!("Invalid date format: {}", e)))?;
            ops::delete_entry(&entry_store, date)?;
        }
        Command::Clear { yes } => ops::clear_entries(&entry_store, yes)?,
        Command::Trend => ops::show_trend(&entry_store, today)?,
        Command::Summary => ops::show_summary(&entry_store, today)?,
        Command::Suggest { category } => ops::show_suggestion(&config, category)?,
        Command::Export { digest, output } => {
            ops::export_entries(&entry_store, digest, output.as_deref())?
        }
        Command::Theme { theme } => ops::show_or_set_theme(&entry_store, theme)?,
    }

    Ok(())
}
