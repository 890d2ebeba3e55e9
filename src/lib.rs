/*!
# WellMe

WellMe is a personal mood journal for the command line. Users log one mood
entry per calendar day with optional notes, browse their history, see a
14-day trend, export their data, and request a short well-being suggestion
fetched from a public text API with a curated local fallback pool.

## Core Features

- Log today's mood (1-5) with optional "went well" and "intention" notes
- One entry per day: re-saving a date overwrites rather than duplicates
- History list, 14-day text trend, and summary badges
- Well-being suggestions (advice, quote, activity) with a content-safety
  filter and a local fallback pool that avoids immediate repeats
- Export as formatted JSON or a plain-text digest

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `journal`: Pure entry collection logic (no I/O)
- `store`: Persisted state slots in the data directory
- `suggest`: Suggestion fetch, safety filter, and fallback picker
- `ops`: High-level operations behind the CLI subcommands

## Usage Example

```rust,no_run
use wellme::{Config, store};
use wellme::store::EntryStore;

fn main() -> wellme::AppResult<()> {
    // Load configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure the data directory exists
    store::ensure_data_directory_exists(&config.data_dir)?;

    // List all entries
    let entries = EntryStore::new(config.data_dir.clone()).list()?;
    println!("{} days logged", entries.len());
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Pure entry collection logic
pub mod journal;
/// High-level operations behind the CLI subcommands
pub mod ops;
/// Persisted state management
pub mod store;
/// Suggestion fetch with safe fallback
pub mod suggest;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal::MoodEntry;
pub use store::EntryStore;
pub use suggest::{Category, SuggestionPicker};
