//! High-level operations behind the CLI subcommands.
//!
//! Each operation orchestrates the entry store, the suggestion picker, and
//! terminal output for one user action. The CLI layer parses arguments and
//! dispatches here; the modules below own the behavior.

pub mod export;
pub mod history;
pub mod log;
pub mod suggest;
pub mod summary;
pub mod theme;
pub mod trend;

// Re-export commonly used functions
pub use export::export_entries;
pub use history::{clear_entries, delete_entry, show_history};
pub use log::save_entry;
pub use suggest::show_suggestion;
pub use summary::show_summary;
pub use theme::{show_or_set_theme, ThemeChoice};
pub use trend::show_trend;
