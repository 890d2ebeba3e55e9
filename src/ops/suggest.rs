//! Requesting a well-being suggestion.

use crate::config::Config;
use crate::errors::AppResult;
use crate::suggest::{Category, SuggestionPicker};

/// Fetches and prints one suggestion for `category`.
///
/// This never fails with a suggestion-related error: the picker degrades to
/// its local fallback pool on any fetch problem.
pub fn show_suggestion(config: &Config, category: Category) -> AppResult<()> {
    let mut picker = SuggestionPicker::new(config);
    println!("{}", picker.get(category));
    Ok(())
}
