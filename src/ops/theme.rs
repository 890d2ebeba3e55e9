//! Showing and setting the persisted theme preference.

use crate::constants;
use crate::errors::AppResult;
use crate::store::EntryStore;

/// Theme values accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl ThemeChoice {
    fn as_str(self) -> &'static str {
        match self {
            ThemeChoice::Light => constants::THEME_LIGHT,
            ThemeChoice::Dark => constants::THEME_DARK,
        }
    }
}

/// Prints the current theme, or persists `choice` when one is given.
pub fn show_or_set_theme(store: &EntryStore, choice: Option<ThemeChoice>) -> AppResult<()> {
    match choice {
        Some(choice) => {
            store.set_theme(choice.as_str())?;
            println!("Theme set to {}", choice.as_str());
        }
        None => println!("{}", store.theme()),
    }
    Ok(())
}
