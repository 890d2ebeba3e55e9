use crate::constants;
use crate::ops::ThemeChoice;
use crate::suggest::Category;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A personal mood journal with well-being suggestions
#[derive(Parser, Debug)]
#[clap(name = constants::APP_NAME, about = constants::APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a mood entry (defaults to today; re-saving a date overwrites)
    Log {
        /// Mood on a 1-5 scale
        #[clap(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        mood: u8,

        /// What went well today
        #[clap(long)]
        good: Option<String>,

        /// Intention for tomorrow
        #[clap(long)]
        tomorrow: Option<String>,

        /// Entry date (format: YYYY-MM-DD or YYYYMMDD, defaults to today)
        #[clap(short, long)]
        date: Option<String>,
    },

    /// List all entries, most recent first
    History,

    /// Delete the entry for one date
    Delete {
        /// Date of the entry to delete (format: YYYY-MM-DD or YYYYMMDD)
        date: String,
    },

    /// Remove all entries
    Clear {
        /// Confirm the irreversible clear
        #[clap(long)]
        yes: bool,
    },

    /// Show a text chart of the last 14 days of moods
    Trend,

    /// Show the last entry, days logged, and the log-today reminder
    Summary,

    /// Fetch a short well-being suggestion
    Suggest {
        /// Suggestion category
        #[clap(value_enum)]
        category: Category,
    },

    /// Export all entries as formatted JSON or a plain-text digest
    Export {
        /// Write a plain-text digest instead of JSON
        #[clap(long)]
        digest: bool,

        /// Output file (use '-' or omit for stdout)
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or set the theme preference
    Theme {
        /// New theme; omit to print the current one
        #[clap(value_enum)]
        theme: Option<ThemeChoice>,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_requires_mood() {
        let result = CliArgs::try_parse_from(vec!["wellme", "log"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_rejects_out_of_range_mood() {
        let result = CliArgs::try_parse_from(vec!["wellme", "log", "--mood", "6"]);
        assert!(result.is_err());

        let result = CliArgs::try_parse_from(vec!["wellme", "log", "--mood", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_with_notes() {
        let args = CliArgs::try_parse_from(vec![
            "wellme",
            "log",
            "--mood",
            "4",
            "--good",
            "slept well",
            "--tomorrow",
            "go outside",
        ])
        .unwrap();

        match args.command {
            Command::Log {
                mood,
                good,
                tomorrow,
                date,
            } => {
                assert_eq!(mood, 4);
                assert_eq!(good.as_deref(), Some("slept well"));
                assert_eq!(tomorrow.as_deref(), Some("go outside"));
                assert!(date.is_none());
            }
            _ => panic!("Expected Log command"),
        }
    }

    #[test]
    fn test_suggest_categories() {
        for (name, expected) in [
            ("advice", Category::Advice),
            ("quote", Category::Quote),
            ("activity", Category::Activity),
        ] {
            let args = CliArgs::try_parse_from(vec!["wellme", "suggest", name]).unwrap();
            match args.command {
                Command::Suggest { category } => assert_eq!(category, expected),
                _ => panic!("Expected Suggest command"),
            }
        }
    }

    #[test]
    fn test_suggest_rejects_unknown_category() {
        let result = CliArgs::try_parse_from(vec!["wellme", "suggest", "horoscope"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_flags() {
        let args =
            CliArgs::try_parse_from(vec!["wellme", "export", "--digest", "-o", "out.txt"]).unwrap();
        match args.command {
            Command::Export { digest, output } => {
                assert!(digest);
                assert_eq!(output, Some(PathBuf::from("out.txt")));
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let args = CliArgs::try_parse_from(vec!["wellme", "history", "--verbose"]).unwrap();
        assert!(args.verbose);
    }

    #[test]
    fn test_theme_optional_value() {
        let args = CliArgs::try_parse_from(vec!["wellme", "theme"]).unwrap();
        match args.command {
            Command::Theme { theme } => assert!(theme.is_none()),
            _ => panic!("Expected Theme command"),
        }

        let args = CliArgs::try_parse_from(vec!["wellme", "theme", "dark"]).unwrap();
        match args.command {
            Command::Theme { theme } => assert_eq!(theme, Some(ThemeChoice::Dark)),
            _ => panic!("Expected Theme command"),
        }
    }
}
