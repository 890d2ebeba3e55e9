//! Core journal functionality without I/O operations.
//!
//! This module contains the `MoodEntry` record, the pure in-memory entry
//! collection `EntryLog`, and the date and mood helpers shared across the
//! application. Persistence lives in the `store` module; everything here is
//! plain data manipulation.

use crate::constants;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One mood record for one calendar day.
///
/// The `date` is the unique key of the entry within the journal: saving a
/// second entry for the same date overwrites the first. The serialized field
/// names (`noteGood`, `noteTomorrow`) match the on-disk JSON format.
///
/// # Examples
///
/// ```
/// use wellme::journal::MoodEntry;
/// use chrono::NaiveDate;
///
/// let entry = MoodEntry {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     mood: 4,
///     note_good: Some("slept well".to_string()),
///     note_tomorrow: None,
/// };
/// assert_eq!(entry.date.to_string(), "2024-01-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Calendar date of the entry, the unique key within the journal.
    pub date: NaiveDate,

    /// Mood on a 1-5 scale. The collection does not validate the range;
    /// callers reject out-of-range values before constructing an entry.
    pub mood: u8,

    /// Optional note: what went well today.
    #[serde(rename = "noteGood", default, skip_serializing_if = "Option::is_none")]
    pub note_good: Option<String>,

    /// Optional note: intention for tomorrow.
    #[serde(
        rename = "noteTomorrow",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub note_tomorrow: Option<String>,
}

impl MoodEntry {
    /// Returns the emoji for this entry's mood, or an empty string when the
    /// mood is outside the 1-5 scale.
    pub fn emoji(&self) -> &'static str {
        mood_emoji(self.mood)
    }
}

/// Returns the emoji for a mood value, or an empty string for values outside
/// the 1-5 scale.
pub fn mood_emoji(mood: u8) -> &'static str {
    if (constants::MOOD_MIN..=constants::MOOD_MAX).contains(&mood) {
        constants::MOOD_EMOJI[(mood - 1) as usize]
    } else {
        ""
    }
}

/// Parses a date string in YYYY-MM-DD or YYYYMMDD format.
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string matches neither format.
///
/// # Examples
///
/// ```
/// use wellme::journal::parse_date_string;
///
/// assert!(parse_date_string("2024-01-15").is_ok());
/// assert!(parse_date_string("20240115").is_ok());
/// assert!(parse_date_string("yesterday").is_err());
/// ```
pub fn parse_date_string(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    // Try parsing in YYYY-MM-DD format first
    NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_COMPACT))
}

/// An in-memory entry collection kept sorted by date ascending.
///
/// This is the pure half of the entry store: it enforces the one-entry-per-date
/// invariant and the ascending order, and knows nothing about persistence.
///
/// # Examples
///
/// ```
/// use wellme::journal::{EntryLog, MoodEntry};
/// use chrono::NaiveDate;
///
/// let mut log = EntryLog::default();
/// log.upsert(MoodEntry {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     mood: 4,
///     note_good: None,
///     note_tomorrow: None,
/// });
/// assert_eq!(log.entries().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryLog {
    entries: Vec<MoodEntry>,
}

impl EntryLog {
    /// Builds a log from an arbitrary collection of entries, sorting by date.
    ///
    /// Later duplicates win, matching upsert semantics applied in order.
    pub fn from_entries(entries: Vec<MoodEntry>) -> Self {
        let mut log = EntryLog::default();
        for entry in entries {
            log.upsert(entry);
        }
        log
    }

    /// Inserts or replaces the entry for `entry.date`.
    ///
    /// If an entry with the same date already exists it is replaced in place;
    /// otherwise the entry is appended and the collection re-sorted. Either
    /// way the log afterwards contains exactly one entry for that date.
    pub fn upsert(&mut self, entry: MoodEntry) {
        match self.entries.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => *existing = entry,
            None => {
                self.entries.push(entry);
                self.entries.sort_by_key(|e| e.date);
            }
        }
    }

    /// Removes the entry for `date`. A no-op when no such entry exists.
    ///
    /// Returns true when an entry was removed.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.date != date);
        self.entries.len() != before
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, ordered by date ascending.
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// The entry for `date`, if one exists.
    pub fn get(&self, date: NaiveDate) -> Option<&MoodEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.last()
    }

    /// Number of days logged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries have been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the log, returning the sorted entries.
    pub fn into_entries(self) -> Vec<MoodEntry> {
        self.entries
    }

    /// The mood for each of the last `days` calendar days ending at
    /// `reference_date`, oldest first. Days without an entry yield `None`.
    ///
    /// This is the series behind the trend view.
    pub fn trend(&self, reference_date: NaiveDate, days: i64) -> Vec<(NaiveDate, Option<u8>)> {
        (0..days)
            .rev()
            .map(|offset| {
                let date = reference_date - Duration::days(offset);
                (date, self.get(date).map(|e| e.mood))
            })
            .collect()
    }
}
