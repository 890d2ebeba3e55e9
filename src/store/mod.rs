//! Persisted state management.
//!
//! This module owns the three whole-value state slots in the data directory:
//! the entry collection (`entries.json`), the theme preference (`theme`), and
//! the last-reminder-shown date (`last_reminder`). Each slot is read and
//! written as a whole value; there are no partial updates and no schema
//! versioning.
//!
//! Reads degrade: a missing or corrupt slot yields its default value (an
//! empty collection, the light theme, no reminder date). Writes surface
//! errors, so a save that did not stick is visible to the user.

use crate::constants;
use crate::errors::{AppError, AppResult, StorageError};
use crate::journal::{EntryLog, MoodEntry};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Ensures the data directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns:
/// - `AppError::Journal` if the provided path is not an absolute path
/// - `AppError::Io` if directory creation fails
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.is_absolute() {
        return Err(AppError::Journal(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;
        debug!("Created data directory {}", data_dir.display());
    }
    Ok(())
}

/// The persistent entry store plus the two auxiliary state slots.
///
/// The store re-reads the entry collection from disk for every operation and
/// writes it back whole after every mutation; there is no in-memory cache to
/// keep consistent.
///
/// # Examples
///
/// ```no_run
/// use wellme::store::EntryStore;
/// use wellme::journal::MoodEntry;
/// use chrono::NaiveDate;
/// use std::path::PathBuf;
///
/// let store = EntryStore::new(PathBuf::from("/tmp/wellme"));
/// store.upsert(MoodEntry {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     mood: 4,
///     note_good: Some("slept well".to_string()),
///     note_tomorrow: None,
/// })?;
/// assert_eq!(store.list()?.len(), 1);
/// # Ok::<(), wellme::AppError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EntryStore {
    data_dir: PathBuf,
}

impl EntryStore {
    /// Creates a store rooted at `data_dir`.
    ///
    /// The directory is expected to exist; call [`ensure_data_directory_exists`]
    /// during startup.
    pub fn new(data_dir: PathBuf) -> Self {
        EntryStore { data_dir }
    }

    fn slot_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    fn write_slot(&self, name: &str, contents: &str) -> AppResult<()> {
        let path = self.slot_path(name);
        fs::write(&path, contents)
            .map_err(|source| StorageError::Write { path, source })?;
        Ok(())
    }

    /// Reads the whole entry collection from disk.
    ///
    /// A missing or corrupt entries file reads as an empty collection. The
    /// corrupt case is logged but never surfaced as an error.
    fn load(&self) -> EntryLog {
        let path = self.slot_path(constants::ENTRIES_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return EntryLog::default(),
        };

        match serde_json::from_str::<Vec<MoodEntry>>(&raw) {
            Ok(entries) => EntryLog::from_entries(entries),
            Err(e) => {
                warn!("Corrupt entries file {}: {}", path.display(), e);
                EntryLog::default()
            }
        }
    }

    /// Writes the whole entry collection back to disk.
    fn save(&self, log: &EntryLog) -> AppResult<()> {
        let json = serde_json::to_string_pretty(log.entries()).map_err(StorageError::Serialize)?;
        self.write_slot(constants::ENTRIES_FILE, &json)
    }

    /// Inserts or replaces the entry for `entry.date`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the collection cannot be written back.
    pub fn upsert(&self, entry: MoodEntry) -> AppResult<()> {
        let mut log = self.load();
        log.upsert(entry);
        self.save(&log)
    }

    /// Removes the entry for `date`. A no-op when no such entry exists.
    ///
    /// Returns true when an entry was removed.
    pub fn delete(&self, date: NaiveDate) -> AppResult<bool> {
        let mut log = self.load();
        let removed = log.remove(date);
        if removed {
            self.save(&log)?;
        }
        Ok(removed)
    }

    /// Removes all entries by deleting the entries slot.
    pub fn clear(&self) -> AppResult<()> {
        let path = self.slot_path(constants::ENTRIES_FILE);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Write { path, source }.into()),
        }
    }

    /// All entries, ordered by date ascending.
    pub fn list(&self) -> AppResult<Vec<MoodEntry>> {
        Ok(self.load().into_entries())
    }

    /// The in-memory log view of the whole collection.
    pub fn log(&self) -> EntryLog {
        self.load()
    }

    /// The persisted theme preference, defaulting to light.
    pub fn theme(&self) -> String {
        match fs::read_to_string(self.slot_path(constants::THEME_FILE)) {
            Ok(raw) if raw.trim() == constants::THEME_DARK => constants::THEME_DARK.to_string(),
            _ => constants::THEME_LIGHT.to_string(),
        }
    }

    /// Persists the theme preference.
    pub fn set_theme(&self, theme: &str) -> AppResult<()> {
        self.write_slot(constants::THEME_FILE, theme)
    }

    /// The last day the log-today reminder was shown, if any.
    pub fn last_reminder(&self) -> Option<NaiveDate> {
        let raw = fs::read_to_string(self.slot_path(constants::REMINDER_FILE)).ok()?;
        crate::journal::parse_date_string(raw.trim()).ok()
    }

    /// Stamps the reminder slot with `date`.
    pub fn set_last_reminder(&self, date: NaiveDate) -> AppResult<()> {
        self.write_slot(constants::REMINDER_FILE, &date.to_string())
    }

    /// True when the log-today reminder should be shown: no entry exists for
    /// `today` and the reminder was not already shown today.
    pub fn reminder_due(&self, today: NaiveDate) -> bool {
        let has_today = self.load().get(today).is_some();
        let shown_today = self.last_reminder() == Some(today);
        !has_today && !shown_today
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::parse_date_string;
    use tempfile::tempdir;

    fn entry(date: &str, mood: u8) -> MoodEntry {
        MoodEntry {
            date: parse_date_string(date).unwrap(),
            mood,
            note_good: None,
            note_tomorrow: None,
        }
    }

    #[test]
    fn test_list_on_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().to_path_buf());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_on_corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(constants::ENTRIES_FILE), "{not json]").unwrap();

        let store = EntryStore::new(dir.path().to_path_buf());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_upsert_persists_across_store_instances() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().to_path_buf());
        store.upsert(entry("2024-01-01", 4)).unwrap();

        let reread = EntryStore::new(dir.path().to_path_buf());
        let entries = reread.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood, 4);
    }

    #[test]
    fn test_upsert_overwrites_same_date_on_disk() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().to_path_buf());

        store
            .upsert(MoodEntry {
                note_good: Some("slept well".to_string()),
                ..entry("2024-01-01", 4)
            })
            .unwrap();
        store.upsert(entry("2024-01-01", 2)).unwrap();

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood, 2);
        assert_eq!(entries[0].note_good, None);
    }

    #[test]
    fn test_delete_and_noop_delete() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().to_path_buf());
        store.upsert(entry("2024-01-01", 4)).unwrap();

        assert!(store.delete(parse_date_string("2024-01-01").unwrap()).unwrap());
        assert!(!store.delete(parse_date_string("2024-01-01").unwrap()).unwrap());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_clear_removes_everything() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().to_path_buf());
        store.upsert(entry("2024-01-01", 4)).unwrap();
        store.upsert(entry("2024-01-02", 3)).unwrap();

        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());

        // Clearing an already-empty store is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().to_path_buf());
        assert_eq!(store.theme(), constants::THEME_LIGHT);

        store.set_theme(constants::THEME_DARK).unwrap();
        assert_eq!(store.theme(), constants::THEME_DARK);
    }

    #[test]
    fn test_theme_ignores_garbage_value() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(constants::THEME_FILE), "plaid").unwrap();

        let store = EntryStore::new(dir.path().to_path_buf());
        assert_eq!(store.theme(), constants::THEME_LIGHT);
    }

    #[test]
    fn test_reminder_due_logic() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().to_path_buf());
        let today = parse_date_string("2024-01-15").unwrap();

        // No entry today, never shown: due
        assert!(store.reminder_due(today));

        // Shown today: not due
        store.set_last_reminder(today).unwrap();
        assert!(!store.reminder_due(today));

        // Next day without an entry: due again
        let tomorrow = parse_date_string("2024-01-16").unwrap();
        assert!(store.reminder_due(tomorrow));

        // Entry logged for the day: not due even if never shown
        store.upsert(entry("2024-01-16", 3)).unwrap();
        assert!(!store.reminder_due(tomorrow));
    }

    #[test]
    fn test_corrupt_reminder_slot_reads_as_none() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(constants::REMINDER_FILE), "whenever").unwrap();

        let store = EntryStore::new(dir.path().to_path_buf());
        assert!(store.last_reminder().is_none());
    }
}
