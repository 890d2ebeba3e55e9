//! Saving a daily entry.

use crate::errors::AppResult;
use crate::journal::MoodEntry;
use crate::store::EntryStore;
use chrono::NaiveDate;
use tracing::info;

/// Saves `entry`, replacing any existing entry for the same date.
///
/// Saving an entry for `today` also stamps the reminder slot so the
/// log-today reminder stays quiet for the rest of the day. Empty notes are
/// normalized to absent.
///
/// # Errors
///
/// Returns `AppError::Storage` if the collection cannot be written back.
pub fn save_entry(store: &EntryStore, mut entry: MoodEntry, today: NaiveDate) -> AppResult<()> {
    entry.note_good = normalize_note(entry.note_good);
    entry.note_tomorrow = normalize_note(entry.note_tomorrow);

    let date = entry.date;
    let emoji = entry.emoji();
    let mood = entry.mood;

    store.upsert(entry)?;
    if date == today {
        store.set_last_reminder(today)?;
    }

    info!("Saved entry for {}", date);
    println!("Saved {} • Mood {} {}", date, mood, emoji);
    Ok(())
}

/// Trims a note and drops it entirely when nothing remains.
fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::parse_date_string;
    use tempfile::tempdir;

    #[test]
    fn test_save_entry_stamps_reminder_for_today() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().to_path_buf());
        let today = parse_date_string("2024-01-15").unwrap();

        let entry = MoodEntry {
            date: today,
            mood: 4,
            note_good: Some("  slept well  ".to_string()),
            note_tomorrow: Some("   ".to_string()),
        };
        save_entry(&store, entry, today).unwrap();

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].note_good.as_deref(), Some("slept well"));
        assert_eq!(entries[0].note_tomorrow, None);
        assert_eq!(store.last_reminder(), Some(today));
    }

    #[test]
    fn test_backdated_save_leaves_reminder_alone() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().to_path_buf());
        let today = parse_date_string("2024-01-15").unwrap();
        let past = parse_date_string("2024-01-10").unwrap();

        let entry = MoodEntry {
            date: past,
            mood: 3,
            note_good: None,
            note_tomorrow: None,
        };
        save_entry(&store, entry, today).unwrap();

        assert!(store.last_reminder().is_none());
    }
}
