//! Listing, deleting, and clearing entries.

use crate::errors::AppResult;
use crate::store::EntryStore;
use chrono::NaiveDate;
use tracing::info;

/// Prints all entries, most recent first.
pub fn show_history(store: &EntryStore) -> AppResult<()> {
    let entries = store.list()?;

    if entries.is_empty() {
        println!("No entries yet.");
        return Ok(());
    }

    for entry in entries.iter().rev() {
        println!("{} • Mood {} {}", entry.date, entry.mood, entry.emoji());
        if let Some(good) = &entry.note_good {
            println!("  Went well: {}", good);
        }
        if let Some(tomorrow) = &entry.note_tomorrow {
            println!("  Intention: {}", tomorrow);
        }
    }
    Ok(())
}

/// Deletes the entry for `date`. Deleting an absent date is reported but not
/// an error.
pub fn delete_entry(store: &EntryStore, date: NaiveDate) -> AppResult<()> {
    if store.delete(date)? {
        info!("Deleted entry for {}", date);
        println!("Deleted entry for {}", date);
    } else {
        println!("No entry for {}", date);
    }
    Ok(())
}

/// Removes all entries. Refuses to act unless `confirmed` is set, since this
/// cannot be undone.
pub fn clear_entries(store: &EntryStore, confirmed: bool) -> AppResult<()> {
    if !confirmed {
        println!("This removes every entry and cannot be undone. Re-run with --yes to confirm.");
        return Ok(());
    }

    store.clear()?;
    info!("Cleared all entries");
    println!("All entries cleared.");
    Ok(())
}
