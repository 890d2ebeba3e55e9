//! Exporting the entry collection.

use crate::errors::{AppResult, StorageError};
use crate::journal::MoodEntry;
use crate::store::EntryStore;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serializes all entries and writes them to `output`, or to stdout when
/// `output` is `None` or `-`.
///
/// The default format is formatted JSON; `digest` selects a plain-text
/// human-readable dump instead.
///
/// # Errors
///
/// Returns `AppError::Storage` if serialization or the file write fails.
pub fn export_entries(store: &EntryStore, digest: bool, output: Option<&Path>) -> AppResult<()> {
    let entries = store.list()?;

    let rendered = if digest {
        render_digest(&entries)
    } else {
        serde_json::to_string_pretty(&entries).map_err(StorageError::Serialize)?
    };

    match output {
        Some(path) if path.as_os_str() != "-" => {
            fs::write(path, &rendered).map_err(|source| StorageError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Exported {} entries to {}", entries.len(), path.display());
            println!("Exported {} entries to {}", entries.len(), path.display());
        }
        _ => println!("{}", rendered),
    }

    Ok(())
}

/// Renders the one-entry-per-block plain-text digest.
fn render_digest(entries: &[MoodEntry]) -> String {
    let mut out = String::from("WellMe journal digest\n");

    if entries.is_empty() {
        out.push_str("\nNo entries yet.\n");
        return out;
    }

    for entry in entries {
        out.push('\n');
        out.push_str(&format!(
            "{} • Mood {} {}\n",
            entry.date,
            entry.mood,
            entry.emoji()
        ));
        if let Some(good) = &entry.note_good {
            out.push_str(&format!("  Went well: {}\n", good));
        }
        if let Some(tomorrow) = &entry.note_tomorrow {
            out.push_str(&format!("  Intention: {}\n", tomorrow));
        }
    }
    out
}
