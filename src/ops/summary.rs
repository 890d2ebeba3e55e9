//! The home summary: last entry, days logged, and the log-today reminder.

use crate::errors::AppResult;
use crate::store::EntryStore;
use chrono::NaiveDate;
use tracing::debug;

/// Prints the summary badges and, when due, the log-today reminder.
///
/// Showing the reminder stamps the reminder slot so it appears at most once
/// per day.
pub fn show_summary(store: &EntryStore, today: NaiveDate) -> AppResult<()> {
    let log = store.log();

    match log.latest() {
        Some(last) => {
            println!("Last entry: {} • Mood {} {}", last.date, last.mood, last.emoji());
            println!("Days logged: {}", log.len());
        }
        None => {
            println!("No entries yet");
            println!("Days logged: 0");
        }
    }

    if store.reminder_due(today) {
        println!();
        println!("You haven't logged today's mood yet. Try: wellme log --mood <1-5>");
        store.set_last_reminder(today)?;
        debug!("Reminder shown for {}", today);
    }

    Ok(())
}
