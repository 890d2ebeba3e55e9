//! The 14-day mood trend view.

use crate::constants;
use crate::errors::AppResult;
use crate::journal::mood_emoji;
use crate::store::EntryStore;
use chrono::NaiveDate;

/// Prints a text chart of the last 14 days of moods ending at `today`.
///
/// Each day gets one line with a bar proportional to the mood; days without
/// an entry show a gap marker.
pub fn show_trend(store: &EntryStore, today: NaiveDate) -> AppResult<()> {
    let log = store.log();
    let series = log.trend(today, constants::TREND_DAYS);

    println!("Mood, last {} days:", constants::TREND_DAYS);
    for (date, mood) in &series {
        match mood {
            Some(mood) => println!("{}  {}  {}", date, render_bar(*mood), mood_emoji(*mood)),
            None => println!("{}  {}", date, render_gap()),
        }
    }
    Ok(())
}

fn render_bar(mood: u8) -> String {
    let filled = mood.min(constants::MOOD_MAX) as usize;
    let empty = (constants::MOOD_MAX as usize).saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

fn render_gap() -> String {
    "·".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bar_scales_with_mood() {
        assert_eq!(render_bar(1), "█░░░░");
        assert_eq!(render_bar(3), "███░░");
        assert_eq!(render_bar(5), "█████");
    }

    #[test]
    fn test_render_bar_caps_out_of_range_mood() {
        // The store does not validate moods; the view must not panic on one
        // written by hand.
        assert_eq!(render_bar(9), "█████");
    }
}
