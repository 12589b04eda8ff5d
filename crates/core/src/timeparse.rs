//! Normalization of loosely formatted time strings from the external
//! calendar source.
//!
//! Airtable rows carry times as free text ("4:00 PM", "4 PM", "16:00").
//! Everything is normalized to a canonical `HH:MM:SS` 24-hour string
//! before persistence; strings that fit neither pattern normalize to
//! `None` and the row is flagged missing-time downstream.

use std::sync::LazyLock;

use regex::Regex;

static AM_PM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?::(\d{2}))?\s*(AM|PM)$").expect("valid regex")
});

static TWENTY_FOUR_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid regex"));

/// Normalize a raw time string to `HH:MM:SS`, or `None` if it cannot
/// be interpreted.
///
/// Accepted inputs, after trimming and uppercasing:
/// - `H[:MM] AM|PM` -- 12-hour. 12 PM stays 12, 12 AM becomes 0, other
///   PM hours get +12.
/// - `H:MM` -- 24-hour, hour zero-padded.
pub fn normalize_time(raw: &str) -> Option<String> {
    let trimmed = raw.trim().to_uppercase();

    if let Some(caps) = AM_PM.captures(&trimmed) {
        let mut hours: u32 = caps[1].parse().ok()?;
        let minutes = caps.get(2).map_or("00", |m| m.as_str());
        if hours > 12 || minutes.parse::<u32>().ok()? > 59 {
            return None;
        }
        let period = &caps[3];
        if period == "PM" && hours != 12 {
            hours += 12;
        }
        if period == "AM" && hours == 12 {
            hours = 0;
        }
        return Some(format!("{hours:02}:{minutes}:00"));
    }

    if let Some(caps) = TWENTY_FOUR_HOUR.captures(&trimmed) {
        let hours: u32 = caps[1].parse().ok()?;
        let minutes: u32 = caps[2].parse().ok()?;
        if hours > 23 || minutes > 59 {
            return None;
        }
        return Some(format!("{hours:02}:{minutes:02}:00"));
    }

    None
}
