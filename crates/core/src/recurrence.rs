//! Expansion of schedule date selections into concrete calendar dates.
//!
//! The admin form offers three ways to pick dates for a new schedule
//! entry; each expands to a finite, ascending list of civil dates and
//! one row is persisted per date.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::eastern::{add_days, weekday_from_index, weekday_index};
use crate::error::CoreError;

/// How the caller selected the dates for a schedule entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DateSelection {
    /// One explicit date.
    Single { date: NaiveDate },
    /// An explicit set of dates, in any order, possibly with duplicates.
    Multiple { dates: Vec<NaiveDate> },
    /// Every week on `weekday` (0=Sunday..6=Saturday), starting from the
    /// first occurrence on or after today, through `end_date` inclusive.
    Weekly { weekday: u32, end_date: NaiveDate },
}

/// Expand a date selection into an ordered list of concrete dates.
///
/// `today` is passed in (rather than read from the clock) so expansion
/// is deterministic and testable; callers use
/// [`crate::eastern::today_eastern`].
///
/// Weekly expansion returns an empty list when `end_date` precedes the
/// first occurrence of the weekday; an empty result is rejected later
/// by schedule validation, not here.
pub fn expand(selection: &DateSelection, today: NaiveDate) -> Result<Vec<NaiveDate>, CoreError> {
    match selection {
        DateSelection::Single { date } => Ok(vec![*date]),
        DateSelection::Multiple { dates } => {
            let mut out = dates.clone();
            out.sort();
            out.dedup();
            Ok(out)
        }
        DateSelection::Weekly { weekday, end_date } => {
            let target = weekday_from_index(*weekday).ok_or_else(|| {
                CoreError::Validation(format!(
                    "weekday must be 0 (Sunday) through 6 (Saturday), got {weekday}"
                ))
            })?;

            let mut current = today;
            while weekday_index(current) != target.num_days_from_sunday() {
                current = add_days(current, 1);
            }

            let mut out = Vec::new();
            while current <= *end_date {
                out.push(current);
                current = add_days(current, 7);
            }
            Ok(out)
        }
    }
}

/// Toggle a date in a multiple-date selection set.
///
/// Adds the date if absent, removes it if present, and keeps the set
/// sorted, matching the checkbox toggle semantics of the admin form.
pub fn toggle_date(dates: &mut Vec<NaiveDate>, date: NaiveDate) {
    if let Some(pos) = dates.iter().position(|d| *d == date) {
        dates.remove(pos);
    } else {
        dates.push(date);
        dates.sort();
    }
}
