//! US Eastern civil-date arithmetic without a timezone database.
//!
//! The public site and the admin dashboard must agree on what "today"
//! means, and both render from environments where a tzdata lookup is
//! not guaranteed. Instead of pulling in a timezone crate we apply the
//! US daylight-saving rule directly: daylight time runs from the second
//! Sunday in March (effective ~07:00 UTC) through the first Sunday in
//! November (effective ~06:00 UTC), and the offset is a fixed UTC-4
//! (daylight) or UTC-5 (standard).
//!
//! This is an approximation: it ignores historical rule changes and
//! leap seconds, so it is only valid for near-term dates. It is kept
//! behind this module so a tz-aware implementation can replace it
//! without touching callers.

use chrono::{DateTime, Datelike, Days, NaiveDate, Timelike, Utc, Weekday};

/// Today's calendar date in US Eastern time.
pub fn today_eastern() -> NaiveDate {
    eastern_date(Utc::now())
}

/// The US Eastern calendar date for an arbitrary UTC instant.
///
/// Deterministic given the instant, so server and client render the
/// same date for the same moment.
pub fn eastern_date(instant: DateTime<Utc>) -> NaiveDate {
    let offset_hours = if is_eastern_dst(instant) { 4 } else { 5 };
    (instant - chrono::Duration::hours(offset_hours)).date_naive()
}

/// Whether the US daylight-saving rule is in effect at a UTC instant.
///
/// Transition instants are approximated as 07:00 UTC (spring forward)
/// and 06:00 UTC (fall back), matching 2:00 AM local on the wall clock.
fn is_eastern_dst(instant: DateTime<Utc>) -> bool {
    let year = instant.year();
    let month = instant.month();
    let day = instant.day();
    let hour = instant.hour();

    match month {
        // April through October is always daylight time.
        4..=10 => true,
        3 => {
            let second_sunday = nth_sunday(year, 3, 2);
            day > second_sunday || (day == second_sunday && hour >= 7)
        }
        11 => {
            let first_sunday = nth_sunday(year, 11, 1);
            day < first_sunday || (day == first_sunday && hour < 6)
        }
        _ => false,
    }
}

/// Day-of-month of the nth Sunday of a month.
fn nth_sunday(year: i32, month: u32, n: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("valid first-of-month date");
    let days_to_sunday = (7 - first.weekday().num_days_from_sunday()) % 7;
    1 + days_to_sunday + (n - 1) * 7
}

/// Step a civil date forward (or back) by whole days.
///
/// Saturates at the calendar range limits rather than panicking; the
/// range is far beyond any schedulable date.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    if n >= 0 {
        date.checked_add_days(Days::new(n as u64)).unwrap_or(date)
    } else {
        date.checked_sub_days(Days::new(n.unsigned_abs()))
            .unwrap_or(date)
    }
}

/// Format a civil date as `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` string back into a civil date.
pub fn parse_iso(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Weekday as 0=Sunday..6=Saturday, the convention used by schedule
/// recurrence inputs.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// The `chrono` weekday for a 0=Sunday..6=Saturday index.
pub fn weekday_from_index(index: u32) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -----------------------------------------------------------------------
    // DST window boundaries
    // -----------------------------------------------------------------------

    #[test]
    fn midsummer_is_daylight_time() {
        // July 4, noon UTC -> 8:00 AM EDT, same date.
        assert_eq!(eastern_date(utc(2025, 7, 4, 12, 0)), date(2025, 7, 4));
    }

    #[test]
    fn midwinter_is_standard_time() {
        // Jan 15, 04:59 UTC is still Jan 14 at 11:59 PM EST.
        assert_eq!(eastern_date(utc(2025, 1, 15, 4, 59)), date(2025, 1, 14));
        assert_eq!(eastern_date(utc(2025, 1, 15, 5, 0)), date(2025, 1, 15));
    }

    #[test]
    fn spring_forward_second_sunday_in_march() {
        // 2025: March 9 is the second Sunday. 06:59 UTC is still EST,
        // 07:00 UTC is EDT.
        assert!(!is_eastern_dst(utc(2025, 3, 9, 6, 59)));
        assert!(is_eastern_dst(utc(2025, 3, 9, 7, 0)));
    }

    #[test]
    fn fall_back_first_sunday_in_november() {
        // 2025: November 2 is the first Sunday. 05:59 UTC is still EDT,
        // 06:00 UTC is EST.
        assert!(is_eastern_dst(utc(2025, 11, 2, 5, 59)));
        assert!(!is_eastern_dst(utc(2025, 11, 2, 6, 0)));
    }

    #[test]
    fn march_before_transition_is_standard() {
        assert!(!is_eastern_dst(utc(2025, 3, 1, 12, 0)));
    }

    #[test]
    fn late_november_is_standard() {
        assert!(!is_eastern_dst(utc(2025, 11, 20, 12, 0)));
    }

    #[test]
    fn nth_sunday_matches_known_calendar() {
        assert_eq!(nth_sunday(2025, 3, 2), 9); // 2025-03-09
        assert_eq!(nth_sunday(2025, 11, 1), 2); // 2025-11-02
        assert_eq!(nth_sunday(2026, 3, 2), 8); // 2026-03-08
        assert_eq!(nth_sunday(2026, 11, 1), 1); // 2026-11-01
    }

    // -----------------------------------------------------------------------
    // Date rollback across midnight
    // -----------------------------------------------------------------------

    #[test]
    fn utc_new_year_is_previous_year_eastern() {
        // 2025-01-01 03:00 UTC is 2024-12-31 10:00 PM EST.
        assert_eq!(eastern_date(utc(2025, 1, 1, 3, 0)), date(2024, 12, 31));
    }

    #[test]
    fn summer_midnight_utc_is_previous_evening_eastern() {
        assert_eq!(eastern_date(utc(2025, 8, 10, 2, 0)), date(2025, 8, 9));
        assert_eq!(eastern_date(utc(2025, 8, 10, 4, 0)), date(2025, 8, 10));
    }

    #[test]
    fn deterministic_across_call_sites() {
        let instant = utc(2025, 6, 1, 12, 30);
        assert_eq!(eastern_date(instant), eastern_date(instant));
    }

    // -----------------------------------------------------------------------
    // add_days
    // -----------------------------------------------------------------------

    #[test]
    fn add_days_crosses_month_boundary() {
        assert_eq!(add_days(date(2025, 1, 28), 7), date(2025, 2, 4));
    }

    #[test]
    fn add_days_crosses_year_boundary() {
        assert_eq!(add_days(date(2025, 12, 29), 7), date(2026, 1, 5));
    }

    #[test]
    fn add_days_leap_february() {
        assert_eq!(add_days(date(2024, 2, 26), 7), date(2024, 3, 4));
        assert_eq!(add_days(date(2025, 2, 26), 7), date(2025, 3, 5));
    }

    #[test]
    fn add_days_negative() {
        assert_eq!(add_days(date(2025, 3, 3), -7), date(2025, 2, 24));
    }

    #[test]
    fn weekly_step_is_associative() {
        // Stepping 7 days k times equals stepping 7k once.
        let start = date(2025, 1, 28);
        let mut stepped = start;
        for _ in 0..5 {
            stepped = add_days(stepped, 7);
        }
        assert_eq!(stepped, add_days(start, 35));
    }

    // -----------------------------------------------------------------------
    // ISO formatting round-trip
    // -----------------------------------------------------------------------

    #[test]
    fn format_iso_zero_pads() {
        assert_eq!(format_iso(date(2025, 3, 7)), "2025-03-07");
    }

    #[test]
    fn format_parse_round_trip() {
        let d = date(2025, 11, 2);
        assert_eq!(parse_iso(&format_iso(d)), Some(d));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_iso("not-a-date"), None);
        assert_eq!(parse_iso("2025-13-01"), None);
    }

    // -----------------------------------------------------------------------
    // Weekday index convention
    // -----------------------------------------------------------------------

    #[test]
    fn weekday_index_sunday_is_zero() {
        assert_eq!(weekday_index(date(2025, 11, 2)), 0); // Sunday
        assert_eq!(weekday_index(date(2025, 11, 3)), 1); // Monday
        assert_eq!(weekday_index(date(2025, 11, 8)), 6); // Saturday
    }

    #[test]
    fn weekday_from_index_rejects_out_of_range() {
        assert_eq!(weekday_from_index(7), None);
    }
}
