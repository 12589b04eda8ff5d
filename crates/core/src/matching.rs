//! Fuzzy matching of external calendar names against the local catalog,
//! and per-row readiness classification for the import preview.

use serde::Serialize;

/// Normalize a name for comparison: trim whitespace, lowercase.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Find the catalog entry matching an external name.
///
/// Two passes over the catalog, in priority order:
/// 1. Exact match on normalized names.
/// 2. Substring containment in either direction.
///
/// Within each pass the first hit in catalog iteration order wins;
/// there is no further tie-break when several entries overlap.
pub fn find_match<'a, T, F>(external_name: &str, catalog: &'a [T], name_of: F) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    let needle = normalize_name(external_name);
    if needle.is_empty() {
        return None;
    }

    if let Some(exact) = catalog
        .iter()
        .find(|entry| normalize_name(name_of(entry)) == needle)
    {
        return Some(exact);
    }

    catalog.iter().find(|entry| {
        let candidate = normalize_name(name_of(entry));
        candidate.contains(&needle) || needle.contains(&candidate)
    })
}

/// Match outcome for one side (truck or venue) of an external row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideMatch {
    /// The row carries no name on this side at all.
    Unnamed,
    /// The name resolved to a catalog entry.
    Matched,
    /// The name resolved to nothing; the row can still import with the
    /// freeform name, but is flagged for review.
    Unmatched,
}

/// Readiness of one external row for import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    MissingTruck,
    MissingVenue,
    MissingDate,
    MissingTime,
    Ready,
}

/// Classify an external row. The first matching condition wins.
pub fn classify_row(
    truck: SideMatch,
    venue: SideMatch,
    has_date: bool,
    start_time_ok: bool,
    end_time_ok: bool,
) -> RowStatus {
    if truck == SideMatch::Unmatched {
        return RowStatus::MissingTruck;
    }
    if venue == SideMatch::Unmatched {
        return RowStatus::MissingVenue;
    }
    if !has_date {
        return RowStatus::MissingDate;
    }
    if !start_time_ok || !end_time_ok {
        return RowStatus::MissingTime;
    }
    RowStatus::Ready
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        name: &'static str,
    }

    fn catalog(names: &'static [&'static str]) -> Vec<Entry> {
        names.iter().map(|n| Entry { name: n }).collect()
    }

    // -----------------------------------------------------------------------
    // Name matching
    // -----------------------------------------------------------------------

    #[test]
    fn exact_match_is_case_insensitive_and_trimmed() {
        let trucks = catalog(&["Joe's BBQ"]);
        let hit = find_match("  joe's bbq ", &trucks, |t: &Entry| t.name);
        assert_eq!(hit.map(|t| t.name), Some("Joe's BBQ"));
    }

    #[test]
    fn substring_match_external_inside_catalog() {
        let trucks = catalog(&["Joe's BBQ"]);
        let hit = find_match("BBQ", &trucks, |t: &Entry| t.name);
        assert_eq!(hit.map(|t| t.name), Some("Joe's BBQ"));
    }

    #[test]
    fn substring_match_catalog_inside_external() {
        let trucks = catalog(&["BBQ"]);
        let hit = find_match("Joe's BBQ Wagon", &trucks, |t: &Entry| t.name);
        assert_eq!(hit.map(|t| t.name), Some("BBQ"));
    }

    #[test]
    fn no_match_for_unrelated_name() {
        let trucks = catalog(&["Joe's BBQ"]);
        assert!(find_match("Taco Spot", &trucks, |t: &Entry| t.name).is_none());
    }

    #[test]
    fn exact_beats_substring() {
        // "Taco" is a substring of the first entry, but an exact match
        // exists further down the catalog and takes priority.
        let trucks = catalog(&["Taco King", "Taco"]);
        let hit = find_match("taco", &trucks, |t: &Entry| t.name);
        assert_eq!(hit.map(|t| t.name), Some("Taco"));
    }

    #[test]
    fn first_substring_hit_wins_in_catalog_order() {
        let trucks = catalog(&["Taco King", "Tacos El Rey"]);
        let hit = find_match("Taco", &trucks, |t: &Entry| t.name);
        assert_eq!(hit.map(|t| t.name), Some("Taco King"));
    }

    #[test]
    fn empty_external_name_never_matches() {
        let trucks = catalog(&["Joe's BBQ"]);
        assert!(find_match("   ", &trucks, |t: &Entry| t.name).is_none());
    }

    // -----------------------------------------------------------------------
    // Row classification priority
    // -----------------------------------------------------------------------

    #[test]
    fn unmatched_truck_outranks_everything() {
        let status = classify_row(
            SideMatch::Unmatched,
            SideMatch::Unmatched,
            false,
            false,
            false,
        );
        assert_eq!(status, RowStatus::MissingTruck);
    }

    #[test]
    fn unmatched_venue_outranks_date_and_time() {
        let status = classify_row(SideMatch::Matched, SideMatch::Unmatched, false, false, false);
        assert_eq!(status, RowStatus::MissingVenue);
    }

    #[test]
    fn missing_date_outranks_time() {
        let status = classify_row(SideMatch::Matched, SideMatch::Matched, false, false, false);
        assert_eq!(status, RowStatus::MissingDate);
    }

    #[test]
    fn bad_time_flags_missing_time() {
        let status = classify_row(SideMatch::Matched, SideMatch::Matched, true, true, false);
        assert_eq!(status, RowStatus::MissingTime);
    }

    #[test]
    fn fully_resolved_row_is_ready() {
        let status = classify_row(SideMatch::Matched, SideMatch::Matched, true, true, true);
        assert_eq!(status, RowStatus::Ready);
    }

    #[test]
    fn unnamed_sides_can_still_be_ready() {
        let status = classify_row(SideMatch::Unnamed, SideMatch::Unnamed, true, true, true);
        assert_eq!(status, RowStatus::Ready);
    }
}
