//! Validation of schedule-entry intents before persistence.
//!
//! One intent (truck + venue + time window + date selection) becomes
//! one persisted row per expanded date. Validation happens entirely up
//! front: nothing is written when the intent is invalid.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::error::CoreError;
use crate::recurrence::{expand, DateSelection};
use crate::types::DbId;

/// One side of a schedule entry: a catalog reference or an ad-hoc name.
///
/// A tagged union rather than a pair of nullable fields, so the
/// "both set" and "both null" states are unrepresentable in handler
/// code; the two nullable columns exist only at the storage boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartySelection {
    /// Reference to a catalog truck or venue.
    Catalog { id: DbId },
    /// Freeform name for a one-off truck or venue not in the catalog.
    Other { name: String },
}

/// A validated side: exactly one of the two fields is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParty {
    pub id: Option<DbId>,
    pub other_name: Option<String>,
}

impl PartySelection {
    /// Resolve into the storage shape, rejecting blank freeform names.
    pub fn resolve(&self, side: &str) -> Result<ResolvedParty, CoreError> {
        match self {
            PartySelection::Catalog { id } => Ok(ResolvedParty {
                id: Some(*id),
                other_name: None,
            }),
            PartySelection::Other { name } => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(CoreError::Validation(format!(
                        "a name is required when \"other\" is selected for the {side}"
                    )));
                }
                Ok(ResolvedParty {
                    id: None,
                    other_name: Some(trimmed.to_string()),
                })
            }
        }
    }
}

/// A request to create schedule entries, as received from the admin form.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleIntent {
    pub truck: PartySelection,
    pub venue: PartySelection,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub event_name: Option<String>,
    #[serde(flatten)]
    pub dates: DateSelection,
}

/// A fully validated intent, ready to persist one row per date.
#[derive(Debug, Clone)]
pub struct ValidatedSchedule {
    pub truck: ResolvedParty,
    pub venue: ResolvedParty,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub event_name: Option<String>,
    /// Ascending, de-duplicated, non-empty.
    pub dates: Vec<NaiveDate>,
}

/// Validate an intent and expand its date selection.
///
/// Fails with [`CoreError::Validation`] -- and nothing is persisted -- if
/// a freeform side has a blank name, if either time is missing, or if
/// the date selection expands to nothing.
pub fn validate_intent(
    intent: &ScheduleIntent,
    today: NaiveDate,
) -> Result<ValidatedSchedule, CoreError> {
    let truck = intent.truck.resolve("truck")?;
    let venue = intent.venue.resolve("venue")?;

    let start_time = intent
        .start_time
        .ok_or_else(|| CoreError::Validation("start_time is required".into()))?;
    let end_time = intent
        .end_time
        .ok_or_else(|| CoreError::Validation("end_time is required".into()))?;

    let dates = expand(&intent.dates, today)?;
    if dates.is_empty() {
        return Err(CoreError::Validation(
            "date selection expands to no dates".into(),
        ));
    }

    let event_name = intent
        .event_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    Ok(ValidatedSchedule {
        truck,
        venue,
        start_time,
        end_time,
        event_name,
        dates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn base_intent(dates: DateSelection) -> ScheduleIntent {
        ScheduleIntent {
            truck: PartySelection::Catalog { id: 1 },
            venue: PartySelection::Catalog { id: 2 },
            start_time: Some(time(16, 0)),
            end_time: Some(time(20, 0)),
            event_name: None,
            dates,
        }
    }

    // -----------------------------------------------------------------------
    // Party resolution
    // -----------------------------------------------------------------------

    #[test]
    fn catalog_selection_resolves_to_id_only() {
        let resolved = PartySelection::Catalog { id: 7 }.resolve("truck").unwrap();
        assert_eq!(resolved.id, Some(7));
        assert_eq!(resolved.other_name, None);
    }

    #[test]
    fn other_selection_resolves_to_trimmed_name_only() {
        let resolved = PartySelection::Other {
            name: "  Main Street Park  ".into(),
        }
        .resolve("venue")
        .unwrap();
        assert_eq!(resolved.id, None);
        assert_eq!(resolved.other_name.as_deref(), Some("Main Street Park"));
    }

    #[test]
    fn blank_other_name_is_rejected() {
        let err = PartySelection::Other { name: "   ".into() }
            .resolve("venue")
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("venue"));
    }

    // -----------------------------------------------------------------------
    // Intent validation
    // -----------------------------------------------------------------------

    #[test]
    fn missing_start_time_is_rejected() {
        let mut intent = base_intent(DateSelection::Single {
            date: date(2025, 8, 15),
        });
        intent.start_time = None;
        let err = validate_intent(&intent, date(2025, 8, 1)).unwrap_err();
        assert!(err.to_string().contains("start_time"));
    }

    #[test]
    fn missing_end_time_is_rejected() {
        let mut intent = base_intent(DateSelection::Single {
            date: date(2025, 8, 15),
        });
        intent.end_time = None;
        let err = validate_intent(&intent, date(2025, 8, 1)).unwrap_err();
        assert!(err.to_string().contains("end_time"));
    }

    #[test]
    fn empty_multiple_selection_is_rejected() {
        let intent = base_intent(DateSelection::Multiple { dates: vec![] });
        let err = validate_intent(&intent, date(2025, 8, 1)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn weekly_with_unreachable_end_is_rejected() {
        // Next Monday after Friday Aug 1 is Aug 4; end date is before it.
        let intent = base_intent(DateSelection::Weekly {
            weekday: 1,
            end_date: date(2025, 8, 3),
        });
        let err = validate_intent(&intent, date(2025, 8, 1)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn blank_event_name_becomes_none() {
        let mut intent = base_intent(DateSelection::Single {
            date: date(2025, 8, 15),
        });
        intent.event_name = Some("   ".into());
        let validated = validate_intent(&intent, date(2025, 8, 1)).unwrap();
        assert_eq!(validated.event_name, None);
    }

    // -----------------------------------------------------------------------
    // End-to-end: weekly recurrence with a freeform venue
    // -----------------------------------------------------------------------

    #[test]
    fn weekly_mondays_with_other_venue_produces_three_rows() {
        // Today is Friday 2025-08-01; three Mondays through Aug 18.
        let intent = ScheduleIntent {
            truck: PartySelection::Catalog { id: 42 },
            venue: PartySelection::Other {
                name: "Main Street Park".into(),
            },
            start_time: Some(time(16, 0)),
            end_time: Some(time(20, 0)),
            event_name: None,
            dates: DateSelection::Weekly {
                weekday: 1,
                end_date: date(2025, 8, 18),
            },
        };

        let validated = validate_intent(&intent, date(2025, 8, 1)).unwrap();

        assert_eq!(validated.dates.len(), 3);
        assert_eq!(
            validated.dates,
            vec![date(2025, 8, 4), date(2025, 8, 11), date(2025, 8, 18)]
        );
        assert_eq!(validated.truck.id, Some(42));
        assert_eq!(validated.venue.id, None);
        assert_eq!(
            validated.venue.other_name.as_deref(),
            Some("Main Street Park")
        );
    }
}
