//! Record shapes and field-bag extraction for the calendar base.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

/// A raw Airtable record: provider-assigned id plus a loosely typed
/// field bag.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub fields: serde_json::Map<String, Value>,
}

/// One page of records from the list endpoint.
#[derive(Debug, Deserialize)]
pub struct RecordPage {
    pub records: Vec<Record>,
    pub offset: Option<String>,
}

/// A record from a lookup table, reduced to id + display name.
#[derive(Debug, Clone)]
pub struct NamedRecord {
    pub id: String,
    pub name: String,
}

/// A calendar row with its fields pulled out of the bag.
///
/// `truck_name` may still be a linked-record id (`rec…`) at this point;
/// the import path resolves it against the Trucks table before
/// matching.
#[derive(Debug, Clone)]
pub struct CalendarRow {
    pub airtable_id: String,
    pub name: String,
    pub truck_name: Option<String>,
    pub venue_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub event_name: Option<String>,
    pub synced: bool,
}

impl CalendarRow {
    /// Extract a calendar row from a raw record.
    pub fn from_record(record: &Record) -> Self {
        CalendarRow {
            airtable_id: record.id.clone(),
            name: string_field(record, "Name").unwrap_or_default(),
            truck_name: link_or_string_field(record, "Truck"),
            venue_name: string_field(record, "Venue"),
            date: date_field(record, "Date"),
            start_time: string_field(record, "Start Time"),
            end_time: string_field(record, "End Time"),
            event_name: string_field(record, "Event Name"),
            synced: bool_field(record, "Synced"),
        }
    }

    /// Replace a linked-record id in `truck_name` with the linked
    /// record's display name, when the lookup table knows it.
    pub fn resolve_truck_link(&mut self, trucks: &[NamedRecord]) {
        if let Some(ref current) = self.truck_name {
            if let Some(linked) = trucks.iter().find(|t| &t.id == current) {
                self.truck_name = Some(linked.name.clone());
            }
        }
    }
}

fn string_field(record: &Record, key: &str) -> Option<String> {
    match record.fields.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn bool_field(record: &Record, key: &str) -> bool {
    matches!(record.fields.get(key), Some(Value::Bool(true)))
}

/// A link-type field arrives as an array of linked-record ids; older
/// rows in the base carry a plain string instead. Either way the first
/// value wins.
fn link_or_string_field(record: &Record, key: &str) -> Option<String> {
    match record.fields.get(key) {
        Some(Value::Array(items)) => items
            .first()
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(String::from),
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Dates arrive as `YYYY-MM-DD` or as a full RFC 3339 timestamp
/// depending on the column's Airtable configuration.
fn date_field(record: &Record, key: &str) -> Option<NaiveDate> {
    let raw = match record.fields.get(key) {
        Some(Value::String(s)) => s,
        _ => return None,
    };
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}
