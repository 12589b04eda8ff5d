//! Client for the external calendar source (Airtable).
//!
//! The community calendar lives in an Airtable base maintained by hand;
//! this crate pulls its rows for the import preview/commit flow and
//! writes back the `Synced` flag. Records are a loosely typed field
//! bag; everything here is defensive about shapes.

mod client;
mod records;

pub use client::{AirtableClient, AirtableConfig};
pub use records::{CalendarRow, NamedRecord, Record};

/// Errors from the external calendar API.
#[derive(Debug, thiserror::Error)]
pub enum AirtableError {
    #[error("Airtable request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Airtable API error: {status} - {body}")]
    Api { status: u16, body: String },
}
