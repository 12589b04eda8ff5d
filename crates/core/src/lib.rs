//! Pure domain logic for the truckstop directory.
//!
//! This crate has zero internal deps (no DB, no async, no I/O) so the
//! date, recurrence, and import-matching logic can be used by the API
//! layer and any future CLI tooling, and unit-tested without a live
//! backend.

pub mod eastern;
pub mod error;
pub mod matching;
pub mod recurrence;
pub mod schedule;
pub mod timeparse;
pub mod types;
