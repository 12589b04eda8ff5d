pub mod analytics;
pub mod schedule;
pub mod sync;
pub mod trucks;
pub mod venues;
