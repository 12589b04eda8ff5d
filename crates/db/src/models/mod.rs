pub mod analytics;
pub mod schedule;
pub mod truck;
pub mod venue;
