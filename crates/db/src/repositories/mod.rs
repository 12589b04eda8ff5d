mod analytics_repo;
mod schedule_repo;
mod truck_repo;
mod venue_repo;

pub use analytics_repo::AnalyticsRepo;
pub use schedule_repo::ScheduleRepo;
pub use truck_repo::TruckRepo;
pub use venue_repo::VenueRepo;
