//! Departure availability aggregate

pub mod model;
pub mod repository;

pub use model::Availability;
pub use repository::AvailabilityRepository;
