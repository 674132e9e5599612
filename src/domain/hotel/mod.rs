//! Hotel aggregate

pub mod model;
pub mod repository;

pub use model::Hotel;
pub use repository::HotelRepository;
