//! Database entities module

pub mod availability;
pub mod hotel;
pub mod promotion;

pub use availability::Entity as Availability;
pub use hotel::Entity as Hotel;
pub use promotion::Entity as Promotion;
