pub mod availability;
pub mod hotel;
pub mod pricing;
pub mod promotion;
pub mod repositories;

// Re-export commonly used types
pub use availability::{Availability, AvailabilityRepository};
pub use hotel::{Hotel, HotelRepository};
pub use pricing::{
    plan_installments, AirRateTable, InstallmentPlan, OccupancyBreakdown, PriceQuote,
    RoomCategory, RoomOccupancy, Tariff, TransportType,
};
pub use promotion::{Promotion, PromotionKind, PromotionRepository};
pub use repositories::{DomainResult, RepositoryProvider};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
