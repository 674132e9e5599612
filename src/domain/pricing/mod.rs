//! Pricing rules
//!
//! Pure calculation pipeline for package quotes: classify each room's
//! occupants, price them against a departure tariff, then spread the
//! total over monthly installments. Nothing here touches persistence.

pub mod installments;
pub mod occupancy;
pub mod tariff;

pub use installments::{plan_installments, InstallmentPlan};
pub use occupancy::{OccupancyBreakdown, RoomCategory, RoomOccupancy};
pub use tariff::{
    AirRateTable, PriceQuote, Tariff, TransportType, ADMIN_FEE_RATE, AIR_SURCHARGE,
    REDUCED_CHILD_FEE,
};
