//! Availability repository trait

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::Availability;
use crate::domain::repositories::DomainResult;

/// Persistence operations for departure availability
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Availability>>;

    /// All departures of one hotel ordered by travel date.
    async fn find_by_hotel(&self, hotel_id: i32) -> DomainResult<Vec<Availability>>;

    /// Active departures leaving on or after the given date.
    async fn find_upcoming(&self, from: NaiveDate) -> DomainResult<Vec<Availability>>;

    /// Insert and return the stored departure with its assigned id.
    async fn save(&self, availability: Availability) -> DomainResult<Availability>;

    async fn update(&self, availability: Availability) -> DomainResult<()>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
