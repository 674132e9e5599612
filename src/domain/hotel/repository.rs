//! Hotel repository trait

use async_trait::async_trait;

use super::model::Hotel;
use crate::domain::repositories::DomainResult;

/// Persistence operations for hotels
#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Hotel>>;

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Hotel>>;

    /// One page of hotels ordered by name, plus the total row count.
    async fn find_page(&self, page: u64, limit: u64) -> DomainResult<(Vec<Hotel>, u64)>;

    /// Insert and return the stored hotel with its assigned id.
    async fn save(&self, hotel: Hotel) -> DomainResult<Hotel>;

    async fn update(&self, hotel: Hotel) -> DomainResult<()>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
