//! Promotion repository trait

use async_trait::async_trait;

use super::model::Promotion;
use crate::domain::repositories::DomainResult;

/// Persistence operations for promotions
#[async_trait]
pub trait PromotionRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Promotion>>;

    async fn find_by_code(&self, code: &str) -> DomainResult<Option<Promotion>>;

    /// All promotions ordered by code.
    async fn find_all(&self) -> DomainResult<Vec<Promotion>>;

    /// Insert and return the stored promotion with its assigned id.
    async fn save(&self, promotion: Promotion) -> DomainResult<Promotion>;

    async fn update(&self, promotion: Promotion) -> DomainResult<()>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
