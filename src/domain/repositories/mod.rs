//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::availability::AvailabilityRepository;
use super::hotel::HotelRepository;
use super::promotion::PromotionRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let hotel = repos.hotels().find_by_id(1).await?;
///     let departures = repos.availability().find_by_hotel(1).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn hotels(&self) -> &dyn HotelRepository;
    fn availability(&self) -> &dyn AvailabilityRepository;
    fn promotions(&self) -> &dyn PromotionRepository;
}
