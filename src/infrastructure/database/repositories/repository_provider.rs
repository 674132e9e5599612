//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::availability::AvailabilityRepository;
use crate::domain::hotel::HotelRepository;
use crate::domain::promotion::PromotionRepository;
use crate::domain::repositories::RepositoryProvider;

use super::availability_repository::SeaOrmAvailabilityRepository;
use super::hotel_repository::SeaOrmHotelRepository;
use super::promotion_repository::SeaOrmPromotionRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let hotel = repos.hotels().find_by_id(1).await?;
/// let departures = repos.availability().find_by_hotel(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    hotels: SeaOrmHotelRepository,
    availability: SeaOrmAvailabilityRepository,
    promotions: SeaOrmPromotionRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            hotels: SeaOrmHotelRepository::new(db.clone()),
            availability: SeaOrmAvailabilityRepository::new(db.clone()),
            promotions: SeaOrmPromotionRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn hotels(&self) -> &dyn HotelRepository {
        &self.hotels
    }

    fn availability(&self) -> &dyn AvailabilityRepository {
        &self.availability
    }

    fn promotions(&self) -> &dyn PromotionRepository {
        &self.promotions
    }
}
