//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod availability_repository;
pub mod hotel_repository;
pub mod promotion_repository;
pub mod repository_provider;

pub use repository_provider::SeaOrmRepositoryProvider;
