//! # Viamar Tours Service
//!
//! Back office and pricing engine for bus and air tour packages.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, pricing rules and repository traits
//! - **application**: Use cases built on top of the domain (quote preview)
//! - **infrastructure**: External concerns (SeaORM database, migrations)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Cross-cutting helpers (errors, shutdown, validation)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
