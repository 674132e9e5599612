//! Promotion aggregate

pub mod model;
pub mod repository;

pub use model::{Promotion, PromotionKind};
pub use repository::PromotionRepository;
