//! Availability module — departures and their rates

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
