//! Promotion management module
//!
//! CRUD for discount codes applied to package quotes.

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
