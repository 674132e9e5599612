//! Package quote module
//!
//! Stateless pricing previews against a stored departure.

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
