//! Delivery interfaces
//!
//! Transport-facing code lives here. The REST API (with Swagger UI)
//! is the only interface this service exposes.

pub mod http;
