pub mod availability;
pub mod health;
pub mod hotels;
pub mod metrics;
pub mod promotions;
pub mod quotes;
pub mod request_id;
