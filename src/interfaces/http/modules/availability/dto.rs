//! Availability DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::Availability;

/// One bookable departure
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityResponse {
    pub id: i32,
    pub hotel_id: i32,
    pub travel_date: NaiveDate,
    pub nights: i32,
    /// "Bus" or "Aéreo"
    pub transport: String,
    pub per_adult_rate: f64,
    pub air_child_0_2: f64,
    pub air_child_2_5: f64,
    pub air_child_6_plus: f64,
    pub air_fee_per_person: f64,
    pub seats_total: i32,
    pub seats_left: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Availability> for AvailabilityResponse {
    fn from(a: Availability) -> Self {
        Self {
            id: a.id,
            hotel_id: a.hotel_id,
            travel_date: a.travel_date,
            nights: a.nights,
            transport: a.transport.to_string(),
            per_adult_rate: a.per_adult_rate,
            air_child_0_2: a.air_child_0_2,
            air_child_2_5: a.air_child_2_5,
            air_child_6_plus: a.air_child_6_plus,
            air_fee_per_person: a.air_fee_per_person,
            seats_total: a.seats_total,
            seats_left: a.seats_left,
            is_active: a.is_active,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAvailabilityRequest {
    pub hotel_id: i32,
    pub travel_date: NaiveDate,
    #[validate(range(min = 1, max = 60, message = "nights must be between 1 and 60"))]
    pub nights: i32,
    /// Transport label; only the exact "Aéreo" prices as air
    pub transport: String,
    #[validate(range(min = 0.0, message = "per_adult_rate must be non-negative"))]
    pub per_adult_rate: f64,
    pub air_child_0_2: Option<f64>,
    pub air_child_2_5: Option<f64>,
    pub air_child_6_plus: Option<f64>,
    pub air_fee_per_person: Option<f64>,
    #[validate(range(min = 1, message = "seats_total must be positive"))]
    pub seats_total: i32,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAvailabilityRequest {
    pub travel_date: Option<NaiveDate>,
    #[validate(range(min = 1, max = 60, message = "nights must be between 1 and 60"))]
    pub nights: Option<i32>,
    pub transport: Option<String>,
    #[validate(range(min = 0.0, message = "per_adult_rate must be non-negative"))]
    pub per_adult_rate: Option<f64>,
    pub air_child_0_2: Option<f64>,
    pub air_child_2_5: Option<f64>,
    pub air_child_6_plus: Option<f64>,
    pub air_fee_per_person: Option<f64>,
    pub seats_total: Option<i32>,
    pub seats_left: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListAvailabilityParams {
    /// Only departures on or after this date; defaults to today
    pub from: Option<NaiveDate>,
}
