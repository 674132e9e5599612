//! Hotel DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Hotel;

/// A hotel in the catalog
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HotelResponse {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub stars: i32,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelResponse {
    fn from(h: Hotel) -> Self {
        Self {
            id: h.id,
            name: h.name,
            city: h.city,
            stars: h.stars,
            description: h.description,
            is_active: h.is_active,
            created_at: h.created_at,
            updated_at: h.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateHotelRequest {
    #[validate(length(min = 1, max = 120, message = "hotel name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 80, message = "city is required"))]
    pub city: String,
    #[validate(range(min = 1, max = 5, message = "stars must be between 1 and 5"))]
    pub stars: i32,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateHotelRequest {
    #[validate(length(min = 1, max = 120, message = "hotel name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 80, message = "city cannot be empty"))]
    pub city: Option<String>,
    #[validate(range(min = 1, max = 5, message = "stars must be between 1 and 5"))]
    pub stars: Option<i32>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
