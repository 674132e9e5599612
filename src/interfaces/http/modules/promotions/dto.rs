//! Promotion DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Promotion;

/// A promotional code
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PromotionResponse {
    pub id: i32,
    pub code: String,
    pub description: Option<String>,
    /// "PercentOff" or "AmountOff"
    pub kind: String,
    pub value: f64,
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Promotion> for PromotionResponse {
    fn from(p: Promotion) -> Self {
        Self {
            id: p.id,
            code: p.code,
            description: p.description,
            kind: p.kind.to_string(),
            value: p.value,
            valid_from: p.valid_from,
            valid_until: p.valid_until,
            is_active: p.is_active,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePromotionRequest {
    #[validate(length(min = 1, max = 40, message = "promotion code is required"))]
    pub code: String,
    pub description: Option<String>,
    /// "PercentOff" (default) or "AmountOff"
    pub kind: Option<String>,
    #[validate(range(min = 0.0, message = "value must be non-negative"))]
    pub value: f64,
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePromotionRequest {
    pub description: Option<String>,
    pub kind: Option<String>,
    #[validate(range(min = 0.0, message = "value must be non-negative"))]
    pub value: Option<f64>,
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub is_active: Option<bool>,
}
