//! Promotion entity

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Promotion kind
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum PromotionKind {
    /// Percentage taken off the final price
    #[sea_orm(string_value = "PercentOff")]
    PercentOff,
    /// Flat amount subtracted from the final price
    #[sea_orm(string_value = "AmountOff")]
    AmountOff,
}

impl Default for PromotionKind {
    fn default() -> Self {
        Self::PercentOff
    }
}

impl std::fmt::Display for PromotionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PercentOff => write!(f, "PercentOff"),
            Self::AmountOff => write!(f, "AmountOff"),
        }
    }
}

/// Promotion model - a discount code applied to package quotes
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "promotions")]
pub struct Model {
    /// Unique promotion ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Code customers type in, unique
    pub code: String,

    /// Free-form description
    pub description: Option<String>,

    /// How the discount is computed
    pub kind: PromotionKind,

    /// Percentage (0-100) or flat USD amount depending on the kind
    pub value: f64,

    /// Valid from date (optional)
    pub valid_from: Option<NaiveDate>,

    /// Valid until date (optional)
    pub valid_until: Option<NaiveDate>,

    /// Whether this promotion can be applied
    pub is_active: bool,

    /// When the promotion was created
    pub created_at: DateTime<Utc>,

    /// When the promotion was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
