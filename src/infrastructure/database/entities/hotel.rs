//! Hotel entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Hotel model - a property offered in travel packages
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotels")]
pub struct Model {
    /// Unique hotel ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name, unique across the catalog
    pub name: String,

    /// City the hotel is located in
    pub city: String,

    /// Star rating (1-5)
    pub stars: i32,

    /// Free-form description
    pub description: Option<String>,

    /// Whether the hotel takes new departures
    pub is_active: bool,

    /// When the hotel was created
    pub created_at: DateTime<Utc>,

    /// When the hotel was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::availability::Entity")]
    Availability,
}

impl Related<super::availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Availability.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
