//! Departure availability entity

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transport mode of a departure
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum TransportType {
    /// Bus departure
    #[sea_orm(string_value = "Bus")]
    Bus,
    /// Air departure
    #[sea_orm(string_value = "Aéreo")]
    Aereo,
}

impl Default for TransportType {
    fn default() -> Self {
        Self::Bus
    }
}

impl std::fmt::Display for TransportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bus => write!(f, "Bus"),
            Self::Aereo => write!(f, "Aéreo"),
        }
    }
}

/// Availability model - one bookable departure with its rates
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "availability")]
pub struct Model {
    /// Unique availability ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Hotel this departure belongs to
    pub hotel_id: i32,

    /// Departure date
    pub travel_date: NaiveDate,

    /// Number of nights at the hotel
    pub nights: i32,

    /// Transport mode
    pub transport: TransportType,

    /// Price per adult (USD)
    pub per_adult_rate: f64,

    /// Air rate for children 0-2 (USD, 0 when unset)
    pub air_child_0_2: f64,

    /// Air rate for children 2-5 (USD, 0 when unset)
    pub air_child_2_5: f64,

    /// Air rate for children 6+ (USD, 0 when unset)
    pub air_child_6_plus: f64,

    /// Air fee charged once per traveler (USD, 0 when unset)
    pub air_fee_per_person: f64,

    /// Seats offered on this departure
    pub seats_total: i32,

    /// Seats still available
    pub seats_left: i32,

    /// Whether this departure can be quoted
    pub is_active: bool,

    /// When the departure was created
    pub created_at: DateTime<Utc>,

    /// When the departure was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::HotelId",
        to = "super::hotel::Column::Id"
    )]
    Hotel,
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
