//! SeaORM implementation of AvailabilityRepository

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::domain::availability::{Availability, AvailabilityRepository};
use crate::domain::pricing::TransportType;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::availability;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

fn entity_to_domain(a: availability::Model) -> Availability {
    Availability {
        id: a.id,
        hotel_id: a.hotel_id,
        travel_date: a.travel_date,
        nights: a.nights,
        transport: match a.transport {
            availability::TransportType::Bus => TransportType::Bus,
            availability::TransportType::Aereo => TransportType::Aereo,
        },
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

fn transport_to_entity(t: TransportType) -> availability::TransportType {
    match t {
        TransportType::Bus => availability::TransportType::Bus,
        TransportType::Aereo => availability::TransportType::Aereo,
    }
}

// ── SeaOrmAvailabilityRepository ────────────────────────────────

pub struct SeaOrmAvailabilityRepository {
    db: DatabaseConnection,
}

impl SeaOrmAvailabilityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AvailabilityRepository for SeaOrmAvailabilityRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Availability>> {
        let model = availability::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_hotel(&self, hotel_id: i32) -> DomainResult<Vec<Availability>> {
        let models = availability::Entity::find()
            .filter(availability::Column::HotelId.eq(hotel_id))
            .order_by_asc(availability::Column::TravelDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_upcoming(&self, from: NaiveDate) -> DomainResult<Vec<Availability>> {
        let models = availability::Entity::find()
            .filter(availability::Column::TravelDate.gte(from))
            .filter(availability::Column::IsActive.eq(true))
            .order_by_asc(availability::Column::TravelDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, a: Availability) -> DomainResult<Availability> {
        let now = Utc::now();
        let model = availability::ActiveModel {
            id: NotSet,
            hotel_id: Set(a.hotel_id),
            travel_date: Set(a.travel_date),
            nights: Set(a.nights),
            transport: Set(transport_to_entity(a.transport)),
            per_adult_rate: Set(a.per_adult_rate),
            air_child_0_2: Set(a.air_child_0_2),
            air_child_2_5: Set(a.air_child_2_5),
            air_child_6_plus: Set(a.air_child_6_plus),
            air_fee_per_person: Set(a.air_fee_per_person),
            seats_total: Set(a.seats_total),
            seats_left: Set(a.seats_left),
            is_active: Set(a.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Availability saved: hotel {} on {} ({})",
            result.hotel_id, result.travel_date, result.id
        );
        Ok(entity_to_domain(result))
    }

    async fn update(&self, a: Availability) -> DomainResult<()> {
        let existing = availability::Entity::find_by_id(a.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Availability",
                field: "id",
                value: a.id.to_string(),
            });
        };

        let model = availability::ActiveModel {
            id: Set(a.id),
            hotel_id: Set(a.hotel_id),
            travel_date: Set(a.travel_date),
            nights: Set(a.nights),
            transport: Set(transport_to_entity(a.transport)),
            per_adult_rate: Set(a.per_adult_rate),
            air_child_0_2: Set(a.air_child_0_2),
            air_child_2_5: Set(a.air_child_2_5),
            air_child_6_plus: Set(a.air_child_6_plus),
            air_fee_per_person: Set(a.air_fee_per_person),
            seats_total: Set(a.seats_total),
            seats_left: Set(a.seats_left),
            is_active: Set(a.is_active),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = availability::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Availability",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
