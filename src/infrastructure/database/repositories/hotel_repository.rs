//! SeaORM implementation of HotelRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::info;

use crate::domain::hotel::{Hotel, HotelRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::hotel;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

fn entity_to_domain(h: hotel::Model) -> Hotel {
    Hotel {
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

// ── SeaOrmHotelRepository ───────────────────────────────────────

pub struct SeaOrmHotelRepository {
    db: DatabaseConnection,
}

impl SeaOrmHotelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HotelRepository for SeaOrmHotelRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Hotel>> {
        let model = hotel::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Hotel>> {
        let model = hotel::Entity::find()
            .filter(hotel::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_page(&self, page: u64, limit: u64) -> DomainResult<(Vec<Hotel>, u64)> {
        let total = hotel::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)?;
        let models = hotel::Entity::find()
            .order_by_asc(hotel::Column::Name)
            .offset((page - 1) * limit)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok((models.into_iter().map(entity_to_domain).collect(), total))
    }

    async fn save(&self, h: Hotel) -> DomainResult<Hotel> {
        let now = Utc::now();
        let model = hotel::ActiveModel {
            id: NotSet,
            name: Set(h.name),
            city: Set(h.city),
            stars: Set(h.stars),
            description: Set(h.description),
            is_active: Set(h.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Hotel saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, h: Hotel) -> DomainResult<()> {
        let existing = hotel::Entity::find_by_id(h.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Hotel",
                field: "id",
                value: h.id.to_string(),
            });
        };

        let model = hotel::ActiveModel {
            id: Set(h.id),
            name: Set(h.name),
            city: Set(h.city),
            stars: Set(h.stars),
            description: Set(h.description),
            is_active: Set(h.is_active),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = hotel::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Hotel",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
