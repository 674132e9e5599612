//! SeaORM implementation of PromotionRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::domain::promotion::{Promotion, PromotionKind, PromotionRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::promotion;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

fn entity_to_domain(p: promotion::Model) -> Promotion {
    Promotion {
        id: p.id,
        code: p.code,
        description: p.description,
        kind: match p.kind {
            promotion::PromotionKind::PercentOff => PromotionKind::PercentOff,
            promotion::PromotionKind::AmountOff => PromotionKind::AmountOff,
        },
        value: p.value,
        valid_from: p.valid_from,
        valid_until: p.valid_until,
        is_active: p.is_active,
        created_at: p.created_at,
        updated_at: p.updated_at,
    }
}

fn kind_to_entity(k: PromotionKind) -> promotion::PromotionKind {
    match k {
        PromotionKind::PercentOff => promotion::PromotionKind::PercentOff,
        PromotionKind::AmountOff => promotion::PromotionKind::AmountOff,
    }
}

// ── SeaOrmPromotionRepository ───────────────────────────────────

pub struct SeaOrmPromotionRepository {
    db: DatabaseConnection,
}

impl SeaOrmPromotionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PromotionRepository for SeaOrmPromotionRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Promotion>> {
        let model = promotion::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_code(&self, code: &str) -> DomainResult<Option<Promotion>> {
        let model = promotion::Entity::find()
            .filter(promotion::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Promotion>> {
        let models = promotion::Entity::find()
            .order_by_asc(promotion::Column::Code)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, p: Promotion) -> DomainResult<Promotion> {
        let now = Utc::now();
        let model = promotion::ActiveModel {
            id: NotSet,
            code: Set(p.code),
            description: Set(p.description),
            kind: Set(kind_to_entity(p.kind)),
            value: Set(p.value),
            valid_from: Set(p.valid_from),
            valid_until: Set(p.valid_until),
            is_active: Set(p.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Promotion saved: {} ({})", result.code, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, p: Promotion) -> DomainResult<()> {
        let existing = promotion::Entity::find_by_id(p.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Promotion",
                field: "id",
                value: p.id.to_string(),
            });
        };

        let model = promotion::ActiveModel {
            id: Set(p.id),
            code: Set(p.code),
            description: Set(p.description),
            kind: Set(kind_to_entity(p.kind)),
            value: Set(p.value),
            valid_from: Set(p.valid_from),
            valid_until: Set(p.valid_until),
            is_active: Set(p.is_active),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = promotion::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Promotion",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
