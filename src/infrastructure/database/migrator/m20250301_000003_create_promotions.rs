//! Create promotions table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Promotions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Promotions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Promotions::Code)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Promotions::Description).string())
                    .col(
                        ColumnDef::new(Promotions::Kind)
                            .string()
                            .not_null()
                            .default("PercentOff"),
                    )
                    .col(
                        ColumnDef::new(Promotions::Value)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Promotions::ValidFrom).date())
                    .col(ColumnDef::new(Promotions::ValidUntil).date())
                    .col(
                        ColumnDef::new(Promotions::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Promotions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Promotions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique index on code
        manager
            .create_index(
                Index::create()
                    .name("idx_promotions_code")
                    .table(Promotions::Table)
                    .col(Promotions::Code)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Promotions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Promotions {
    Table,
    Id,
    Code,
    Description,
    Kind,
    Value,
    ValidFrom,
    ValidUntil,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
