//! Create hotels table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hotels::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Hotels::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Hotels::City)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Hotels::Stars)
                            .integer()
                            .not_null()
                            .default(3),
                    )
                    .col(ColumnDef::new(Hotels::Description).string())
                    .col(
                        ColumnDef::new(Hotels::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Hotels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Hotels::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique index on name
        manager
            .create_index(
                Index::create()
                    .name("idx_hotels_name")
                    .table(Hotels::Table)
                    .col(Hotels::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Hotels {
    Table,
    Id,
    Name,
    City,
    Stars,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
