//! Create availability table

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_hotels::Hotels;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Availability::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Availability::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Availability::HotelId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Availability::TravelDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Availability::Nights)
                            .integer()
                            .not_null()
                            .default(7),
                    )
                    .col(
                        ColumnDef::new(Availability::Transport)
                            .string()
                            .not_null()
                            .default("Bus"),
                    )
                    .col(
                        ColumnDef::new(Availability::PerAdultRate)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Availability::AirChild02)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Availability::AirChild25)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Availability::AirChild6Plus)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Availability::AirFeePerPerson)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Availability::SeatsTotal)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Availability::SeatsLeft)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Availability::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Availability::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Availability::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_availability_hotel")
                            .from(Availability::Table, Availability::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on hotel_id + travel_date for departure lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_availability_hotel_date")
                    .table(Availability::Table)
                    .col(Availability::HotelId)
                    .col(Availability::TravelDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Availability::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Availability {
    Table,
    Id,
    HotelId,
    TravelDate,
    Nights,
    Transport,
    PerAdultRate,
    #[iden = "air_child_0_2"]
    AirChild02,
    #[iden = "air_child_2_5"]
    AirChild25,
    #[iden = "air_child_6_plus"]
    AirChild6Plus,
    AirFeePerPerson,
    SeatsTotal,
    SeatsLeft,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
