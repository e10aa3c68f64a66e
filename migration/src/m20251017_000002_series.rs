use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Series::Table)
                    .if_not_exists()
                    .col(big_integer(Series::Id).primary_key())
                    .col(string(Series::Name))
                    .col(string(Series::EventType))
                    .col(integer(Series::TotalEvents))
                    .col(date(Series::FirstDate))
                    .col(date(Series::LastDate))
                    .col(timestamp(Series::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Series::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Series {
    Table,
    Id,
    Name,
    EventType,
    TotalEvents,
    FirstDate,
    LastDate,
    UpdatedAt,
}
