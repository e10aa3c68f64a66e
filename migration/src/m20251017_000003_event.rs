use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000001_venue::Venue, m20251017_000002_series::Series};

static IDX_EVENT_DATE: &str = "idx-event-date";
static IDX_EVENT_SERIES_ID: &str = "idx-event-series_id";
static FK_EVENT_SERIES_ID: &str = "fk-event-series_id";
static FK_EVENT_VENUE_ID: &str = "fk-event-venue_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(big_integer(Event::Id).primary_key())
                    .col(big_integer(Event::SeriesId))
                    .col(big_integer(Event::ReservationId))
                    .col(date(Event::Date))
                    .col(time(Event::StartTime))
                    .col(time(Event::EndTime))
                    .col(string(Event::EventName))
                    .col(string(Event::EventType))
                    .col(string(Event::RoomName))
                    .col(integer_null(Event::VenueId))
                    .col(integer_null(Event::SeriesPosition))
                    .col(string_null(Event::Transform))
                    .col(timestamp(Event::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_DATE)
                    .table(Event::Table)
                    .col(Event::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_SERIES_ID)
                    .table(Event::Table)
                    .col(Event::SeriesId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_SERIES_ID)
                    .from_tbl(Event::Table)
                    .from_col(Event::SeriesId)
                    .to_tbl(Series::Table)
                    .to_col(Series::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_VENUE_ID)
                    .from_tbl(Event::Table)
                    .from_col(Event::VenueId)
                    .to_tbl(Venue::Table)
                    .to_col(Venue::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVENT_VENUE_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVENT_SERIES_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_SERIES_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_DATE)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    SeriesId,
    ReservationId,
    Date,
    StartTime,
    EndTime,
    EventName,
    EventType,
    RoomName,
    VenueId,
    SeriesPosition,
    Transform,
    UpdatedAt,
}
