use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000003_event::Event;

static IDX_ACTION_EVENT_ID: &str = "idx-action-event_id";
static FK_ACTION_EVENT_ID: &str = "fk-action-event_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Action::Table)
                    .if_not_exists()
                    .col(big_integer(Action::Id).primary_key())
                    .col(big_integer(Action::EventId))
                    .col(string(Action::ActionType))
                    .col(string_null(Action::SubType))
                    .col(time(Action::StartTime))
                    .col(string(Action::Status).default("pending"))
                    .col(string_null(Action::AssignedTo))
                    .col(boolean(Action::AssignedToManual).default(false))
                    .col(string_null(Action::CompletedBy))
                    .col(timestamp_null(Action::CompletedTime))
                    .col(text_null(Action::Notes))
                    .col(timestamp(Action::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACTION_EVENT_ID)
                    .table(Action::Table)
                    .col(Action::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACTION_EVENT_ID)
                    .from_tbl(Action::Table)
                    .from_col(Action::EventId)
                    .to_tbl(Event::Table)
                    .to_col(Event::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ACTION_EVENT_ID)
                    .table(Action::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACTION_EVENT_ID)
                    .table(Action::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Action::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Action {
    Table,
    Id,
    EventId,
    ActionType,
    SubType,
    StartTime,
    Status,
    AssignedTo,
    AssignedToManual,
    CompletedBy,
    CompletedTime,
    Notes,
    CreatedAt,
}
