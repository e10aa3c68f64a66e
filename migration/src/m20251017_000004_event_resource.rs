use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000003_event::Event;

static IDX_EVENT_RESOURCE_EVENT_ID: &str = "idx-event_resource-event_id";
static FK_EVENT_RESOURCE_EVENT_ID: &str = "fk-event_resource-event_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventResource::Table)
                    .if_not_exists()
                    .col(big_integer(EventResource::Id).primary_key())
                    .col(big_integer(EventResource::EventId))
                    .col(string(EventResource::ItemName))
                    .col(integer(EventResource::Quantity))
                    .col(text_null(EventResource::Instruction))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_RESOURCE_EVENT_ID)
                    .table(EventResource::Table)
                    .col(EventResource::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_RESOURCE_EVENT_ID)
                    .from_tbl(EventResource::Table)
                    .from_col(EventResource::EventId)
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
                    .name(FK_EVENT_RESOURCE_EVENT_ID)
                    .table(EventResource::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_RESOURCE_EVENT_ID)
                    .table(EventResource::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventResource::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EventResource {
    Table,
    Id,
    EventId,
    ItemName,
    Quantity,
    Instruction,
}
