use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000006_action::Action;

static FK_QC_ITEM_ACTION_ID: &str = "fk-qc_item-action_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QcItem::Table)
                    .if_not_exists()
                    .col(big_integer(QcItem::ActionId))
                    .col(integer(QcItem::QcItemDictId))
                    .col(string(QcItem::Status).default("na"))
                    .col(string_null(QcItem::SnTicket))
                    .col(boolean(QcItem::Waived).default(false))
                    .col(text_null(QcItem::WaivedReason))
                    .col(string_null(QcItem::FailMode))
                    .primary_key(
                        Index::create()
                            .col(QcItem::ActionId)
                            .col(QcItem::QcItemDictId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_QC_ITEM_ACTION_ID)
                    .from_tbl(QcItem::Table)
                    .from_col(QcItem::ActionId)
                    .to_tbl(Action::Table)
                    .to_col(Action::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_QC_ITEM_ACTION_ID)
                    .table(QcItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(QcItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum QcItem {
    Table,
    ActionId,
    QcItemDictId,
    Status,
    SnTicket,
    Waived,
    WaivedReason,
    FailMode,
}
