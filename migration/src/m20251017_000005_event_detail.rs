use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000003_event::Event;

static FK_HYBRID_EVENT_ID: &str = "fk-hybrid-event_id";
static FK_AV_CONFIG_EVENT_ID: &str = "fk-av_config-event_id";
static FK_OTHER_HARDWARE_EVENT_ID: &str = "fk-other_hardware-event_id";
static FK_RECORDING_EVENT_ID: &str = "fk-recording-event_id";
static IDX_OTHER_HARDWARE_EVENT_ID: &str = "idx-other_hardware-event_id";

/// Per-event records derived from an event's resource lines: hybrid meeting details,
/// AV configuration, extra hardware and lecture recording.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hybrid::Table)
                    .if_not_exists()
                    .col(big_integer(Hybrid::EventId).primary_key())
                    .col(string_null(Hybrid::MeetingId))
                    .col(string_null(Hybrid::MeetingLink))
                    .col(text_null(Hybrid::Instructions))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_HYBRID_EVENT_ID)
                            .from(Hybrid::Table, Hybrid::EventId)
                            .to(Event::Table, Event::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AvConfig::Table)
                    .if_not_exists()
                    .col(big_integer(AvConfig::EventId).primary_key())
                    .col(integer(AvConfig::HandheldMics))
                    .col(integer(AvConfig::LapelMics))
                    .col(boolean(AvConfig::Clicker))
                    .col(string_null(AvConfig::LeftSource))
                    .col(string_null(AvConfig::LeftDevice))
                    .col(string_null(AvConfig::RightSource))
                    .col(string_null(AvConfig::RightDevice))
                    .col(string_null(AvConfig::CenterSource))
                    .col(string_null(AvConfig::CenterDevice))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_AV_CONFIG_EVENT_ID)
                            .from(AvConfig::Table, AvConfig::EventId)
                            .to(Event::Table, Event::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OtherHardware::Table)
                    .if_not_exists()
                    .col(big_integer(OtherHardware::Id).primary_key())
                    .col(big_integer(OtherHardware::EventId))
                    .col(string(OtherHardware::Kind))
                    .col(string(OtherHardware::ItemName))
                    .col(integer(OtherHardware::Quantity))
                    .col(text_null(OtherHardware::Instructions))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_OTHER_HARDWARE_EVENT_ID)
                            .from(OtherHardware::Table, OtherHardware::EventId)
                            .to(Event::Table, Event::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OTHER_HARDWARE_EVENT_ID)
                    .table(OtherHardware::Table)
                    .col(OtherHardware::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Recording::Table)
                    .if_not_exists()
                    .col(big_integer(Recording::EventId).primary_key())
                    .col(string(Recording::RecordingType))
                    .col(text_null(Recording::Instructions))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECORDING_EVENT_ID)
                            .from(Recording::Table, Recording::EventId)
                            .to(Event::Table, Event::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recording::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OTHER_HARDWARE_EVENT_ID)
                    .table(OtherHardware::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OtherHardware::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AvConfig::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Hybrid::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Hybrid {
    Table,
    EventId,
    MeetingId,
    MeetingLink,
    Instructions,
}

#[derive(DeriveIden)]
enum AvConfig {
    Table,
    EventId,
    HandheldMics,
    LapelMics,
    Clicker,
    LeftSource,
    LeftDevice,
    RightSource,
    RightDevice,
    CenterSource,
    CenterDevice,
}

#[derive(DeriveIden)]
enum OtherHardware {
    Table,
    Id,
    EventId,
    Kind,
    ItemName,
    Quantity,
    Instructions,
}

#[derive(DeriveIden)]
enum Recording {
    Table,
    EventId,
    RecordingType,
    Instructions,
}
