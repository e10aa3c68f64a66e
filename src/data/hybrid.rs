use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::{data::BATCH_SIZE, model::enrichment::HybridConfig};

pub struct HybridRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HybridRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or refreshes the hybrid record of each given event.
    pub async fn upsert_many(&self, hybrids: &[(i64, HybridConfig)]) -> Result<(), DbErr> {
        for batch in hybrids.chunks(BATCH_SIZE) {
            let models = batch
                .iter()
                .map(|(event_id, hybrid)| entity::hybrid::ActiveModel {
                    event_id: ActiveValue::Set(*event_id),
                    meeting_id: ActiveValue::Set(hybrid.meeting_id.clone()),
                    meeting_link: ActiveValue::Set(hybrid.meeting_link.clone()),
                    instructions: ActiveValue::Set(hybrid.instructions.clone()),
                });

            entity::prelude::Hybrid::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::hybrid::Column::EventId)
                        .update_columns([
                            entity::hybrid::Column::MeetingId,
                            entity::hybrid::Column::MeetingLink,
                            entity::hybrid::Column::Instructions,
                        ])
                        .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }

    pub async fn delete_by_event_ids(&self, event_ids: &[i64]) -> Result<u64, DbErr> {
        let mut deleted = 0;

        for batch in event_ids.chunks(BATCH_SIZE) {
            deleted += entity::prelude::Hybrid::delete_many()
                .filter(entity::hybrid::Column::EventId.is_in(batch.iter().copied()))
                .exec(self.db)
                .await?
                .rows_affected;
        }

        Ok(deleted)
    }
}
