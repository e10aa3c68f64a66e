use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::{data::BATCH_SIZE, model::enrichment::RecordingConfig};

pub struct RecordingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecordingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or refreshes the recording record of each given event.
    pub async fn upsert_many(&self, recordings: &[(i64, RecordingConfig)]) -> Result<(), DbErr> {
        for batch in recordings.chunks(BATCH_SIZE) {
            let models = batch
                .iter()
                .map(|(event_id, recording)| entity::recording::ActiveModel {
                    event_id: ActiveValue::Set(*event_id),
                    recording_type: ActiveValue::Set(recording.recording_type.clone()),
                    instructions: ActiveValue::Set(recording.instructions.clone()),
                });

            entity::prelude::Recording::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::recording::Column::EventId)
                        .update_columns([
                            entity::recording::Column::RecordingType,
                            entity::recording::Column::Instructions,
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
            deleted += entity::prelude::Recording::delete_many()
                .filter(entity::recording::Column::EventId.is_in(batch.iter().copied()))
                .exec(self.db)
                .await?
                .rows_affected;
        }

        Ok(deleted)
    }
}
