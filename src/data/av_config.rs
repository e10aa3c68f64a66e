use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::{data::BATCH_SIZE, model::enrichment::AvConfig};

pub struct AvConfigRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvConfigRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or refreshes the AV config of each given event.
    ///
    /// Only the resource-derived columns (microphone counts, clicker) are updated on conflict;
    /// source and device columns keep whatever operators entered.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Stored rows after the upsert, including operator-entered columns
    pub async fn upsert_many(
        &self,
        configs: &[(i64, AvConfig)],
    ) -> Result<Vec<entity::av_config::Model>, DbErr> {
        let mut upserted = Vec::with_capacity(configs.len());

        for batch in configs.chunks(BATCH_SIZE) {
            let models = batch
                .iter()
                .map(|(event_id, config)| entity::av_config::ActiveModel {
                    event_id: ActiveValue::Set(*event_id),
                    handheld_mics: ActiveValue::Set(config.handheld_mics),
                    lapel_mics: ActiveValue::Set(config.lapel_mics),
                    clicker: ActiveValue::Set(config.clicker),
                    left_source: ActiveValue::Set(config.left_source.clone()),
                    left_device: ActiveValue::Set(config.left_device.clone()),
                    right_source: ActiveValue::Set(config.right_source.clone()),
                    right_device: ActiveValue::Set(config.right_device.clone()),
                    center_source: ActiveValue::Set(config.center_source.clone()),
                    center_device: ActiveValue::Set(config.center_device.clone()),
                });

            let models = entity::prelude::AvConfig::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::av_config::Column::EventId)
                        .update_columns([
                            entity::av_config::Column::HandheldMics,
                            entity::av_config::Column::LapelMics,
                            entity::av_config::Column::Clicker,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;
            upserted.extend(models);
        }

        Ok(upserted)
    }

    pub async fn delete_by_event_ids(&self, event_ids: &[i64]) -> Result<u64, DbErr> {
        let mut deleted = 0;

        for batch in event_ids.chunks(BATCH_SIZE) {
            deleted += entity::prelude::AvConfig::delete_many()
                .filter(entity::av_config::Column::EventId.is_in(batch.iter().copied()))
                .exec(self.db)
                .await?
                .rows_affected;
        }

        Ok(deleted)
    }
}

impl From<entity::av_config::Model> for AvConfig {
    fn from(model: entity::av_config::Model) -> Self {
        Self {
            handheld_mics: model.handheld_mics,
            lapel_mics: model.lapel_mics,
            clicker: model.clicker,
            left_source: model.left_source,
            left_device: model.left_device,
            right_source: model.right_source,
            right_device: model.right_device,
            center_source: model.center_source,
            center_device: model.center_device,
        }
    }
}
