use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

use crate::{data::BATCH_SIZE, model::enrichment::OtherHardware};

pub struct OtherHardwareRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OtherHardwareRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or refreshes hardware rows.
    ///
    /// # Arguments
    /// - `hardware`: Tuples of (event id, hardware row)
    pub async fn upsert_many(&self, hardware: &[(i64, OtherHardware)]) -> Result<(), DbErr> {
        for batch in hardware.chunks(BATCH_SIZE) {
            let models = batch
                .iter()
                .map(|(event_id, row)| entity::other_hardware::ActiveModel {
                    id: ActiveValue::Set(row.id),
                    event_id: ActiveValue::Set(*event_id),
                    kind: ActiveValue::Set(row.kind.as_str().to_string()),
                    item_name: ActiveValue::Set(row.item_name.clone()),
                    quantity: ActiveValue::Set(row.quantity),
                    instructions: ActiveValue::Set(row.instructions.clone()),
                });

            entity::prelude::OtherHardware::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::other_hardware::Column::Id)
                        .update_columns([
                            entity::other_hardware::Column::EventId,
                            entity::other_hardware::Column::Kind,
                            entity::other_hardware::Column::ItemName,
                            entity::other_hardware::Column::Quantity,
                            entity::other_hardware::Column::Instructions,
                        ])
                        .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }

    /// Ids of the hardware rows stored for the given events.
    pub async fn get_ids_by_event_ids(&self, event_ids: &[i64]) -> Result<Vec<i64>, DbErr> {
        let mut ids = Vec::new();

        for batch in event_ids.chunks(BATCH_SIZE) {
            let rows = entity::prelude::OtherHardware::find()
                .select_only()
                .column(entity::other_hardware::Column::Id)
                .filter(entity::other_hardware::Column::EventId.is_in(batch.iter().copied()))
                .into_tuple::<i64>()
                .all(self.db)
                .await?;
            ids.extend(rows);
        }

        Ok(ids)
    }

    pub async fn delete_many(&self, ids: &[i64]) -> Result<u64, DbErr> {
        let mut deleted = 0;

        for batch in ids.chunks(BATCH_SIZE) {
            deleted += entity::prelude::OtherHardware::delete_many()
                .filter(entity::other_hardware::Column::Id.is_in(batch.iter().copied()))
                .exec(self.db)
                .await?
                .rows_affected;
        }

        Ok(deleted)
    }

    pub async fn delete_by_event_ids(&self, event_ids: &[i64]) -> Result<u64, DbErr> {
        let mut deleted = 0;

        for batch in event_ids.chunks(BATCH_SIZE) {
            deleted += entity::prelude::OtherHardware::delete_many()
                .filter(entity::other_hardware::Column::EventId.is_in(batch.iter().copied()))
                .exec(self.db)
                .await?
                .rows_affected;
        }

        Ok(deleted)
    }
}
