use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

use crate::{data::BATCH_SIZE, model::event::Resource};

pub struct EventResourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventResourceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or refreshes resource lines.
    ///
    /// # Arguments
    /// - `resources`: Tuples of (row id, event id, resource line)
    pub async fn upsert_many(&self, resources: &[(i64, i64, Resource)]) -> Result<(), DbErr> {
        for batch in resources.chunks(BATCH_SIZE) {
            let models = batch
                .iter()
                .map(|(id, event_id, resource)| entity::event_resource::ActiveModel {
                    id: ActiveValue::Set(*id),
                    event_id: ActiveValue::Set(*event_id),
                    item_name: ActiveValue::Set(resource.item_name.clone()),
                    quantity: ActiveValue::Set(resource.quantity),
                    instruction: ActiveValue::Set(resource.instruction.clone()),
                });

            entity::prelude::EventResource::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::event_resource::Column::Id)
                        .update_columns([
                            entity::event_resource::Column::EventId,
                            entity::event_resource::Column::ItemName,
                            entity::event_resource::Column::Quantity,
                            entity::event_resource::Column::Instruction,
                        ])
                        .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }

    /// Ids of the resource lines stored for the given events.
    pub async fn get_ids_by_event_ids(&self, event_ids: &[i64]) -> Result<Vec<i64>, DbErr> {
        let mut ids = Vec::new();

        for batch in event_ids.chunks(BATCH_SIZE) {
            let rows = entity::prelude::EventResource::find()
                .select_only()
                .column(entity::event_resource::Column::Id)
                .filter(entity::event_resource::Column::EventId.is_in(batch.iter().copied()))
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
            deleted += entity::prelude::EventResource::delete_many()
                .filter(entity::event_resource::Column::Id.is_in(batch.iter().copied()))
                .exec(self.db)
                .await?
                .rows_affected;
        }

        Ok(deleted)
    }

    pub async fn delete_by_event_ids(&self, event_ids: &[i64]) -> Result<u64, DbErr> {
        let mut deleted = 0;

        for batch in event_ids.chunks(BATCH_SIZE) {
            deleted += entity::prelude::EventResource::delete_many()
                .filter(entity::event_resource::Column::EventId.is_in(batch.iter().copied()))
                .exec(self.db)
                .await?
                .rows_affected;
        }

        Ok(deleted)
    }
}
