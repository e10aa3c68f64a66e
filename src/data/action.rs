use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    data::BATCH_SIZE,
    model::action::{Action, DEFAULT_ACTION_STATUS},
};

pub struct ActionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts derived actions, refreshing only rules-engine owned columns on conflict.
    ///
    /// Operator columns (status, assignment, completion, notes) and `created_at` are set on
    /// first insert only and never touched again by ingestion.
    ///
    /// # Notes
    /// - Event ids must already exist in the event table due to foreign key constraint
    pub async fn upsert_many(&self, actions: &[Action]) -> Result<(), DbErr> {
        for batch in actions.chunks(BATCH_SIZE) {
            let models = batch.iter().map(|action| entity::action::ActiveModel {
                id: ActiveValue::Set(action.id),
                event_id: ActiveValue::Set(action.event_id),
                action_type: ActiveValue::Set(action.action_type.as_str().to_string()),
                sub_type: ActiveValue::Set(
                    action.sub_type.map(|sub_type| sub_type.as_str().to_string()),
                ),
                start_time: ActiveValue::Set(action.start_time),
                status: ActiveValue::Set(DEFAULT_ACTION_STATUS.to_string()),
                assigned_to: ActiveValue::Set(None),
                assigned_to_manual: ActiveValue::Set(false),
                completed_by: ActiveValue::Set(None),
                completed_time: ActiveValue::Set(None),
                notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            });

            entity::prelude::Action::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::action::Column::Id)
                        .update_columns([
                            entity::action::Column::EventId,
                            entity::action::Column::ActionType,
                            entity::action::Column::SubType,
                            entity::action::Column::StartTime,
                        ])
                        .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }

    /// Ids of the actions stored for the given events.
    pub async fn get_ids_by_event_ids(&self, event_ids: &[i64]) -> Result<Vec<i64>, DbErr> {
        let mut ids = Vec::new();

        for batch in event_ids.chunks(BATCH_SIZE) {
            let rows = entity::prelude::Action::find()
                .select_only()
                .column(entity::action::Column::Id)
                .filter(entity::action::Column::EventId.is_in(batch.iter().copied()))
                .into_tuple::<i64>()
                .all(self.db)
                .await?;
            ids.extend(rows);
        }

        Ok(ids)
    }

    /// Actions stored for the given events, ordered by start time then id.
    pub async fn get_by_event_ids(
        &self,
        event_ids: &[i64],
    ) -> Result<Vec<entity::action::Model>, DbErr> {
        let mut actions = Vec::new();

        for batch in event_ids.chunks(BATCH_SIZE) {
            let rows = entity::prelude::Action::find()
                .filter(entity::action::Column::EventId.is_in(batch.iter().copied()))
                .order_by_asc(entity::action::Column::StartTime)
                .order_by_asc(entity::action::Column::Id)
                .all(self.db)
                .await?;
            actions.extend(rows);
        }

        Ok(actions)
    }

    /// Deletes actions by id.
    ///
    /// # Notes
    /// - QC items of the actions must be removed first due to foreign key constraint
    pub async fn delete_many(&self, ids: &[i64]) -> Result<u64, DbErr> {
        let mut deleted = 0;

        for batch in ids.chunks(BATCH_SIZE) {
            deleted += entity::prelude::Action::delete_many()
                .filter(entity::action::Column::Id.is_in(batch.iter().copied()))
                .exec(self.db)
                .await?
                .rows_affected;
        }

        Ok(deleted)
    }
}
