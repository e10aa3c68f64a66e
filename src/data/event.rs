use chrono::{NaiveDate, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{data::BATCH_SIZE, model::event::Event};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or refreshes events. Events carry no operator-owned columns, so every column
    /// is overwritten on conflict.
    ///
    /// # Notes
    /// - Series ids must already exist in the series table due to foreign key constraint
    pub async fn upsert_many(&self, events: &[Event]) -> Result<Vec<entity::event::Model>, DbErr> {
        let mut upserted = Vec::with_capacity(events.len());

        for batch in events.chunks(BATCH_SIZE) {
            let models = batch.iter().map(|event| entity::event::ActiveModel {
                id: ActiveValue::Set(event.id),
                series_id: ActiveValue::Set(event.series_id),
                reservation_id: ActiveValue::Set(event.reservation_id),
                date: ActiveValue::Set(event.date),
                start_time: ActiveValue::Set(event.start_time),
                end_time: ActiveValue::Set(event.end_time),
                event_name: ActiveValue::Set(event.event_name.clone()),
                event_type: ActiveValue::Set(event.event_type.as_str().to_string()),
                room_name: ActiveValue::Set(event.room_name.clone()),
                venue_id: ActiveValue::Set(event.venue_id),
                series_position: ActiveValue::Set(event.series_position),
                transform: ActiveValue::Set(
                    event.transform.map(|transform| transform.as_str().to_string()),
                ),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            });

            let models = entity::prelude::Event::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::event::Column::Id)
                        .update_columns([
                            entity::event::Column::SeriesId,
                            entity::event::Column::ReservationId,
                            entity::event::Column::Date,
                            entity::event::Column::StartTime,
                            entity::event::Column::EndTime,
                            entity::event::Column::EventName,
                            entity::event::Column::EventType,
                            entity::event::Column::RoomName,
                            entity::event::Column::VenueId,
                            entity::event::Column::SeriesPosition,
                            entity::event::Column::Transform,
                            entity::event::Column::UpdatedAt,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;
            upserted.extend(models);
        }

        Ok(upserted)
    }

    /// Events stored for a date, ordered by start time then id.
    pub async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::Date.eq(date))
            .order_by_asc(entity::event::Column::StartTime)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes events by id.
    ///
    /// # Notes
    /// - Rows referencing the events (actions, resources, sub-records) must be removed first
    pub async fn delete_many(&self, event_ids: &[i64]) -> Result<u64, DbErr> {
        let mut deleted = 0;

        for batch in event_ids.chunks(BATCH_SIZE) {
            deleted += entity::prelude::Event::delete_many()
                .filter(entity::event::Column::Id.is_in(batch.iter().copied()))
                .exec(self.db)
                .await?
                .rows_affected;
        }

        Ok(deleted)
    }
}
