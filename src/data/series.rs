use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::{data::BATCH_SIZE, model::event::SeriesSummary};

pub struct SeriesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeriesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or refreshes series headers. Every column is derived, so all are updated.
    pub async fn upsert_many(
        &self,
        series: &[SeriesSummary],
    ) -> Result<Vec<entity::series::Model>, DbErr> {
        let mut upserted = Vec::with_capacity(series.len());

        for batch in series.chunks(BATCH_SIZE) {
            let models = batch.iter().map(|summary| entity::series::ActiveModel {
                id: ActiveValue::Set(summary.id),
                name: ActiveValue::Set(summary.name.clone()),
                event_type: ActiveValue::Set(summary.event_type.as_str().to_string()),
                total_events: ActiveValue::Set(summary.total_events),
                first_date: ActiveValue::Set(summary.first_date),
                last_date: ActiveValue::Set(summary.last_date),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            });

            let models = entity::prelude::Series::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::series::Column::Id)
                        .update_columns([
                            entity::series::Column::Name,
                            entity::series::Column::EventType,
                            entity::series::Column::TotalEvents,
                            entity::series::Column::FirstDate,
                            entity::series::Column::LastDate,
                            entity::series::Column::UpdatedAt,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;
            upserted.extend(models);
        }

        Ok(upserted)
    }
}
