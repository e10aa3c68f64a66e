use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::ingest::IngestFixtures};

impl<'a> IngestFixtures<'a> {
    /// Insert a venue row.
    pub async fn insert_venue(
        &mut self,
        id: i32,
        name: &str,
        spelling: Option<&str>,
    ) -> Result<entity::venue::Model, TestError> {
        Ok(
            entity::prelude::Venue::insert(entity::venue::ActiveModel {
                id: ActiveValue::Set(id),
                name: ActiveValue::Set(name.to_string()),
                spelling: ActiveValue::Set(spelling.map(str::to_string)),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a series header with placeholder attributes.
    pub async fn insert_mock_series(
        &mut self,
        series_id: i64,
    ) -> Result<entity::series::Model, TestError> {
        let date = NaiveDate::from_ymd_opt(2024, 9, 3).unwrap();

        Ok(
            entity::prelude::Series::insert(entity::series::ActiveModel {
                id: ActiveValue::Set(series_id),
                name: ActiveValue::Set(format!("Series {}", series_id)),
                event_type: ActiveValue::Set("Lecture".to_string()),
                total_events: ActiveValue::Set(1),
                first_date: ActiveValue::Set(date),
                last_date: ActiveValue::Set(date),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an event of an existing series, one hour long.
    pub async fn insert_mock_event(
        &mut self,
        event_id: i64,
        series_id: i64,
        date: NaiveDate,
        start_time: NaiveTime,
    ) -> Result<entity::event::Model, TestError> {
        Ok(
            entity::prelude::Event::insert(entity::event::ActiveModel {
                id: ActiveValue::Set(event_id),
                series_id: ActiveValue::Set(series_id),
                reservation_id: ActiveValue::Set(event_id),
                date: ActiveValue::Set(date),
                start_time: ActiveValue::Set(start_time),
                end_time: ActiveValue::Set(start_time + chrono::Duration::hours(1)),
                event_name: ActiveValue::Set(format!("Event {}", event_id)),
                event_type: ActiveValue::Set("Lecture".to_string()),
                room_name: ActiveValue::Set("GH 1420".to_string()),
                venue_id: ActiveValue::Set(None),
                series_position: ActiveValue::Set(Some(1)),
                transform: ActiveValue::Set(None),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a series and one event of it in a single call.
    pub async fn insert_mock_series_with_event(
        &mut self,
        series_id: i64,
        event_id: i64,
        date: NaiveDate,
        start_time: NaiveTime,
    ) -> Result<entity::event::Model, TestError> {
        self.insert_mock_series(series_id).await?;
        self.insert_mock_event(event_id, series_id, date, start_time)
            .await
    }

    /// Insert a pending CAPTURE QC action for an existing event.
    pub async fn insert_mock_action(
        &mut self,
        action_id: i64,
        event_id: i64,
        start_time: NaiveTime,
    ) -> Result<entity::action::Model, TestError> {
        Ok(
            entity::prelude::Action::insert(entity::action::ActiveModel {
                id: ActiveValue::Set(action_id),
                event_id: ActiveValue::Set(event_id),
                action_type: ActiveValue::Set("CAPTURE QC".to_string()),
                sub_type: ActiveValue::Set(None),
                start_time: ActiveValue::Set(start_time),
                status: ActiveValue::Set("pending".to_string()),
                assigned_to: ActiveValue::Set(None),
                assigned_to_manual: ActiveValue::Set(false),
                completed_by: ActiveValue::Set(None),
                completed_time: ActiveValue::Set(None),
                notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a QC item for an existing action.
    pub async fn insert_mock_qc_item(
        &mut self,
        action_id: i64,
        qc_item_dict_id: i32,
    ) -> Result<entity::qc_item::Model, TestError> {
        Ok(
            entity::prelude::QcItem::insert(entity::qc_item::ActiveModel {
                action_id: ActiveValue::Set(action_id),
                qc_item_dict_id: ActiveValue::Set(qc_item_dict_id),
                status: ActiveValue::Set("na".to_string()),
                sn_ticket: ActiveValue::Set(None),
                waived: ActiveValue::Set(false),
                waived_reason: ActiveValue::Set(None),
                fail_mode: ActiveValue::Set(None),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
