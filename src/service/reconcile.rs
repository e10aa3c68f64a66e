//! Reconciles one run's derived records for a target date against storage.
//!
//! Steps run in dependency order: series, stale events, events, event children, AV config,
//! actions, QC items. Every step is idempotent so a failed run can be repeated in full.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::{
    data::{
        action::ActionRepository, av_config::AvConfigRepository, event::EventRepository,
        event_resource::EventResourceRepository, hybrid::HybridRepository,
        other_hardware::OtherHardwareRepository, qc_item::QcItemRepository,
        recording::RecordingRepository, series::SeriesRepository,
    },
    error::Error,
    model::{
        action::Action,
        enrichment::{AvConfig, EnrichedEvent},
        event::SeriesSummary,
        qc::QcItem,
        report::IngestReport,
    },
    rules::qc::{derive_qc_items, QcContext},
    util::identity::stable_id,
};

/// Everything derived for one target date, ready to persist.
pub struct RunSet {
    pub date: NaiveDate,
    pub series: Vec<SeriesSummary>,
    pub events: Vec<EnrichedEvent>,
    pub actions: Vec<Action>,
}

pub struct Reconciler<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> Reconciler<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Brings storage for `run.date` in line with `run`.
    ///
    /// # Arguments
    /// - `run`: Derived records for the target date
    /// - `protected`: Event ids that must survive even when absent from the run
    /// - `now`: Local wall-clock time; stored events that already started are protected too
    ///
    /// # Notes
    /// - Pass a transaction as the connection to make the whole reconciliation atomic
    pub async fn reconcile(
        &self,
        run: &RunSet,
        protected: &HashSet<i64>,
        now: NaiveDateTime,
    ) -> Result<IngestReport, Error> {
        let mut report = IngestReport::default();

        report.series_upserted = SeriesRepository::new(self.db)
            .upsert_many(&run.series)
            .await?
            .len();

        let run_event_ids: Vec<i64> = run.events.iter().map(|e| e.event.id).collect();
        let (events_deleted, actions_deleted, qc_deleted) = self
            .delete_stale_events(run.date, &run_event_ids, protected, now)
            .await?;
        report.events_deleted = events_deleted;
        report.actions_deleted += actions_deleted;
        report.qc_items_deleted += qc_deleted;

        let events: Vec<_> = run.events.iter().map(|e| e.event.clone()).collect();
        report.events_upserted = EventRepository::new(self.db)
            .upsert_many(&events)
            .await?
            .len();

        self.sync_event_children(&run.events, &run_event_ids).await?;
        let stored_av = self.sync_av_configs(&run.events).await?;

        let (inserted, actions_deleted, qc_deleted) =
            self.sync_actions(&run.actions, &run_event_ids).await?;
        report.actions_inserted = inserted;
        report.actions_deleted += actions_deleted;
        report.qc_items_deleted += qc_deleted;

        let (qc_inserted, qc_deleted) = self
            .sync_qc_items(run, &stored_av)
            .await?;
        report.qc_items_inserted = qc_inserted;
        report.qc_items_deleted += qc_deleted;

        Ok(report)
    }

    /// Deletes stored events of the date that the run no longer produces, children first.
    ///
    /// # Returns
    /// - `(events, actions, qc_items)` deleted
    async fn delete_stale_events(
        &self,
        date: NaiveDate,
        run_event_ids: &[i64],
        protected: &HashSet<i64>,
        now: NaiveDateTime,
    ) -> Result<(u64, u64, u64), Error> {
        let event_repo = EventRepository::new(self.db);
        let action_repo = ActionRepository::new(self.db);
        let qc_repo = QcItemRepository::new(self.db);

        let run_ids: HashSet<i64> = run_event_ids.iter().copied().collect();
        let stale: Vec<i64> = event_repo
            .get_by_date(date)
            .await?
            .into_iter()
            .filter(|event| !run_ids.contains(&event.id) && !protected.contains(&event.id))
            .filter(|event| event.date.and_time(event.start_time) > now)
            .map(|event| event.id)
            .collect();

        if stale.is_empty() {
            return Ok((0, 0, 0));
        }

        let stale_actions = action_repo.get_ids_by_event_ids(&stale).await?;
        let qc_deleted = qc_repo.delete_by_action_ids(&stale_actions).await?;
        let actions_deleted = action_repo.delete_many(&stale_actions).await?;

        EventResourceRepository::new(self.db)
            .delete_by_event_ids(&stale)
            .await?;
        HybridRepository::new(self.db).delete_by_event_ids(&stale).await?;
        AvConfigRepository::new(self.db)
            .delete_by_event_ids(&stale)
            .await?;
        OtherHardwareRepository::new(self.db)
            .delete_by_event_ids(&stale)
            .await?;
        RecordingRepository::new(self.db)
            .delete_by_event_ids(&stale)
            .await?;
        let events_deleted = event_repo.delete_many(&stale).await?;

        info!(
            date = %date,
            events = events_deleted,
            actions = actions_deleted,
            qc_items = qc_deleted,
            "Removed events no longer present upstream"
        );

        Ok((events_deleted, actions_deleted, qc_deleted))
    }

    /// Upserts resource lines, hybrid, recording and hardware rows present in the run and
    /// removes those of run events that are no longer produced.
    async fn sync_event_children(
        &self,
        events: &[EnrichedEvent],
        run_event_ids: &[i64],
    ) -> Result<(), Error> {
        let resource_repo = EventResourceRepository::new(self.db);
        let hybrid_repo = HybridRepository::new(self.db);
        let recording_repo = RecordingRepository::new(self.db);
        let hardware_repo = OtherHardwareRepository::new(self.db);

        let mut resources = Vec::new();
        for enriched in events {
            let event = &enriched.event;
            for (index, resource) in event.resources.iter().enumerate() {
                let id = stable_id(&[
                    event.id.to_string(),
                    resource.item_name.clone(),
                    index.to_string(),
                ])?;
                resources.push((id, event.id, resource.clone()));
            }
        }
        let kept: HashSet<i64> = resources.iter().map(|(id, _, _)| *id).collect();
        let stale: Vec<i64> = resource_repo
            .get_ids_by_event_ids(run_event_ids)
            .await?
            .into_iter()
            .filter(|id| !kept.contains(id))
            .collect();
        resource_repo.delete_many(&stale).await?;
        resource_repo.upsert_many(&resources).await?;

        let (hybrids, without_hybrid): (Vec<_>, Vec<_>) =
            events.iter().partition(|enriched| enriched.hybrid.is_some());
        let hybrids: Vec<_> = hybrids
            .into_iter()
            .filter_map(|e| e.hybrid.clone().map(|hybrid| (e.event.id, hybrid)))
            .collect();
        let without_hybrid: Vec<i64> = without_hybrid.iter().map(|e| e.event.id).collect();
        hybrid_repo.delete_by_event_ids(&without_hybrid).await?;
        hybrid_repo.upsert_many(&hybrids).await?;

        let recordings: Vec<_> = events
            .iter()
            .filter_map(|e| e.recording.clone().map(|recording| (e.event.id, recording)))
            .collect();
        let without_recording: Vec<i64> = events
            .iter()
            .filter(|e| e.recording.is_none())
            .map(|e| e.event.id)
            .collect();
        recording_repo.delete_by_event_ids(&without_recording).await?;
        recording_repo.upsert_many(&recordings).await?;

        let hardware: Vec<_> = events
            .iter()
            .flat_map(|e| e.other_hardware.iter().map(|row| (e.event.id, row.clone())))
            .collect();
        let kept: HashSet<i64> = hardware.iter().map(|(_, row)| row.id).collect();
        let stale: Vec<i64> = hardware_repo
            .get_ids_by_event_ids(run_event_ids)
            .await?
            .into_iter()
            .filter(|id| !kept.contains(id))
            .collect();
        hardware_repo.delete_many(&stale).await?;
        hardware_repo.upsert_many(&hardware).await?;

        debug!(
            resources = resources.len(),
            hybrids = hybrids.len(),
            recordings = recordings.len(),
            hardware = hardware.len(),
            "Synchronized event sub-records"
        );

        Ok(())
    }

    /// Upserts derived AV columns and returns the stored configs keyed by event id.
    async fn sync_av_configs(
        &self,
        events: &[EnrichedEvent],
    ) -> Result<HashMap<i64, AvConfig>, Error> {
        let configs: Vec<_> = events
            .iter()
            .map(|e| (e.event.id, e.av_config.clone()))
            .collect();

        let stored = AvConfigRepository::new(self.db)
            .upsert_many(&configs)
            .await?
            .into_iter()
            .map(|model| (model.event_id, AvConfig::from(model)))
            .collect();

        Ok(stored)
    }

    /// Removes actions of run events that the rules no longer produce, then upserts the run's
    /// actions.
    ///
    /// # Returns
    /// - `(inserted, actions_deleted, qc_items_deleted)`
    async fn sync_actions(
        &self,
        actions: &[Action],
        run_event_ids: &[i64],
    ) -> Result<(usize, u64, u64), Error> {
        let action_repo = ActionRepository::new(self.db);
        let qc_repo = QcItemRepository::new(self.db);

        let existing: HashSet<i64> = action_repo
            .get_ids_by_event_ids(run_event_ids)
            .await?
            .into_iter()
            .collect();
        let run_ids: HashSet<i64> = actions.iter().map(|action| action.id).collect();

        let stale: Vec<i64> = existing.difference(&run_ids).copied().collect();
        let qc_deleted = qc_repo.delete_by_action_ids(&stale).await?;
        let actions_deleted = action_repo.delete_many(&stale).await?;

        let inserted = run_ids.difference(&existing).count();
        action_repo.upsert_many(actions).await?;

        Ok((inserted, actions_deleted, qc_deleted))
    }

    /// Generates the checklist of every run action, inserts missing items and removes items
    /// the rules no longer produce.
    ///
    /// # Returns
    /// - `(inserted, deleted)`
    async fn sync_qc_items(
        &self,
        run: &RunSet,
        stored_av: &HashMap<i64, AvConfig>,
    ) -> Result<(u64, u64), Error> {
        let qc_repo = QcItemRepository::new(self.db);
        let actions = &run.actions;
        let by_event: HashMap<i64, &EnrichedEvent> =
            run.events.iter().map(|e| (e.event.id, e)).collect();
        let series_events: HashMap<i64, i32> = run
            .series
            .iter()
            .map(|series| (series.id, series.total_events))
            .collect();

        let mut produced = Vec::new();
        for action in actions {
            let enriched = *by_event.get(&action.event_id).ok_or_else(|| {
                Error::InternalError(format!(
                    "action {} refers to event {} outside the run",
                    action.id, action.event_id
                ))
            })?;
            let series_events = *series_events
                .get(&enriched.event.series_id)
                .ok_or_else(|| {
                    Error::InternalError(format!(
                        "event {} refers to series {} outside the run",
                        enriched.event.id, enriched.event.series_id
                    ))
                })?;
            let context = QcContext {
                enriched,
                av: stored_av
                    .get(&action.event_id)
                    .unwrap_or(&enriched.av_config),
                series_events,
            };
            produced.extend(derive_qc_items(action, &context));
        }

        let action_ids: Vec<i64> = actions.iter().map(|action| action.id).collect();
        let produced_set: HashSet<QcItem> = produced.iter().copied().collect();
        let stale: Vec<QcItem> = qc_repo
            .get_by_action_ids(&action_ids)
            .await?
            .into_iter()
            .map(|item| QcItem {
                action_id: item.action_id,
                qc_item_dict_id: item.qc_item_dict_id,
            })
            .filter(|item| !produced_set.contains(item))
            .collect();

        let deleted = qc_repo.delete_pairs(&stale).await?;
        let inserted = qc_repo.insert_missing(&produced).await?;

        Ok((inserted, deleted))
    }
}
