pub use sea_orm_migration::prelude::*;

mod m20251017_000001_venue;
mod m20251017_000002_series;
mod m20251017_000003_event;
mod m20251017_000004_event_resource;
mod m20251017_000005_event_detail;
mod m20251017_000006_action;
mod m20251017_000007_qc_item;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_venue::Migration),
            Box::new(m20251017_000002_series::Migration),
            Box::new(m20251017_000003_event::Migration),
            Box::new(m20251017_000004_event_resource::Migration),
            Box::new(m20251017_000005_event_detail::Migration),
            Box::new(m20251017_000006_action::Migration),
            Box::new(m20251017_000007_qc_item::Migration),
        ]
    }
}
