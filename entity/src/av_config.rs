use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "av_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: i64,
    pub handheld_mics: i32,
    pub lapel_mics: i32,
    pub clicker: bool,
    // Operator-entered through the dashboard; never written by ingestion updates.
    pub left_source: Option<String>,
    pub left_device: Option<String>,
    pub right_source: Option<String>,
    pub right_device: Option<String>,
    pub center_source: Option<String>,
    pub center_device: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
