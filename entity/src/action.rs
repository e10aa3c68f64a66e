use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "action")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub event_id: i64,
    pub action_type: String,
    pub sub_type: Option<String>,
    pub start_time: Time,
    pub status: String,
    pub assigned_to: Option<String>,
    pub assigned_to_manual: bool,
    pub completed_by: Option<String>,
    pub completed_time: Option<DateTime>,
    pub notes: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,
    #[sea_orm(has_many = "super::qc_item::Entity")]
    QcItem,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::qc_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QcItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
