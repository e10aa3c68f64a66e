use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub series_id: i64,
    pub reservation_id: i64,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub event_name: String,
    pub event_type: String,
    pub room_name: String,
    pub venue_id: Option<i32>,
    pub series_position: Option<i32>,
    pub transform: Option<String>,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::series::Entity",
        from = "Column::SeriesId",
        to = "super::series::Column::Id"
    )]
    Series,
    #[sea_orm(
        belongs_to = "super::venue::Entity",
        from = "Column::VenueId",
        to = "super::venue::Column::Id"
    )]
    Venue,
    #[sea_orm(has_many = "super::action::Entity")]
    Action,
    #[sea_orm(has_many = "super::event_resource::Entity")]
    EventResource,
    #[sea_orm(has_many = "super::other_hardware::Entity")]
    OtherHardware,
    #[sea_orm(has_one = "super::av_config::Entity")]
    AvConfig,
    #[sea_orm(has_one = "super::hybrid::Entity")]
    Hybrid,
    #[sea_orm(has_one = "super::recording::Entity")]
    Recording,
}

impl Related<super::series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Series.def()
    }
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl Related<super::action::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Action.def()
    }
}

impl Related<super::av_config::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AvConfig.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
