use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct VenueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VenueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every known venue, ordered by id.
    pub async fn all(&self) -> Result<Vec<entity::venue::Model>, DbErr> {
        entity::prelude::Venue::find()
            .order_by_asc(entity::venue::Column::Id)
            .all(self.db)
            .await
    }
}
