use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    data::BATCH_SIZE,
    model::qc::{QcItem, DEFAULT_QC_STATUS},
};

pub struct QcItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QcItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts checklist items that do not exist yet; existing items are left untouched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of items actually inserted
    ///
    /// # Notes
    /// - Action ids must already exist in the action table due to foreign key constraint
    pub async fn insert_missing(&self, items: &[QcItem]) -> Result<u64, DbErr> {
        let mut inserted = 0;

        for batch in items.chunks(BATCH_SIZE) {
            let models = batch.iter().map(|item| entity::qc_item::ActiveModel {
                action_id: ActiveValue::Set(item.action_id),
                qc_item_dict_id: ActiveValue::Set(item.qc_item_dict_id),
                status: ActiveValue::Set(DEFAULT_QC_STATUS.to_string()),
                sn_ticket: ActiveValue::Set(None),
                waived: ActiveValue::Set(false),
                waived_reason: ActiveValue::Set(None),
                fail_mode: ActiveValue::Set(None),
            });

            inserted += entity::prelude::QcItem::insert_many(models)
                .on_conflict(
                    OnConflict::columns([
                        entity::qc_item::Column::ActionId,
                        entity::qc_item::Column::QcItemDictId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(inserted)
    }

    /// Items stored for the given actions, ordered by action then dictionary id.
    pub async fn get_by_action_ids(
        &self,
        action_ids: &[i64],
    ) -> Result<Vec<entity::qc_item::Model>, DbErr> {
        let mut items = Vec::new();

        for batch in action_ids.chunks(BATCH_SIZE) {
            let rows = entity::prelude::QcItem::find()
                .filter(entity::qc_item::Column::ActionId.is_in(batch.iter().copied()))
                .order_by_asc(entity::qc_item::Column::ActionId)
                .order_by_asc(entity::qc_item::Column::QcItemDictId)
                .all(self.db)
                .await?;
            items.extend(rows);
        }

        Ok(items)
    }

    /// Deletes specific `(action, dictionary id)` pairs.
    pub async fn delete_pairs(&self, items: &[QcItem]) -> Result<u64, DbErr> {
        let mut deleted = 0;

        for batch in items.chunks(BATCH_SIZE) {
            let condition = batch.iter().fold(Condition::any(), |condition, item| {
                condition.add(
                    Condition::all()
                        .add(entity::qc_item::Column::ActionId.eq(item.action_id))
                        .add(entity::qc_item::Column::QcItemDictId.eq(item.qc_item_dict_id)),
                )
            });

            deleted += entity::prelude::QcItem::delete_many()
                .filter(condition)
                .exec(self.db)
                .await?
                .rows_affected;
        }

        Ok(deleted)
    }

    /// Deletes every item belonging to the given actions.
    pub async fn delete_by_action_ids(&self, action_ids: &[i64]) -> Result<u64, DbErr> {
        let mut deleted = 0;

        for batch in action_ids.chunks(BATCH_SIZE) {
            deleted += entity::prelude::QcItem::delete_many()
                .filter(entity::qc_item::Column::ActionId.is_in(batch.iter().copied()))
                .exec(self.db)
                .await?
                .rows_affected;
        }

        Ok(deleted)
    }
}
