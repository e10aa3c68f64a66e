use super::*;
use crate::{data::qc_item::QcItemRepository, model::qc::QcItem};

mod delete_pairs;
mod insert_missing;

fn item(action_id: i64, qc_item_dict_id: i32) -> QcItem {
    QcItem {
        action_id,
        qc_item_dict_id,
    }
}
