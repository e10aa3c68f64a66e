/// Status given to QC items on first insert.
pub const DEFAULT_QC_STATUS: &str = "na";

/// A checklist entry binding one action to one QC dictionary definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QcItem {
    pub action_id: i64,
    pub qc_item_dict_id: i32,
}
