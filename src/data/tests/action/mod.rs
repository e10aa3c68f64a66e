use super::*;
use crate::{
    data::action::ActionRepository,
    model::action::{Action, ActionSubType, ActionType},
};

mod delete_many;
mod upsert_many;
