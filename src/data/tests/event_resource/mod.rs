use super::*;
use crate::data::event_resource::EventResourceRepository;

mod upsert_many;
