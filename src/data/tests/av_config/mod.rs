use super::*;
use crate::{data::av_config::AvConfigRepository, model::enrichment::AvConfig};

mod upsert_many;
