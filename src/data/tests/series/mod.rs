use super::*;
use crate::data::series::SeriesRepository;
