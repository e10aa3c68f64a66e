use super::*;
use crate::data::venue::VenueRepository;

mod all;
