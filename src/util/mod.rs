//! Identity and wall-clock helpers shared by every pipeline stage.

pub mod identity;
pub mod time;
