pub mod prelude;

pub mod action;
pub mod av_config;
pub mod event;
pub mod event_resource;
pub mod hybrid;
pub mod other_hardware;
pub mod qc_item;
pub mod recording;
pub mod series;
pub mod venue;
