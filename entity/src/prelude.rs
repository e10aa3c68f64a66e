pub use super::action::Entity as Action;
pub use super::av_config::Entity as AvConfig;
pub use super::event::Entity as Event;
pub use super::event_resource::Entity as EventResource;
pub use super::hybrid::Entity as Hybrid;
pub use super::other_hardware::Entity as OtherHardware;
pub use super::qc_item::Entity as QcItem;
pub use super::recording::Entity as Recording;
pub use super::series::Entity as Series;
pub use super::venue::Entity as Venue;
