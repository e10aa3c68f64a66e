use crate::model::event::Event;

/// Video-conference details of a hybrid event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HybridConfig {
    pub meeting_id: Option<String>,
    pub meeting_link: Option<String>,
    pub instructions: Option<String>,
}

/// Audio/visual configuration; every event has one.
///
/// Microphone counts and the clicker flag are derived from resources. The source and device
/// fields are entered by operators on the dashboard and only ever read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AvConfig {
    pub handheld_mics: i32,
    pub lapel_mics: i32,
    pub clicker: bool,
    pub left_source: Option<String>,
    pub left_device: Option<String>,
    pub right_source: Option<String>,
    pub right_device: Option<String>,
    pub center_source: Option<String>,
    pub center_device: Option<String>,
}

impl AvConfig {
    pub fn has_microphones(&self) -> bool {
        self.handheld_mics > 0 || self.lapel_mics > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HardwareKind {
    Laptop,
    InteractiveDisplay,
    PollingClickers,
}

impl HardwareKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Laptop => "Laptop",
            Self::InteractiveDisplay => "Interactive Display",
            Self::PollingClickers => "Polling Clickers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherHardware {
    pub id: i64,
    pub kind: HardwareKind,
    pub item_name: String,
    pub quantity: i32,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingConfig {
    pub recording_type: String,
    pub instructions: Option<String>,
}

impl RecordingConfig {
    /// Canvas recordings are posted straight to the course site.
    pub fn is_canvas(&self) -> bool {
        self.recording_type.to_ascii_lowercase().contains("canvas")
    }
}

/// An event together with every sub-record derived from its resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedEvent {
    pub event: Event,
    pub hybrid: Option<HybridConfig>,
    pub av_config: AvConfig,
    pub other_hardware: Vec<OtherHardware>,
    pub recording: Option<RecordingConfig>,
    pub staff_assistance: bool,
}
