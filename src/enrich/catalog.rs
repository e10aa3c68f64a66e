/// What a resource line asks operations to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    WebConference,
    StaffAssistance,
    Recording,
    HandheldMic,
    LapelMic,
    PollingClickers,
    Laptop,
    InteractiveDisplay,
    PresentationClicker,
}

/// Lower-case substrings identifying each kind, checked in order.
const CATALOG: &[(&[&str], ResourceKind)] = &[
    (&["web conference"], ResourceKind::WebConference),
    (&["staff assistance"], ResourceKind::StaffAssistance),
    (&["recording"], ResourceKind::Recording),
    (&["handheld"], ResourceKind::HandheldMic),
    (&["lapel"], ResourceKind::LapelMic),
    (&["polling", "turningpoint"], ResourceKind::PollingClickers),
    (&["laptop"], ResourceKind::Laptop),
    (&["interactive display", "mondopad"], ResourceKind::InteractiveDisplay),
    (&["clicker"], ResourceKind::PresentationClicker),
];

/// Classifies a resource name; the first catalog entry with a matching substring wins.
pub fn classify(item_name: &str) -> Option<ResourceKind> {
    let name = item_name.to_lowercase();

    CATALOG
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| name.contains(needle)))
        .map(|(_, kind)| *kind)
}
