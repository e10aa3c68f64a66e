/// Recording type used when the resource name carries none.
pub const DEFAULT_RECORDING_TYPE: &str = "Standard";

/// Recording type named after the first `-` of the resource name, e.g. `Recording - CANVAS`.
pub fn recording_type(item_name: &str) -> String {
    item_name
        .split_once('-')
        .map(|(_, kind)| kind.trim())
        .filter(|kind| !kind.is_empty())
        .unwrap_or(DEFAULT_RECORDING_TYPE)
        .to_string()
}
