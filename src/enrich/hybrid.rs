use std::sync::OnceLock;

use regex::Regex;

use crate::model::enrichment::HybridConfig;

/// Link posted when instructions carry only a bare meeting id.
const CANONICAL_MEETING_URL: &str = "https://zoom.us/j/";

fn link_re() -> &'static Regex {
    static LINK_RE: OnceLock<Regex> = OnceLock::new();
    LINK_RE.get_or_init(|| {
        Regex::new(r"https://(?:[\w-]+\.)*zoom\.us/j/(\d+)(?:\?pwd=[\w.\-]+)?")
            .expect("valid meeting link regex")
    })
}

fn meeting_id_re() -> &'static Regex {
    static MEETING_ID_RE: OnceLock<Regex> = OnceLock::new();
    MEETING_ID_RE.get_or_init(|| {
        Regex::new(r"(?i)meeting\s*id\s*:?\s*(\d[\d \t-]*\d)").expect("valid meeting id regex")
    })
}

fn passcode_re() -> &'static Regex {
    static PASSCODE_RE: OnceLock<Regex> = OnceLock::new();
    PASSCODE_RE
        .get_or_init(|| Regex::new(r"(?i)pass(?:code|word)\s*:").expect("valid passcode regex"))
}

/// Extracts meeting details from the free-text instructions of a web-conference resource.
///
/// The meeting id comes from a `Meeting ID:` line, else from the link. Without an explicit
/// link, one is built from the id. Lines that carried the link, the id or a passcode are
/// dropped from the instructions shown to operators.
pub fn parse_hybrid(instructions: Option<&str>) -> HybridConfig {
    let text = instructions.unwrap_or_default();

    let link = link_re().captures(text);
    let meeting_link = link.as_ref().map(|captures| captures[0].to_string());
    let meeting_id = meeting_id_re()
        .captures(text)
        .map(|captures| captures[1].chars().filter(char::is_ascii_digit).collect::<String>())
        .or_else(|| link.as_ref().map(|captures| captures[1].to_string()));
    let meeting_link = meeting_link.or_else(|| {
        meeting_id
            .as_ref()
            .map(|id| format!("{}{}", CANONICAL_MEETING_URL, id))
    });

    let remaining = text
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && !link_re().is_match(line)
                && !meeting_id_re().is_match(line)
                && !passcode_re().is_match(line)
        })
        .collect::<Vec<_>>()
        .join("\n");

    HybridConfig {
        meeting_id,
        meeting_link,
        instructions: (!remaining.is_empty()).then_some(remaining),
    }
}
