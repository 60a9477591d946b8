use regex::Regex;
use std::sync::OnceLock;

/// Strip a leading `http://` or `https://` for display
pub fn remove_protocol(url: &str) -> String {
    static PROTOCOL_REGEX: OnceLock<Regex> = OnceLock::new();
    let protocol_regex =
        PROTOCOL_REGEX.get_or_init(|| Regex::new(r"(?i)^https?://").expect("Invalid protocol regex"));

    protocol_regex.replace(url, "").into_owned()
}

/// Join class fragments, skipping empty ones
pub fn class_names(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|class| class.trim())
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
