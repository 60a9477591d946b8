/// Section tag → funding source label.
const SECTION_FUNDING_LABELS: &[(&str, &str)] = &[
    ("pse", "PSE"),
    ("grant", "Grant"),
    ("collaboration", "Collaboration"),
    ("archived", "Archived"),
];

/// Funding label for a project section, `None` for unknown sections
pub fn funding_label(section: &str) -> Option<&'static str> {
    SECTION_FUNDING_LABELS
        .iter()
        .find(|(key, _)| *key == section)
        .map(|(_, label)| *label)
}
