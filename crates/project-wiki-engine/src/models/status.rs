use crate::i18n::Translate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifecycle state of a project.
///
/// Values outside the known set deserialize to [`ProjectStatus::Unknown`],
/// which never has a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Inactive,
    Maintained,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Active, Self::Inactive, Self::Maintained];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Maintained => "maintained",
            Self::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }

    fn translation_key(self) -> Option<&'static str> {
        match self {
            Self::Active => Some("status.active"),
            Self::Inactive => Some("status.inactive"),
            Self::Maintained => Some("status.maintained"),
            Self::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabel {
    pub label: String,
}

/// Status → label table for the language the translator was built for
pub fn status_labels(translator: &impl Translate) -> BTreeMap<ProjectStatus, StatusLabel> {
    ProjectStatus::ALL
        .into_iter()
        .filter_map(|status| {
            let key = status.translation_key()?;
            Some((
                status,
                StatusLabel {
                    label: translator.t(key),
                },
            ))
        })
        .collect()
}
