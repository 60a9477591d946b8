use super::status::ProjectStatus;
use crate::i18n::BASE_LANG;
use pulldown_cmark::{Options, Parser, html};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A cataloged project as stored in the content store.
///
/// Field names follow the camelCase keys of the JSON records. Every field
/// except `id` and `name` may be missing from a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_brand_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub project_status: ProjectStatus,
    pub name: String,
    #[serde(default)]
    pub content: BTreeMap<String, ProjectContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub tags: ProjectTags,
}

/// Per-language text for a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tldr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTags {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub built_with: Vec<String>,
}

/// Treats an empty string the same as a missing value.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Project {
    /// Banner image filename, if one is set
    pub fn banner_image(&self) -> Option<&str> {
        present(&self.image)
    }

    pub fn previous_brand_image(&self) -> Option<&str> {
        present(&self.previous_brand_image)
    }

    /// Text shown over a missing banner: `imageAlt` when set, else the name
    pub fn display_name(&self) -> &str {
        present(&self.image_alt).unwrap_or(&self.name)
    }

    pub fn license(&self) -> Option<&str> {
        present(&self.license)
    }

    pub fn website(&self) -> Option<&str> {
        present(&self.links.website)
    }

    pub fn built_with(&self) -> &[String] {
        &self.tags.built_with
    }

    /// Content block for `lang`, falling back to the base language
    pub fn content_for(&self, lang: &str) -> Option<&ProjectContent> {
        self.content
            .get(lang)
            .or_else(|| self.content.get(BASE_LANG))
    }
}

impl ProjectContent {
    /// Render the markdown description to HTML
    pub fn description_html(&self) -> Option<String> {
        let markdown = present(&self.description)?;

        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(markdown, options);
        let mut output = String::new();
        html::push_html(&mut output, parser);
        Some(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal_record() -> &'static str {
        r#"{ "id": "zk-kit", "name": "ZK-Kit" }"#
    }

    #[test]
    fn test_minimal_record_defaults_optional_fields() {
        let project: Project = serde_json::from_str(minimal_record()).unwrap();

        assert_eq!(project.id, "zk-kit");
        assert_eq!(project.banner_image(), None);
        assert_eq!(project.license(), None);
        assert_eq!(project.website(), None);
        assert!(project.built_with().is_empty());
        assert_eq!(project.project_status, ProjectStatus::Unknown);
    }

    #[test]
    fn test_camel_case_fields_are_read() {
        let json = r#"{
            "id": "semaphore",
            "name": "Semaphore",
            "image": "semaphore.webp",
            "previousBrandImage": "semaphore-old.webp",
            "imageAlt": "Semaphore protocol",
            "section": "pse",
            "projectStatus": "active",
            "license": "MIT",
            "links": { "website": "https://semaphore.pse.dev" },
            "tags": { "builtWith": ["circom", "snarkjs"] }
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.banner_image(), Some("semaphore.webp"));
        assert_eq!(project.previous_brand_image(), Some("semaphore-old.webp"));
        assert_eq!(project.display_name(), "Semaphore protocol");
        assert_eq!(project.project_status, ProjectStatus::Active);
        assert_eq!(project.website(), Some("https://semaphore.pse.dev"));
        assert_eq!(project.built_with(), ["circom", "snarkjs"]);
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let project = Project {
            name: "Bandada".to_string(),
            image: Some(String::new()),
            image_alt: Some(String::new()),
            license: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(project.banner_image(), None);
        assert_eq!(project.license(), None);
        assert_eq!(project.display_name(), "Bandada");
    }

    #[test]
    fn test_content_falls_back_to_base_language() {
        let mut project = Project {
            name: "MACI".to_string(),
            ..Default::default()
        };
        project.content.insert(
            "en".to_string(),
            ProjectContent {
                tldr: Some("Minimal anti-collusion infrastructure".to_string()),
                description: None,
            },
        );

        let content = project.content_for("es").unwrap();
        assert_eq!(
            content.tldr.as_deref(),
            Some("Minimal anti-collusion infrastructure")
        );
    }

    #[test]
    fn test_description_html() {
        let content = ProjectContent {
            tldr: None,
            description: Some("## Heading\n\nSome *text*.".to_string()),
        };

        let html = content.description_html().unwrap();
        assert!(html.contains("<h2>Heading</h2>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn test_missing_description_renders_nothing() {
        assert_eq!(ProjectContent::default().description_html(), None);
    }
}
