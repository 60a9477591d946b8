use crate::models::Project;
use crate::routes::ProjectQuery;

fn contains_tag(tags: &[String], wanted: &str) -> bool {
    tags.iter().any(|tag| tag.eq_ignore_ascii_case(wanted))
}

impl ProjectQuery {
    /// True when the project satisfies every criterion that is set
    pub fn matches(&self, project: &Project) -> bool {
        let built_with = self
            .built_with
            .as_deref()
            .is_none_or(|tag| contains_tag(&project.tags.built_with, tag));
        let status = self
            .status
            .is_none_or(|status| project.project_status == status);
        let section = self
            .section
            .as_deref()
            .is_none_or(|section| project.section.eq_ignore_ascii_case(section));
        let theme = self
            .theme
            .as_deref()
            .is_none_or(|theme| contains_tag(&project.tags.themes, theme));
        let keyword = self
            .keyword
            .as_deref()
            .is_none_or(|keyword| contains_tag(&project.tags.keywords, keyword));

        built_with && status && section && theme && keyword
    }
}
