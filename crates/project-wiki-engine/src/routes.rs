//! Paths understood by the projects listing page.
//!
//! Built-with filter links use the literal template
//! `/{lang}/projects?builtWith={tag}`; the tag is not encoded.

use crate::i18n::normalize_lang;
use crate::models::ProjectStatus;

/// Href of the projects page filtered to one built-with tag
pub fn projects_filter_href(lang: &str, tag: &str) -> String {
    format!("/{lang}/projects?builtWith={tag}")
}

/// Filter criteria for the projects listing. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub built_with: Option<String>,
    pub status: Option<ProjectStatus>,
    pub section: Option<String>,
    pub theme: Option<String>,
    pub keyword: Option<String>,
}

/// A parsed `/{lang}/projects?...` path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsRoute {
    pub lang: String,
    pub query: ProjectQuery,
}

impl ProjectsRoute {
    /// Parse a projects listing href. Returns `None` for any other path.
    /// Unknown query parameters are ignored.
    pub fn parse(href: &str) -> Option<Self> {
        let (path, query_string) = match href.split_once('?') {
            Some((path, query)) => (path, query),
            None => (href, ""),
        };

        let mut segments = path.trim_matches('/').split('/');
        let lang = segments.next().filter(|s| !s.is_empty())?;
        if segments.next() != Some("projects") || segments.next().is_some() {
            return None;
        }

        let mut query = ProjectQuery::default();
        for pair in query_string.split('&').filter(|p| !p.is_empty()) {
            let (name, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(&raw_value.replace('+', " "))
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| raw_value.to_string());
            if value.is_empty() {
                continue;
            }
            match name {
                "builtWith" => query.built_with = Some(value),
                "status" => query.status = ProjectStatus::parse(&value),
                "section" => query.section = Some(value),
                "themes" => query.theme = Some(value),
                "keywords" => query.keyword = Some(value),
                other => log::debug!("Ignoring unknown projects query parameter '{other}'"),
            }
        }

        Some(Self {
            lang: normalize_lang(lang).to_string(),
            query,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_href_is_literal() {
        assert_eq!(
            projects_filter_href("en", "circom"),
            "/en/projects?builtWith=circom"
        );
        assert_eq!(
            projects_filter_href("es", "Noir lang"),
            "/es/projects?builtWith=Noir lang"
        );
    }

    #[test]
    fn test_parse_filter_href_roundtrip() {
        let route = ProjectsRoute::parse(&projects_filter_href("es", "halo2")).unwrap();

        assert_eq!(route.lang, "es");
        assert_eq!(route.query.built_with.as_deref(), Some("halo2"));
        assert_eq!(route.query.status, None);
    }

    #[test]
    fn test_parse_decodes_and_reads_all_filters() {
        let route = ProjectsRoute::parse(
            "/en/projects?builtWith=Noir%20lang&status=active&section=pse&themes=build&keywords=zk&page=2",
        )
        .unwrap();

        assert_eq!(
            route.query,
            ProjectQuery {
                built_with: Some("Noir lang".to_string()),
                status: Some(ProjectStatus::Active),
                section: Some("pse".to_string()),
                theme: Some("build".to_string()),
                keyword: Some("zk".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_without_query() {
        let route = ProjectsRoute::parse("/en/projects").unwrap();
        assert_eq!(route.query, ProjectQuery::default());
    }

    #[test]
    fn test_parse_rejects_other_paths() {
        assert_eq!(ProjectsRoute::parse("/en/blog?builtWith=rust"), None);
        assert_eq!(ProjectsRoute::parse("/en/projects/semaphore"), None);
        assert_eq!(ProjectsRoute::parse("/"), None);
    }
}
