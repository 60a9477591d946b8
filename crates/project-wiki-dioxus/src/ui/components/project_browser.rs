use super::wiki_card::WikiCard;
use dioxus::prelude::*;
use project_wiki_engine::{ProjectCatalog, ProjectQuery, ProjectsRoute, Translate, Translations};

/// Built-with filter requested by an internal link, `None` when the href is
/// not a projects listing route.
fn built_with_filter_for(href: &str) -> Option<Option<String>> {
    ProjectsRoute::parse(href).map(|route| route.query.built_with)
}

/// Catalog sidebar with a built-with filter; the selected project is shown
/// as a wiki card next to its summary and description.
#[component]
pub fn ProjectBrowser(catalog: ProjectCatalog, lang: String) -> Element {
    let translations = use_context_provider(|| Translations::new(&lang, "common"));
    let mut built_with_filter = use_signal(|| None::<String>);
    let mut selected_id = use_signal({
        let first = catalog.projects().next().map(|project| project.id.clone());
        move || first
    });

    let on_navigate = Callback::new(move |href: String| match built_with_filter_for(&href) {
        Some(filter) => built_with_filter.set(filter),
        None => log::debug!("Ignoring navigation to {href}"),
    });

    let query = ProjectQuery {
        built_with: built_with_filter.read().clone(),
        ..Default::default()
    };
    let current_filter = query.built_with.clone().unwrap_or_default();
    let items: Vec<(String, String, String, String)> = catalog
        .filter(&query)
        .into_iter()
        .map(|project| {
            let class = if selected_id.read().as_deref() == Some(project.id.as_str()) {
                "project-item selected"
            } else {
                "project-item"
            };
            (
                project.id.clone(),
                project.id.clone(),
                project.name.clone(),
                class.to_string(),
            )
        })
        .collect();
    let tags = catalog.built_with_tags();

    let selected = selected_id
        .read()
        .as_deref()
        .and_then(|id| catalog.get(id))
        .cloned();
    let (tldr, description_html) = selected
        .as_ref()
        .and_then(|project| project.content_for(&lang))
        .map(|content| (content.tldr.clone(), content.description_html()))
        .unwrap_or_default();

    let projects_title = translations.t("browser.projects");
    let any_tag = translations.t("browser.allBuiltWith");
    let no_projects = translations.t("browser.noProjects");
    let no_selection = translations.t("browser.noSelection");
    let built_with_label = translations.t("filterLabels.builtWith");

    rsx! {
        div {
            class: "app-container",
            aside {
                class: "sidebar",
                h2 { "{projects_title}" }
                label {
                    class: "filter",
                    span { "{built_with_label}" }
                    select {
                        value: "{current_filter}",
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            built_with_filter.set((!value.is_empty()).then_some(value));
                        },
                        option { value: "", "{any_tag}" }
                        for tag in tags {
                            option { key: "{tag}", value: "{tag}", "{tag}" }
                        }
                    }
                }
                if items.is_empty() {
                    p { class: "empty", "{no_projects}" }
                }
                ul {
                    class: "project-list",
                    for (key, id, name, class) in items {
                        li {
                            key: "{key}",
                            class: "{class}",
                            onclick: move |_| selected_id.set(Some(id.clone())),
                            "{name}"
                        }
                    }
                }
            }
            main {
                class: "main-content",
                if let Some(project) = selected {
                    WikiCard { project, lang: lang.clone(), on_navigate: Some(on_navigate) }
                    article {
                        class: "project-description",
                        if let Some(tldr) = tldr {
                            p { class: "tldr", "{tldr}" }
                        }
                        if let Some(html) = description_html {
                            div { dangerous_inner_html: "{html}" }
                        }
                    }
                } else {
                    p { class: "empty", "{no_selection}" }
                }
            }
        }
    }
}
