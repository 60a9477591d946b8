use super::components::ProjectBrowser;
use dioxus::prelude::*;
use project_wiki_engine::ProjectCatalog;

const WIKI_CSS: &str = include_str!("assets/wiki.css");

/// Data resolved before the window opens
#[derive(Debug, Clone, PartialEq)]
pub struct Startup {
    pub catalog: ProjectCatalog,
    pub lang: String,
}

#[component]
pub fn App(startup: Startup) -> Element {
    log::debug!(
        "Rendering browser for {} projects ({})",
        startup.catalog.len(),
        startup.lang
    );

    rsx! {
        style { {WIKI_CSS} }
        ProjectBrowser { catalog: startup.catalog, lang: startup.lang }
    }
}
