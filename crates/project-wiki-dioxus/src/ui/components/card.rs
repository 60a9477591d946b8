use dioxus::prelude::*;
use project_wiki_engine::class_names;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Md,
}

impl CardPadding {
    fn class(self) -> &'static str {
        match self {
            CardPadding::None => "",
            CardPadding::Sm => "p-4",
            CardPadding::Md => "p-6",
        }
    }
}

/// Bordered, rounded container
#[component]
pub fn Card(
    #[props(default)] class: String,
    #[props(default)] padding: CardPadding,
    children: Element,
) -> Element {
    let classes = class_names(&[
        "card overflow-hidden rounded-lg border border-tuatara-300",
        padding.class(),
        &class,
    ]);

    rsx! {
        div {
            class: "{classes}",
            {children}
        }
    }
}
