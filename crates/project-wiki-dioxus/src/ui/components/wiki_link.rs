use super::app_link::AppLink;
use dioxus::prelude::*;

#[component]
pub fn WikiLink(
    href: String,
    #[props(default)] external: bool,
    on_navigate: Option<Callback<String>>,
    children: Element,
) -> Element {
    rsx! {
        AppLink {
            class: "wiki-link text-anakiwa-500 duration-200 hover:text-anakiwa-700",
            href,
            external,
            on_navigate,
            span { class: "text-xs leading-[14px]", {children} }
        }
    }
}
