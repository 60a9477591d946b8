use dioxus::prelude::*;

/// Anchor used for every link in the UI. External links open in a new tab
/// without passing the opener or referrer.
///
/// When `on_navigate` is set, clicks on internal links are handed to it
/// instead of navigating the page.
#[component]
pub fn AppLink(
    href: String,
    #[props(default)] external: bool,
    #[props(default)] class: String,
    on_navigate: Option<Callback<String>>,
    children: Element,
) -> Element {
    let target = href.clone();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            target: if external { "_blank" },
            rel: if external { "noreferrer noopener" },
            onclick: move |evt: MouseEvent| {
                if let Some(on_navigate) = on_navigate.filter(|_| !external) {
                    evt.prevent_default();
                    on_navigate.call(target.clone());
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[component]
    fn InternalLink() -> Element {
        rsx! { AppLink { href: "/en/projects", "Projects" } }
    }

    #[component]
    fn ExternalLink() -> Element {
        rsx! { AppLink { href: "https://pse.dev", external: true, "pse.dev" } }
    }

    fn render_app(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_internal_link_has_no_new_tab_attributes() {
        let html = render_app(InternalLink);

        assert!(html.contains("href=\"/en/projects\""));
        assert!(html.contains("Projects"));
        assert!(!html.contains("target="));
        assert!(!html.contains("rel="));
    }

    #[test]
    fn test_external_link_opens_in_new_tab() {
        let html = render_app(ExternalLink);

        assert!(html.contains("href=\"https://pse.dev\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noreferrer noopener\""));
    }
}
