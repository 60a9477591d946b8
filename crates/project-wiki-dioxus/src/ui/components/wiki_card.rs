use super::banner_image::{BANNER_HEIGHT, BANNER_WIDTH, BannerImage, BannerOverlay, banner_src};
use super::card::{Card, CardPadding};
use super::wiki_detail::{DetailValue, WikiDetail};
use super::wiki_link::WikiLink;
use crate::ui::i18n::use_translations;
use dioxus::prelude::*;
use project_wiki_engine::{
    BASE_LANG, Project, Translate, class_names, funding_label, projects_filter_href,
    remove_protocol, status_labels,
};

/// Sidebar card summarising a project: banner, status, built-with tags,
/// funding, license and website, plus the previous brand image when there
/// is one.
///
/// `on_navigate` receives the href of a clicked built-with link in place of
/// page navigation.
#[component]
pub fn WikiCard(
    project: Project,
    #[props(default = BASE_LANG.to_string())] lang: String,
    #[props(default)] class: String,
    on_navigate: Option<Callback<String>>,
) -> Element {
    let translations = use_translations(&lang);

    let status = status_labels(&translations)
        .remove(&project.project_status)
        .map(|status| DetailValue::Text(status.label));
    let funding = funding_label(&project.section).map(DetailValue::from);
    let license = project.license().map(DetailValue::from);
    let built_with = project.built_with().to_vec();
    let website = project.website().map(str::to_string);
    let website_text = website.as_deref().map(remove_protocol);
    let previous_brand_image = project.previous_brand_image().map(str::to_string);

    // The overlay on both cards follows the primary banner.
    let banner_missing = project.banner_image().is_none();
    let overlay_text = project.display_name().to_string();
    let banner_alt = format!("{} banner", project.name);
    let container_class = class_names(&["wiki-card flex flex-col gap-6", &class]);

    let status_label = translations.t("filterLabels.projectStatus");
    let built_with_label = translations.t("filterLabels.builtWith");
    let funding_label_text = translations.t("filterLabels.funding");
    let license_label = translations.t("filterLabels.license");
    let previous_caption = translations.t("prevBrandImage");

    let built_with_links = rsx! {
        div {
            class: "flex flex-col gap-1",
            // Tags may repeat, so the position is part of the key
            for (index, tag) in built_with.iter().enumerate() {
                WikiLink {
                    key: "{index}-{tag}",
                    href: projects_filter_href(&lang, tag),
                    on_navigate,
                    "{tag}"
                }
            }
        }
    };

    rsx! {
        div {
            class: "{container_class}",
            div {
                class: "mx-auto flex max-w-[290px] flex-col gap-6",
                Card {
                    class: "bg-white",
                    padding: CardPadding::None,
                    div {
                        class: "relative flex h-[140px] items-center justify-center overflow-hidden rounded-t-lg",
                        BannerImage {
                            src: banner_src(project.banner_image()),
                            alt: banner_alt.clone(),
                            width: BANNER_WIDTH,
                            height: BANNER_HEIGHT,
                            class: "bg-cover",
                        }
                        if banner_missing {
                            BannerOverlay { text: overlay_text.clone() }
                        }
                    }
                    div {
                        class: "gap-[10px] px-6 py-4 md:flex md:flex-col",
                        WikiDetail { label: status_label, value: status }
                        if !built_with.is_empty() {
                            WikiDetail {
                                label: built_with_label,
                                value: Some(DetailValue::Node(built_with_links)),
                            }
                        }
                        WikiDetail { label: funding_label_text, value: funding }
                        WikiDetail { label: license_label, value: license }
                        if let (Some(url), Some(text)) = (website, website_text) {
                            WikiDetail {
                                label: "Website",
                                value: Some(DetailValue::Node(rsx! {
                                    WikiLink { href: url, external: true, "{text}" }
                                })),
                            }
                        }
                    }
                }
                if let Some(previous) = previous_brand_image {
                    Card {
                        padding: CardPadding::None,
                        div {
                            class: "relative flex max-h-[140px] items-center justify-center overflow-hidden rounded-t-lg",
                            BannerImage {
                                src: banner_src(Some(previous.as_str())),
                                alt: banner_alt.clone(),
                                width: BANNER_WIDTH,
                                height: BANNER_HEIGHT,
                                class: "bg-cover",
                            }
                            if banner_missing {
                                BannerOverlay { text: overlay_text.clone() }
                            }
                        }
                        div {
                            class: "flex items-center justify-center bg-white py-4",
                            span {
                                class: "text-xs font-normal text-black",
                                "{previous_caption}"
                            }
                        }
                    }
                }
            }
        }
    }
}
