use dioxus::prelude::*;

/// Directory banner images are served from
pub const BANNER_DIR: &str = "/project-banners";
/// Banner used when a project has no image of its own
pub const FALLBACK_BANNER: &str = "fallback.webp";

pub const BANNER_WIDTH: u32 = 290;
pub const BANNER_HEIGHT: u32 = 140;

/// Source path for a banner image filename
pub fn banner_src(image: Option<&str>) -> String {
    format!("{BANNER_DIR}/{}", image.unwrap_or(FALLBACK_BANNER))
}

#[component]
pub fn BannerImage(
    src: String,
    alt: String,
    width: u32,
    height: u32,
    #[props(default)] class: String,
) -> Element {
    rsx! {
        img {
            src: "{src}",
            alt: "{alt}",
            width: "{width}",
            height: "{height}",
            class: "{class}",
            loading: "lazy",
            decoding: "async",
        }
    }
}

/// Project name centred over a banner that has no artwork
#[component]
pub fn BannerOverlay(text: String) -> Element {
    rsx! {
        span {
            class: "banner-overlay absolute left-1/2 top-1/2 w-full -translate-x-1/2 -translate-y-1/2 px-5 text-center text-3xl font-bold text-black",
            "{text}"
        }
    }
}
