pub mod app_link;
pub mod banner_image;
pub mod card;
pub mod project_browser;
pub mod wiki_card;
pub mod wiki_detail;
pub mod wiki_link;

pub use app_link::AppLink;
pub use banner_image::{BannerImage, BannerOverlay, banner_src};
pub use card::{Card, CardPadding};
pub use project_browser::{ProjectBrowser, ProjectBrowserProps};
pub use wiki_card::{WikiCard, WikiCardProps};
pub use wiki_detail::{DetailValue, WikiDetail, WikiDetailProps};
pub use wiki_link::WikiLink;
