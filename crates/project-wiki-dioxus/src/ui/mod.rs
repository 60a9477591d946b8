pub mod app;
pub mod components;
pub mod i18n;

pub use app::{App, Startup};
pub use components::*;
pub use i18n::use_translations;
