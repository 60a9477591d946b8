pub mod catalog;
pub mod data;
pub mod i18n;
pub mod models;
pub mod routes;
pub mod text;

// Re-export key types for easier usage
pub use catalog::*;
pub use i18n::{BASE_LANG, I18nError, Translate, Translations, normalize_lang};
pub use models::{funding::*, project::*, status::*};
pub use routes::*;
pub use text::*;
