pub mod funding;
pub mod project;
pub mod status;

pub use funding::funding_label;
pub use project::{Project, ProjectContent, ProjectLinks, ProjectTags};
pub use status::{ProjectStatus, StatusLabel, status_labels};
