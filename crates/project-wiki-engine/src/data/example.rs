use crate::models::{Project, ProjectContent, ProjectStatus};
use std::collections::BTreeMap;

const EXAMPLE_DESCRIPTION: &str = r#"
## Heading

Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.

Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.
"#;

/// Template record showing the shape of a project entry
pub fn example() -> Project {
    Project {
        id: "project_name".to_string(),
        image: Some(String::new()),
        section: "pse".to_string(),
        project_status: ProjectStatus::Active,
        name: "This is an example of the project".to_string(),
        content: BTreeMap::from([(
            "en".to_string(),
            ProjectContent {
                tldr: Some("Short description".to_string()),
                description: Some(EXAMPLE_DESCRIPTION.to_string()),
            },
        )]),
        ..Default::default()
    }
}
