//! Loading a content store from disk and querying it.

use pretty_assertions::assert_eq;
use project_wiki_engine::{
    CatalogError, ProjectCatalog, ProjectQuery, ProjectStatus, ProjectsRoute, projects_filter_href,
    read_project,
};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn sample_store() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir,
        "semaphore.json",
        r#"{
            "id": "semaphore",
            "name": "Semaphore",
            "section": "pse",
            "projectStatus": "active",
            "tags": { "builtWith": ["circom", "snarkjs"], "themes": ["build"] }
        }"#,
    );
    write(
        &dir,
        "grants/zkp2p.json",
        r#"{
            "id": "zkp2p",
            "name": "ZKP2P",
            "section": "grant",
            "projectStatus": "inactive",
            "tags": { "builtWith": ["circom", "halo2"] }
        }"#,
    );
    write(&dir, "broken.json", "{ \"id\": ");
    write(&dir, "notes.md", "# not a project");
    write(&dir, ".drafts/hidden.json", r#"{ "id": "hidden", "name": "Hidden" }"#);
    dir
}

#[test]
fn test_load_skips_broken_and_unrelated_files() {
    let dir = sample_store();
    let catalog = ProjectCatalog::load(dir.path()).unwrap();

    let paths: Vec<_> = catalog
        .entries()
        .iter()
        .map(|entry| entry.relative_path.as_str().to_string())
        .collect();
    assert_eq!(paths, vec!["grants/zkp2p.json", "semaphore.json"]);
    assert_eq!(catalog.get("semaphore").unwrap().name, "Semaphore");
    assert!(catalog.get("hidden").is_none());
}

#[test]
fn test_load_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let result = ProjectCatalog::load(&dir.path().join("missing"));

    assert!(matches!(result, Err(CatalogError::InvalidDir(_))));
}

#[test]
fn test_read_project_reports_parse_errors() {
    let dir = sample_store();

    let err = read_project(&dir.path().join("broken.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));

    let err = read_project(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn test_built_with_tags_are_unique_and_sorted() {
    let catalog = ProjectCatalog::load(sample_store().path()).unwrap();

    assert_eq!(catalog.built_with_tags(), vec!["circom", "halo2", "snarkjs"]);
}

#[test]
fn test_filter_link_selects_matching_projects() {
    let catalog = ProjectCatalog::load(sample_store().path()).unwrap();

    let route = ProjectsRoute::parse(&projects_filter_href("en", "halo2")).unwrap();
    let ids: Vec<_> = catalog
        .filter(&route.query)
        .into_iter()
        .map(|project| project.id.as_str())
        .collect();
    assert_eq!(ids, vec!["zkp2p"]);

    let active = ProjectQuery {
        built_with: Some("circom".to_string()),
        status: Some(ProjectStatus::Active),
        ..Default::default()
    };
    let ids: Vec<_> = catalog
        .filter(&active)
        .into_iter()
        .map(|project| project.id.as_str())
        .collect();
    assert_eq!(ids, vec!["semaphore"]);
}

#[test]
fn test_from_projects_orders_by_id() {
    let catalog = ProjectCatalog::from_projects(vec![
        project_wiki_engine::Project {
            id: "b".to_string(),
            name: "B".to_string(),
            ..Default::default()
        },
        project_wiki_engine::data::example(),
    ]);

    let ids: Vec<_> = catalog.projects().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "project_name"]);
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_duplicate_ids_keep_first_file() {
    let dir = sample_store();
    write(
        &dir,
        "zz-copy/semaphore.json",
        r#"{ "id": "semaphore", "name": "Semaphore (copy)" }"#,
    );

    let catalog = ProjectCatalog::load(dir.path()).unwrap();

    let ids: Vec<_> = catalog.projects().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["zkp2p", "semaphore"]);
    assert_eq!(catalog.get("semaphore").unwrap().name, "Semaphore");
}

#[test]
fn test_from_projects_drops_repeated_ids() {
    let duplicate = project_wiki_engine::Project {
        id: "project_name".to_string(),
        name: "Another example".to_string(),
        ..Default::default()
    };
    let catalog =
        ProjectCatalog::from_projects(vec![project_wiki_engine::data::example(), duplicate]);

    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.get("project_name").unwrap().name,
        "This is an example of the project"
    );
}
