//! Loading project records from a directory of JSON files.

mod filter;

use crate::models::Project;
use crate::routes::ProjectQuery;
use relative_path::RelativePathBuf;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Project file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid projects directory: {0}")]
    InvalidDir(String),
    #[error("Failed to parse project file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A project together with the file it was loaded from
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEntry {
    pub relative_path: RelativePathBuf,
    pub project: Project,
}

/// Read-only set of projects, ordered by the path they were loaded from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCatalog {
    entries: Vec<ProjectEntry>,
}

impl ProjectCatalog {
    /// Load every `*.json` record under `projects_root`. Files that cannot be
    /// read or parsed are skipped with a warning, as are records whose id is
    /// already taken by an earlier file.
    pub fn load(projects_root: &Path) -> Result<Self, CatalogError> {
        let files = scan_project_files(projects_root)?;

        let mut entries = Vec::with_capacity(files.len());
        for file in files {
            let relative_path = match file.strip_prefix(projects_root) {
                Ok(rel) => match RelativePathBuf::from_path(rel) {
                    Ok(rel) => rel,
                    Err(e) => {
                        log::warn!("Skipping {}: {e}", file.display());
                        continue;
                    }
                },
                Err(_) => continue,
            };

            match read_project(&file) {
                Ok(project) => entries.push(ProjectEntry {
                    relative_path,
                    project,
                }),
                Err(e) => log::warn!("Skipping project file: {e}"),
            }
        }

        let entries = drop_duplicate_ids(entries);
        log::info!(
            "Loaded {} projects from {}",
            entries.len(),
            projects_root.display()
        );
        Ok(Self { entries })
    }

    /// Catalog from in-memory records, keyed as `{id}.json`. Later records
    /// with an id already seen are dropped.
    pub fn from_projects(projects: Vec<Project>) -> Self {
        let mut entries: Vec<_> = projects
            .into_iter()
            .map(|project| ProjectEntry {
                relative_path: RelativePathBuf::from(format!("{}.json", project.id)),
                project,
            })
            .collect();
        entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Self {
            entries: drop_duplicate_ids(entries),
        }
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.entries.iter().map(|entry| &entry.project)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects().find(|project| project.id == id)
    }

    pub fn filter(&self, query: &ProjectQuery) -> Vec<&Project> {
        self.projects()
            .filter(|project| query.matches(project))
            .collect()
    }

    /// Every built-with tag used by any project, sorted and deduplicated
    pub fn built_with_tags(&self) -> Vec<String> {
        self.projects()
            .flat_map(|project| project.tags.built_with.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Ids are unique within a catalog; the first entry in path order wins.
fn drop_duplicate_ids(entries: Vec<ProjectEntry>) -> Vec<ProjectEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| {
            let first = seen.insert(entry.project.id.clone());
            if !first {
                log::warn!(
                    "Skipping {}: project id '{}' is already used",
                    entry.relative_path,
                    entry.project.id
                );
            }
            first
        })
        .collect()
}

/// Read and parse a single project record
pub fn read_project(path: &Path) -> Result<Project, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan for project files in the projects directory
pub fn scan_project_files(projects_root: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    if !projects_root.is_dir() {
        return Err(CatalogError::InvalidDir(format!(
            "projects directory not found: {}",
            projects_root.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(projects_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), CatalogError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            // Skip hidden directories
            if path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with('.'))
            {
                continue;
            }
            scan_directory_recursive(&path, files)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            files.push(path);
        }
    }
    Ok(())
}
