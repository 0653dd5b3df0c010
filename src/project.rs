//! Project records and the user-entered drafts they are built from.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Length of the id prefix shown in listings and accepted as a reference.
pub const SHORT_ID_LEN: usize = 8;

/// Shortest id prefix accepted as a reference.
pub const MIN_ID_PREFIX_LEN: usize = 4;

/// Stable identifier assigned to a project when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// First characters of the id, for display.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..SHORT_ID_LEN].to_string()
    }

    /// Whether `prefix` (case-insensitive, hyphens ignored, at least
    /// [`MIN_ID_PREFIX_LEN`] characters) starts this id.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let wanted: String = prefix
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        wanted.len() >= MIN_ID_PREFIX_LEN && self.0.simple().to_string().starts_with(&wanted)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in the managed project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Missing in lists written before ids existed; a fresh one is assigned
    /// here and the store writes it back on load.
    #[serde(default = "ProjectId::generate")]
    pub id: ProjectId,
    pub name: String,
    /// Stored as entered. A leading `~` is only expanded when the project is opened.
    pub path: String,
    /// Empty means no repository is configured.
    #[serde(default)]
    pub repo: String,
}

impl ProjectRecord {
    pub fn new(name: impl Into<String>, path: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            id: ProjectId::generate(),
            name: name.into(),
            path: path.into(),
            repo: repo.into(),
        }
    }

    /// Build a record from a draft, assigning a new id.
    pub fn from_draft(draft: ProjectDraft) -> Self {
        Self::new(draft.name, draft.path, draft.repo)
    }

    /// Replace the editable fields, keeping the id.
    pub fn apply(&mut self, draft: ProjectDraft) {
        self.name = draft.name;
        self.path = draft.path;
        self.repo = draft.repo;
    }

    pub fn has_repo(&self) -> bool {
        !self.repo.trim().is_empty()
    }

    /// The editable fields of this record as a draft.
    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            name: self.name.clone(),
            path: self.path.clone(),
            repo: self.repo.clone(),
        }
    }
}

/// Field-level validation failures for a [`ProjectDraft`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("project name is required")]
    EmptyName,

    #[error("project path is required")]
    EmptyPath,
}

/// The editable fields of a project as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub path: String,
    pub repo: String,
}

impl ProjectDraft {
    pub fn new(name: impl Into<String>, path: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            repo: repo.into(),
        }
    }

    /// Trim every field and check that name and path are present.
    ///
    /// Name is checked before path, so a draft missing both reports
    /// [`ValidationError::EmptyName`].
    pub fn validate(&self) -> Result<ProjectDraft, ValidationError> {
        let name = self.name.trim();
        let path = self.path.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if path.is_empty() {
            return Err(ValidationError::EmptyPath);
        }
        Ok(ProjectDraft::new(name, path, self.repo.trim()))
    }
}

/// The placeholder list used when no valid persisted list exists.
pub fn seed_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new("Project A", "~/dev/main-projects/dream-frontend", ""),
        ProjectRecord::new("Project B", "/path/to/projectB", ""),
        ProjectRecord::new("Project C", "/path/to/projectC", ""),
    ]
}
