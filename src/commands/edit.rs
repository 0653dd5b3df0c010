//! Edit command handler.

use super::{ensure_saved, open_store, resolve};
use crate::config::load_config;
use crate::error::{DevdeckError, Result};
use crate::output::{print_info, print_success, BOLD, RESET};
use crate::project::ProjectRecord;
use crate::store::ProjectStore;

/// Replacement values for `devdeck edit`. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditFields {
    pub name: Option<String>,
    pub path: Option<String>,
    pub repo: Option<String>,
}

impl EditFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.path.is_none() && self.repo.is_none()
    }
}

/// Apply `fields` to the project `reference` names and save. Returns the updated record.
pub fn edit_project(
    store: &mut ProjectStore,
    reference: &str,
    fields: EditFields,
) -> Result<ProjectRecord> {
    let current = resolve(store, reference)?;
    let mut draft = current.to_draft();
    if let Some(name) = fields.name {
        draft.name = name;
    }
    if let Some(path) = fields.path {
        draft.path = path;
    }
    if let Some(repo) = fields.repo {
        draft.repo = repo;
    }

    let draft = draft.validate()?;
    store.update(current.id, draft);
    ensure_saved(store)?;
    store
        .get(current.id)
        .cloned()
        .ok_or_else(|| DevdeckError::ProjectNotFound(reference.to_string()))
}

pub fn edit_command(reference: &str, fields: EditFields) -> Result<()> {
    if fields.is_empty() {
        print_info("Nothing to change. Pass --name, --path or --repo.");
        return Ok(());
    }
    let config = load_config()?;
    let mut store = open_store(&config)?;
    let updated = edit_project(&mut store, reference, fields)?;
    print_success(&format!("Updated {BOLD}{}{RESET}", updated.name));
    Ok(())
}
