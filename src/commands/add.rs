//! Add command handler.

use super::{ensure_saved, open_store};
use crate::config::load_config;
use crate::error::Result;
use crate::output::{print_success, BOLD, RESET};
use crate::project::{ProjectDraft, ProjectId};
use crate::store::ProjectStore;

/// Validate `draft`, append it to the list and save.
pub fn add_project(store: &mut ProjectStore, draft: ProjectDraft) -> Result<ProjectId> {
    let draft = draft.validate()?;
    let id = store.add(draft);
    ensure_saved(store)?;
    Ok(id)
}

pub fn add_command(name: &str, path: &str, repo: Option<&str>) -> Result<()> {
    let config = load_config()?;
    let mut store = open_store(&config)?;
    let id = add_project(
        &mut store,
        ProjectDraft::new(name, path, repo.unwrap_or_default()),
    )?;
    print_success(&format!(
        "Added {BOLD}{}{RESET} ({})",
        name.trim(),
        id.short()
    ));
    Ok(())
}
