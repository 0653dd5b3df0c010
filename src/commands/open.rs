//! Open and repo command handlers.

use super::{build_launcher, open_store, resolve};
use crate::config::load_config;
use crate::error::Result;
use crate::launcher::{Invocation, Launcher};
use crate::output::{print_info, print_success, BOLD, RESET};
use crate::store::ProjectStore;

/// Open the project `reference` names in the editor.
pub fn open_project(store: &ProjectStore, launcher: &Launcher, reference: &str) -> Result<Invocation> {
    let project = resolve(store, reference)?;
    launcher.open_project(&project.path)
}

/// Open the project's repository URL. `None` when the project has none.
pub fn open_repository(
    store: &ProjectStore,
    launcher: &Launcher,
    reference: &str,
) -> Result<Option<Invocation>> {
    let project = resolve(store, reference)?;
    if !project.has_repo() {
        return Ok(None);
    }
    launcher.open_url(project.repo.trim()).map(Some)
}

pub fn open_command(reference: &str) -> Result<()> {
    let config = load_config()?;
    let store = open_store(&config)?;
    let launcher = build_launcher(&config);
    let invocation = open_project(&store, &launcher, reference)?;
    print_success(&format!("Opened with {BOLD}{}{RESET}", invocation));
    Ok(())
}

pub fn repo_command(reference: &str) -> Result<()> {
    let config = load_config()?;
    let store = open_store(&config)?;
    let launcher = build_launcher(&config);
    match open_repository(&store, &launcher, reference)? {
        Some(_) => print_success("Opened repository in the browser"),
        None => print_info("No repository URL is configured for this project."),
    }
    Ok(())
}
