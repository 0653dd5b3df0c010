//! CLI command handlers for devdeck.
//!
//! Each command has its own module. Handlers load the config, open the
//! project store in the configured data directory and act on it.
//!
//! # Commands
//!
//! - [`gui`] - Open the project window (default)
//! - [`list`] - Print the project list
//! - [`add`] - Add a project
//! - [`edit`] - Change a project's fields
//! - [`remove`] - Delete a project after confirmation
//! - [`open`] - Open a project in the editor or its repository in the browser
//! - [`config`] - Show, set and reset configuration

mod add;
mod config;
mod edit;
mod gui;
mod list;
mod open;
mod remove;

pub use add::{add_command, add_project};
pub use config::{
    config_display_command, config_reset_command, config_set_command, ConfigSubcommand,
};
pub use edit::{edit_command, edit_project, EditFields};
pub use gui::gui_command;
pub use list::list_command;
pub use open::{open_command, open_project, open_repository, repo_command};
pub use remove::{remove_command, remove_project};

use crate::config::Config;
use crate::error::{DevdeckError, Result};
use crate::launcher::{Launcher, SystemRunner};
use crate::output::print_warning;
use crate::platform::{Platform, SystemEnvironment};
use crate::project::ProjectRecord;
use crate::storage::FileStorage;
use crate::store::{ProjectStore, PROJECTS_KEY};

/// Open the project store in the configured data directory.
///
/// A corrupt project file is reported as a warning and replaced with the defaults.
pub(crate) fn open_store(config: &Config) -> Result<ProjectStore> {
    let storage = FileStorage::new(config.resolved_data_dir()?);
    let (store, outcome) = ProjectStore::open(Box::new(storage));
    if let Some(notice) = outcome.notice() {
        print_warning(&notice);
    }
    Ok(store)
}

pub(crate) fn build_launcher(config: &Config) -> Launcher {
    Launcher::new(
        Box::new(SystemRunner),
        Box::new(SystemEnvironment),
        Platform::current(),
        config.editor_command(),
    )
}

/// Fail if the store's last write did not reach storage.
pub(crate) fn ensure_saved(store: &ProjectStore) -> Result<()> {
    if store.is_synced() {
        return Ok(());
    }
    Err(DevdeckError::Storage {
        key: PROJECTS_KEY.to_string(),
        message: "the change could not be written to disk".to_string(),
    })
}

/// Look up a project by position, id prefix or name.
pub(crate) fn resolve(store: &ProjectStore, reference: &str) -> Result<ProjectRecord> {
    store
        .find(reference)
        .cloned()
        .ok_or_else(|| DevdeckError::ProjectNotFound(reference.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectDraft;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn test_resolve_reports_unknown_reference() {
        let (store, _) = ProjectStore::open(Box::new(MemoryStorage::new()));
        let err = resolve(&store, "nope").unwrap_err();
        assert!(matches!(err, DevdeckError::ProjectNotFound(ref r) if r == "nope"));
        assert_eq!(resolve(&store, "2").unwrap().name, "Project B");
    }

    #[test]
    fn test_ensure_saved_fails_after_write_error() {
        let storage = Arc::new(MemoryStorage::new());
        let (mut store, _) = ProjectStore::open(Box::new(Arc::clone(&storage)));
        assert!(ensure_saved(&store).is_ok());

        storage.set_fail_writes(true);
        store.add(ProjectDraft::new("X", "/x", ""));
        assert!(matches!(
            ensure_saved(&store),
            Err(DevdeckError::Storage { .. })
        ));
    }
}
