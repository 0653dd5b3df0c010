//! Remove command handler.

use super::{ensure_saved, open_store, resolve};
use crate::config::load_config;
use crate::error::Result;
use crate::output::{print_info, print_success, BOLD, RESET};
use crate::project::ProjectRecord;
use crate::prompt;
use crate::store::ProjectStore;

/// Delete the project `reference` names if `confirm` agrees.
///
/// Returns the removed record, or `None` when the user declined.
pub fn remove_project(
    store: &mut ProjectStore,
    reference: &str,
    confirm: impl FnOnce(&ProjectRecord) -> bool,
) -> Result<Option<ProjectRecord>> {
    let target = resolve(store, reference)?;
    if !confirm(&target) {
        return Ok(None);
    }
    let removed = store.delete(target.id);
    ensure_saved(store)?;
    Ok(removed)
}

pub fn remove_command(reference: &str, yes: bool) -> Result<()> {
    let config = load_config()?;
    let mut store = open_store(&config)?;
    let removed = remove_project(&mut store, reference, |project| {
        yes || prompt::confirm(
            &format!("Are you sure you want to delete '{}'?", project.name),
            false,
        )
    })?;

    match removed {
        Some(project) => print_success(&format!("Deleted {BOLD}{}{RESET}", project.name)),
        None => print_info("Nothing deleted."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> ProjectStore {
        ProjectStore::open(Box::new(MemoryStorage::new())).0
    }

    #[test]
    fn test_confirmed_remove_deletes_exactly_that_project() {
        let mut store = store();
        let ids: Vec<_> = store.projects().iter().map(|p| p.id).collect();

        let removed = remove_project(&mut store, "2", |p| p.name == "Project B").unwrap();

        assert_eq!(removed.unwrap().id, ids[1]);
        let left: Vec<_> = store.projects().iter().map(|p| p.id).collect();
        assert_eq!(left, vec![ids[0], ids[2]]);
    }

    #[test]
    fn test_declined_remove_keeps_list() {
        let mut store = store();
        let removed = remove_project(&mut store, "1", |_| false).unwrap();
        assert!(removed.is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_unknown_project_never_asks() {
        let mut store = store();
        let mut asked = false;
        let result = remove_project(&mut store, "Nope", |_| {
            asked = true;
            true
        });
        assert!(result.is_err());
        assert!(!asked);
    }
}
