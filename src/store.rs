//! The project store: single source of truth for the project list.
//!
//! Every mutation is applied in memory first and then persisted. A failed
//! save is logged and leaves the store "unsynced" until the next successful
//! save; the in-memory change is never rolled back.

use crate::error::Result;
use crate::project::{seed_projects, ProjectDraft, ProjectId, ProjectRecord};
use crate::storage::Storage;
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Storage key the project list is persisted under.
pub const PROJECTS_KEY: &str = "projects";

/// How the list in memory came to be after [`ProjectStore::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A previously saved list was read back.
    Restored,
    /// Nothing was stored yet; the seed list was used.
    Seeded,
    /// Stored data could not be read or parsed; the seed list replaced it.
    Recovered { reason: String },
}

impl LoadOutcome {
    /// A message worth showing the user, if any.
    pub fn notice(&self) -> Option<String> {
        match self {
            LoadOutcome::Recovered { reason } => Some(format!(
                "Your saved project list could not be read and was replaced with the default list.\n{reason}"
            )),
            _ => None,
        }
    }
}

/// A record as read from storage. Lists written before ids existed omit `id`.
#[derive(Deserialize)]
struct StoredRecord {
    id: Option<ProjectId>,
    name: String,
    path: String,
    #[serde(default)]
    repo: String,
}

pub struct ProjectStore {
    storage: Box<dyn Storage>,
    projects: Vec<ProjectRecord>,
    synced: bool,
}

impl ProjectStore {
    /// Create an empty, not yet loaded store.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            storage,
            projects: Vec::new(),
            synced: false,
        }
    }

    /// Create a store and load it in one step.
    pub fn open(storage: Box<dyn Storage>) -> (Self, LoadOutcome) {
        let mut store = Self::new(storage);
        let outcome = store.load();
        (store, outcome)
    }

    /// Read the persisted list, falling back to the seed list.
    ///
    /// Never fails: absent data seeds silently, unreadable data seeds and
    /// reports [`LoadOutcome::Recovered`]. A seeded list is persisted at once
    /// so the next load restores it.
    pub fn load(&mut self) -> LoadOutcome {
        let outcome = match self.read_persisted() {
            Ok(Some(stored)) => {
                debug!(count = stored.len(), "restored project list");
                let mut assigned = 0;
                self.projects = stored
                    .into_iter()
                    .map(|record| {
                        let id = record.id.unwrap_or_else(|| {
                            assigned += 1;
                            ProjectId::generate()
                        });
                        ProjectRecord {
                            id,
                            name: record.name,
                            path: record.path,
                            repo: record.repo,
                        }
                    })
                    .collect();
                if assigned > 0 {
                    info!(assigned, "assigned ids to projects saved without one");
                    self.persist();
                } else {
                    self.synced = true;
                }
                return LoadOutcome::Restored;
            }
            Ok(None) => {
                info!("no saved project list, using defaults");
                LoadOutcome::Seeded
            }
            Err(e) => {
                warn!(error = %e, "saved project list is unreadable, using defaults");
                LoadOutcome::Recovered {
                    reason: e.to_string(),
                }
            }
        };

        self.projects = seed_projects();
        self.persist();
        outcome
    }

    fn read_persisted(&self) -> Result<Option<Vec<StoredRecord>>> {
        match self.storage.get_data(PROJECTS_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize `projects` and write them, replacing the stored list.
    ///
    /// The in-memory list is replaced as well, so the store always reflects
    /// the last list handed to it.
    pub fn save(&mut self, projects: Vec<ProjectRecord>) -> Result<()> {
        self.projects = projects;
        self.write()
    }

    fn write(&mut self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.projects)?;
        match self.storage.set_data(PROJECTS_KEY, &content) {
            Ok(()) => {
                self.synced = true;
                Ok(())
            }
            Err(e) => {
                self.synced = false;
                Err(e)
            }
        }
    }

    /// Persist the current list, logging instead of returning failures.
    fn persist(&mut self) {
        if let Err(e) = self.write() {
            warn!(error = %e, "failed to save project list; changes are kept in memory only");
        }
    }

    /// Append a new project and save. Returns the id assigned to it.
    pub fn add(&mut self, draft: ProjectDraft) -> ProjectId {
        let record = ProjectRecord::from_draft(draft);
        let id = record.id;
        info!(%id, name = %record.name, "adding project");
        self.projects.push(record);
        self.persist();
        id
    }

    /// Replace the project at `index`, keeping its id. Out of range is a logged no-op.
    pub fn update_at(&mut self, index: usize, draft: ProjectDraft) -> bool {
        let Some(record) = self.projects.get_mut(index) else {
            warn!(index, len = self.projects.len(), "update ignored: index out of range");
            return false;
        };
        record.apply(draft);
        self.persist();
        true
    }

    /// Remove the project at `index`; later projects shift down by one.
    /// Out of range is a logged no-op.
    pub fn delete_at(&mut self, index: usize) -> Option<ProjectRecord> {
        if index >= self.projects.len() {
            warn!(index, len = self.projects.len(), "delete ignored: index out of range");
            return None;
        }
        let removed = self.projects.remove(index);
        info!(id = %removed.id, name = %removed.name, "deleted project");
        self.persist();
        Some(removed)
    }

    /// Replace the project with `id`, keeping its position.
    pub fn update(&mut self, id: ProjectId, draft: ProjectDraft) -> bool {
        match self.index_of(id) {
            Some(index) => self.update_at(index, draft),
            None => {
                warn!(%id, "update ignored: unknown project");
                false
            }
        }
    }

    /// Remove the project with `id`.
    pub fn delete(&mut self, id: ProjectId) -> Option<ProjectRecord> {
        match self.index_of(id) {
            Some(index) => self.delete_at(index),
            None => {
                warn!(%id, "delete ignored: unknown project");
                None
            }
        }
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn get(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn index_of(&self, id: ProjectId) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    /// Resolve a user-typed reference to a project.
    ///
    /// Tried in order: 1-based position, full id or id prefix, exact name.
    /// An id prefix shared by several projects matches none of them.
    pub fn find(&self, reference: &str) -> Option<&ProjectRecord> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }
        if let Ok(position) = reference.parse::<usize>() {
            if let Some(record) = position.checked_sub(1).and_then(|i| self.projects.get(i)) {
                return Some(record);
            }
        }
        let mut by_id = self.projects.iter().filter(|p| p.id.matches_prefix(reference));
        if let (Some(record), None) = (by_id.next(), by_id.next()) {
            return Some(record);
        }
        self.projects.iter().find(|p| p.name == reference)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Whether durable storage matches memory as of the last write.
    pub fn is_synced(&self) -> bool {
        self.synced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn memory_store() -> (ProjectStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ProjectStore::new(Box::new(Arc::clone(&storage)));
        store.load();
        (store, storage)
    }

    fn reload(storage: &Arc<MemoryStorage>) -> (ProjectStore, LoadOutcome) {
        ProjectStore::open(Box::new(Arc::clone(storage)))
    }

    fn draft(name: &str) -> ProjectDraft {
        ProjectDraft::new(name, format!("/src/{name}"), "")
    }

    #[test]
    fn test_load_without_state_seeds_and_persists() {
        let storage = Arc::new(MemoryStorage::new());
        let (store, outcome) = reload(&storage);

        assert_eq!(outcome, LoadOutcome::Seeded);
        assert_eq!(store.len(), 3);
        assert!(store.is_synced());
        assert!(storage.raw(PROJECTS_KEY).is_some());

        let (again, outcome) = reload(&storage);
        assert_eq!(outcome, LoadOutcome::Restored);
        assert_eq!(again.projects(), store.projects());
    }

    #[test]
    fn test_load_corrupt_state_recovers_with_seed() {
        let storage = Arc::new(MemoryStorage::with_value(PROJECTS_KEY, "{not json"));
        let (store, outcome) = reload(&storage);

        assert!(matches!(outcome, LoadOutcome::Recovered { .. }));
        assert!(outcome.notice().is_some());
        assert_eq!(store.len(), 3);
        assert_eq!(store.projects()[0].name, "Project A");

        let (_, outcome) = reload(&storage);
        assert_eq!(outcome, LoadOutcome::Restored);
    }

    #[test]
    fn test_seeded_outcome_has_no_notice() {
        assert!(LoadOutcome::Seeded.notice().is_none());
        assert!(LoadOutcome::Restored.notice().is_none());
    }

    #[test]
    fn test_load_empty_list_is_restored_not_seeded() {
        let storage = Arc::new(MemoryStorage::with_value(PROJECTS_KEY, "[]"));
        let (store, outcome) = reload(&storage);
        assert_eq!(outcome, LoadOutcome::Restored);
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_assigned_on_load_are_kept() {
        let legacy = r#"[{"name": "Legacy", "path": "/srv/legacy", "repo": ""}]"#;
        let storage = Arc::new(MemoryStorage::with_value(PROJECTS_KEY, legacy));

        let (first, outcome) = reload(&storage);
        assert_eq!(outcome, LoadOutcome::Restored);
        assert!(first.is_synced());
        let id = first.projects()[0].id;
        assert!(storage.raw(PROJECTS_KEY).unwrap().contains(&id.to_string()));

        let (second, _) = reload(&storage);
        assert_eq!(second.projects()[0].id, id);
        assert_eq!(second.find(&id.short()).map(|p| p.id), Some(id));
    }

    #[test]
    fn test_restoring_records_with_ids_does_not_rewrite() {
        let storage = Arc::new(MemoryStorage::new());
        let (store, _) = reload(&storage);
        let ids: Vec<_> = store.projects().iter().map(|p| p.id).collect();

        storage.set_fail_writes(true);
        let (again, outcome) = reload(&storage);
        assert_eq!(outcome, LoadOutcome::Restored);
        assert!(again.is_synced());
        assert_eq!(again.projects().iter().map(|p| p.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn test_add_appends_and_survives_reload() {
        let (mut store, storage) = memory_store();
        let before = store.len();
        let id = store.add(ProjectDraft::new("New", "~/new", "https://example.com/new"));

        let (reloaded, _) = reload(&storage);
        assert_eq!(reloaded.len(), before + 1);
        let last = reloaded.projects().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.name, "New");
        assert_eq!(last.path, "~/new");
        assert_eq!(last.repo, "https://example.com/new");
    }

    #[test]
    fn test_update_at_changes_only_that_index() {
        let (mut store, storage) = memory_store();
        let before = store.projects().to_vec();

        assert!(store.update_at(1, draft("Changed")));

        let (reloaded, _) = reload(&storage);
        let after = reloaded.projects();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].id, before[1].id);
        assert_eq!(after[1].name, "Changed");
    }

    #[test]
    fn test_update_at_out_of_range_is_noop() {
        let (mut store, _) = memory_store();
        let before = store.projects().to_vec();
        assert!(!store.update_at(3, draft("Nope")));
        assert_eq!(store.projects(), before.as_slice());
    }

    #[test]
    fn test_delete_at_shifts_later_records() {
        let (mut store, storage) = memory_store();
        store.add(draft("D"));
        let before = store.projects().to_vec();

        let removed = store.delete_at(1).unwrap();
        assert_eq!(removed, before[1]);

        let (reloaded, _) = reload(&storage);
        let after = reloaded.projects();
        assert_eq!(after.len(), before.len() - 1);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[2]);
        assert_eq!(after[2], before[3]);
    }

    #[test]
    fn test_delete_at_out_of_range_is_noop() {
        let (mut store, _) = memory_store();
        assert!(store.delete_at(10).is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_id_addressing_survives_earlier_delete() {
        let (mut store, _) = memory_store();
        let third = store.projects()[2].id;
        store.delete_at(0);

        assert!(store.update(third, draft("Third")));
        assert_eq!(store.projects()[1].name, "Third");
        assert_eq!(store.delete(third).map(|r| r.id), Some(third));
        assert!(store.delete(third).is_none());
        assert!(!store.update(third, draft("Gone")));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (mut store, storage) = memory_store();
        let list = vec![
            ProjectRecord::new("One", "~/one", "https://example.com/one"),
            ProjectRecord::new("One", "~/one", ""),
        ];
        store.save(list.clone()).unwrap();
        let (reloaded, _) = reload(&storage);
        assert_eq!(reloaded.projects(), list.as_slice());

        store.save(Vec::new()).unwrap();
        let (reloaded, outcome) = reload(&storage);
        assert_eq!(outcome, LoadOutcome::Restored);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_failed_save_keeps_memory_and_marks_unsynced() {
        let (mut store, storage) = memory_store();
        let persisted = storage.raw(PROJECTS_KEY);
        storage.set_fail_writes(true);

        store.add(draft("Offline"));
        assert_eq!(store.len(), 4);
        assert!(!store.is_synced());
        assert_eq!(storage.raw(PROJECTS_KEY), persisted);

        storage.set_fail_writes(false);
        store.add(draft("Online"));
        assert!(store.is_synced());
        let (reloaded, _) = reload(&storage);
        assert_eq!(reloaded.len(), 5);
    }

    #[test]
    fn test_find_by_position_id_and_name() {
        let (store, _) = memory_store();
        let second = store.projects()[1].clone();

        assert_eq!(store.find("2"), Some(&second));
        assert_eq!(store.find(&second.id.short()), Some(&second));
        assert_eq!(store.find(&second.id.to_string()), Some(&second));
        assert_eq!(store.find("Project B"), Some(&second));
        assert!(store.find("0").is_none());
        assert!(store.find("Project Z").is_none());
        assert!(store.find("  ").is_none());
    }

    #[test]
    fn test_file_backed_store_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, outcome) =
            ProjectStore::open(Box::new(FileStorage::new(temp_dir.path())));
        assert_eq!(outcome, LoadOutcome::Seeded);
        store.add(draft("Disk"));

        let (reloaded, outcome) =
            ProjectStore::open(Box::new(FileStorage::new(temp_dir.path())));
        assert_eq!(outcome, LoadOutcome::Restored);
        assert_eq!(reloaded.projects(), store.projects());
    }
}
