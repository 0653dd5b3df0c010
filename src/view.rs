//! The project list view: turns store contents into a drawable surface and
//! user intents into store mutations.
//!
//! The view owns the store. Its own state is limited to the form modal, the
//! dialog on top of it and any pending notices. Every handler takes a typed
//! [`ProjectId`]; nothing is re-derived from what was drawn.

use crate::launcher::Launcher;
use crate::project::{ProjectDraft, ProjectId};
use crate::storage::Storage;
use crate::store::ProjectStore;
use crate::tray::version_info;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// Message shown instead of items when the list is empty.
pub const EMPTY_PLACEHOLDER: &str = "No projects yet. Add one to get started.";

/// Chooses a folder for the project path field.
pub trait FolderPicker {
    fn pick_folder(&self, start: Option<&Path>) -> Option<PathBuf>;
}

/// The platform's native folder dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFolderPicker;

impl FolderPicker for NativeFolderPicker {
    fn pick_folder(&self, start: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_title("Select project folder");
        if let Some(dir) = start.filter(|d| d.is_dir()) {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_folder()
    }
}

/// One drawable project entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: ProjectId,
    pub name: String,
    pub path: String,
    /// The open-repository action is greyed out when false.
    pub repo_enabled: bool,
}

/// What the project list currently looks like. The add control is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSurface {
    Empty { placeholder: &'static str },
    Items(Vec<ProjectItem>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(ProjectId),
}

/// The add/edit form and its current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectForm {
    pub mode: FormMode,
    pub draft: ProjectDraft,
}

impl ProjectForm {
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add Project",
            FormMode::Edit(_) => "Edit Project",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open(ProjectForm),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// A blocking dialog. Only one is shown at a time; a newer one replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Message {
        level: MessageLevel,
        title: String,
        body: String,
    },
    ConfirmDelete {
        id: ProjectId,
        name: String,
    },
}

/// The user's answer to a [`Dialog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResponse {
    /// OK on a message, "yes" on a confirmation.
    Accept,
    /// Cancel, Escape or a click outside.
    Dismiss,
}

/// A non-blocking message shown alongside the list until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: MessageLevel,
    pub message: String,
}

pub struct ProjectListView {
    store: ProjectStore,
    launcher: Launcher,
    picker: Box<dyn FolderPicker>,
    modal: ModalState,
    dialog: Option<Dialog>,
    notices: Vec<Notice>,
    revision: u64,
}

impl ProjectListView {
    /// Load the store from `storage` and build the view around it.
    pub fn start(
        storage: Box<dyn Storage>,
        launcher: Launcher,
        picker: Box<dyn FolderPicker>,
    ) -> Self {
        let (store, outcome) = ProjectStore::open(storage);
        let mut view = Self::new(store, launcher, picker);
        if let Some(message) = outcome.notice() {
            view.push_notice(MessageLevel::Warning, message);
        }
        view
    }

    /// Build a view around an already loaded store.
    pub fn new(store: ProjectStore, launcher: Launcher, picker: Box<dyn FolderPicker>) -> Self {
        Self {
            store,
            launcher,
            picker,
            modal: ModalState::Closed,
            dialog: None,
            notices: Vec::new(),
            revision: 0,
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn surface(&self) -> ListSurface {
        if self.store.is_empty() {
            return ListSurface::Empty {
                placeholder: EMPTY_PLACEHOLDER,
            };
        }
        ListSurface::Items(
            self.store
                .projects()
                .iter()
                .map(|p| ProjectItem {
                    id: p.id,
                    name: p.name.clone(),
                    path: p.path.clone(),
                    repo_enabled: p.has_repo(),
                })
                .collect(),
        )
    }

    /// Bumped after every mutation so the shell knows to redraw.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn changed(&mut self) {
        self.revision += 1;
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn form_mut(&mut self) -> Option<&mut ProjectForm> {
        match &mut self.modal {
            ModalState::Open(form) => Some(form),
            ModalState::Closed => None,
        }
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn dismiss_notice(&mut self, index: usize) {
        if index < self.notices.len() {
            self.notices.remove(index);
        }
    }

    fn push_notice(&mut self, level: MessageLevel, message: String) {
        self.notices.push(Notice { level, message });
    }

    fn show_message(&mut self, level: MessageLevel, title: &str, body: String) {
        self.dialog = Some(Dialog::Message {
            level,
            title: title.to_string(),
            body,
        });
    }

    // ========================================================================
    // Open actions
    // ========================================================================

    /// Open the project's folder in the editor.
    ///
    /// A failure becomes a notice naming the path as stored, before expansion.
    pub fn open_project(&mut self, id: ProjectId) {
        let Some(path) = self.store.get(id).map(|p| p.path.clone()) else {
            warn!(%id, "open ignored: unknown project");
            return;
        };
        if let Err(e) = self.launcher.open_project(&path) {
            error!(error = %e, %path, "failed to open project");
            let editor = self.launcher.editor().program.clone();
            self.push_notice(
                MessageLevel::Error,
                format!(
                    "Could not open project in the editor. Make sure '{editor}' is installed and on your PATH.\nPath: {path}"
                ),
            );
        }
    }

    /// Open the project's repository URL, or explain that none is set.
    pub fn open_repository(&mut self, id: ProjectId) {
        let Some(project) = self.store.get(id) else {
            warn!(%id, "open repository ignored: unknown project");
            return;
        };
        if !project.has_repo() {
            let body = format!("No repository URL is configured for '{}'.", project.name);
            self.show_message(MessageLevel::Info, "Repository", body);
            return;
        }
        let url = project.repo.trim().to_string();
        if let Err(e) = self.launcher.open_url(&url) {
            warn!(error = %e, %url, "failed to open repository");
        }
    }

    // ========================================================================
    // Add / edit form
    // ========================================================================

    pub fn show_add_form(&mut self) {
        self.modal = ModalState::Open(ProjectForm {
            mode: FormMode::Add,
            draft: ProjectDraft::default(),
        });
    }

    pub fn show_edit_form(&mut self, id: ProjectId) {
        let Some(project) = self.store.get(id) else {
            warn!(%id, "edit ignored: unknown project");
            return;
        };
        self.modal = ModalState::Open(ProjectForm {
            mode: FormMode::Edit(id),
            draft: project.to_draft(),
        });
    }

    /// Fill the form's path from the folder picker. Cancelling the picker changes nothing.
    pub fn browse_for_path(&mut self) {
        let ModalState::Open(form) = &mut self.modal else {
            return;
        };
        let current = form.draft.path.trim();
        let start = (!current.is_empty()).then(|| PathBuf::from(current));
        if let Some(dir) = self.picker.pick_folder(start.as_deref()) {
            form.draft.path = dir.display().to_string();
        }
    }

    /// Validate and save the form. Returns true when the form closed.
    ///
    /// Invalid input raises a blocking error dialog and keeps the form open.
    pub fn submit_form(&mut self) -> bool {
        let (mode, validated) = match &self.modal {
            ModalState::Open(form) => (form.mode, form.draft.validate()),
            ModalState::Closed => return false,
        };
        let draft = match validated {
            Ok(draft) => draft,
            Err(e) => {
                self.show_message(
                    MessageLevel::Error,
                    "Missing information",
                    capitalize(&e.to_string()),
                );
                return false;
            }
        };
        match mode {
            FormMode::Add => {
                self.store.add(draft);
            }
            FormMode::Edit(id) => {
                if !self.store.update(id, draft) {
                    self.modal = ModalState::Closed;
                    self.show_message(
                        MessageLevel::Error,
                        "Project not found",
                        "This project was removed before the changes were saved.".to_string(),
                    );
                    return true;
                }
            }
        }
        self.modal = ModalState::Closed;
        self.changed();
        true
    }

    pub fn cancel_form(&mut self) {
        self.modal = ModalState::Closed;
    }

    // ========================================================================
    // Delete
    // ========================================================================

    /// Ask the user to confirm deleting the project.
    pub fn confirm_delete(&mut self, id: ProjectId) {
        let Some(project) = self.store.get(id) else {
            warn!(%id, "delete ignored: unknown project");
            return;
        };
        self.dialog = Some(Dialog::ConfirmDelete {
            id,
            name: project.name.clone(),
        });
    }

    /// Close the current dialog, acting on an accepted delete confirmation.
    pub fn resolve_dialog(&mut self, response: DialogResponse) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };
        if let (Dialog::ConfirmDelete { id, .. }, DialogResponse::Accept) = (dialog, response) {
            if self.store.delete(id).is_some() {
                self.changed();
            }
        }
    }

    pub fn show_version(&mut self) {
        self.show_message(MessageLevel::Info, "Version Information", version_info());
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
