pub mod commands;
pub mod config;
pub mod error;
pub mod launcher;
pub mod output;
pub mod platform;
pub mod project;
pub mod prompt;
pub mod storage;
pub mod store;
pub mod tray;
pub mod ui;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{DevdeckError, Result};
pub use project::{ProjectDraft, ProjectId, ProjectRecord};
pub use store::{LoadOutcome, ProjectStore};
pub use view::ProjectListView;
