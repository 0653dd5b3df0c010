//! GUI command handler.

use super::build_launcher;
use crate::config::load_config;
use crate::error::Result;
use crate::platform::Platform;
use crate::storage::FileStorage;
use crate::tray::{RunMode, TrayMenu};
use crate::ui::gui::run_gui;
use crate::view::{NativeFolderPicker, ProjectListView};
use tracing::info;

/// Load the projects and open the window. Returns when the window closes.
pub fn gui_command() -> Result<()> {
    let config = load_config()?;
    let data_dir = config.resolved_data_dir()?;
    info!(data_dir = %data_dir.display(), "starting devdeck");

    let view = ProjectListView::start(
        Box::new(FileStorage::new(data_dir)),
        build_launcher(&config),
        Box::new(NativeFolderPicker),
    );
    let tray = TrayMenu::for_environment(Platform::current(), RunMode::Window);
    run_gui(view, tray)
}
