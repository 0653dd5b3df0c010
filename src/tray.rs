//! The tray menu: a fixed set of items and the commands they dispatch.
//!
//! The menu is a plain model; the GUI shows it as a system tray icon.

use crate::platform::Platform;
use tracing::info;

/// How the application was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// A native window is open.
    Window,
    /// Headless command-line use.
    Cli,
}

/// What a tray item asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayCommand {
    ShowVersion,
    ShowProjects,
    Quit,
}

impl TrayCommand {
    /// Map a menu item id to its command. Separators and unknown ids map to nothing.
    pub fn from_item_id(id: &str) -> Option<Self> {
        match id {
            "VERSION" => Some(TrayCommand::ShowVersion),
            "PROJECTS" => Some(TrayCommand::ShowProjects),
            "QUIT" => Some(TrayCommand::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayMenuItem {
    Action { id: &'static str, text: &'static str },
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayMenu {
    items: Vec<TrayMenuItem>,
}

impl TrayMenu {
    /// The menu shown by devdeck: version, projects, quit.
    pub fn standard() -> Self {
        Self {
            items: vec![
                TrayMenuItem::Action {
                    id: "VERSION",
                    text: "Get version",
                },
                TrayMenuItem::Separator,
                TrayMenuItem::Action {
                    id: "PROJECTS",
                    text: "Show Projects",
                },
                TrayMenuItem::Separator,
                TrayMenuItem::Action {
                    id: "QUIT",
                    text: "Quit",
                },
            ],
        }
    }

    /// The standard menu if the platform and run mode allow one.
    pub fn for_environment(platform: Platform, mode: RunMode) -> Option<Self> {
        if !platform.supports_tray() {
            info!(%platform, "tray menu disabled on this platform");
            return None;
        }
        if mode != RunMode::Window {
            info!("tray menu is only available in window mode");
            return None;
        }
        Some(Self::standard())
    }

    pub fn items(&self) -> &[TrayMenuItem] {
        &self.items
    }
}

/// Text shown by the version dialog.
pub fn version_info() -> String {
    format!(
        "devdeck v{}\nPlatform: {}",
        env!("CARGO_PKG_VERSION"),
        Platform::current()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_menu_layout() {
        let menu = TrayMenu::standard();
        let commands: Vec<Option<TrayCommand>> = menu
            .items()
            .iter()
            .map(|item| match item {
                TrayMenuItem::Action { id, .. } => TrayCommand::from_item_id(id),
                TrayMenuItem::Separator => None,
            })
            .collect();
        assert_eq!(
            commands,
            vec![
                Some(TrayCommand::ShowVersion),
                None,
                Some(TrayCommand::ShowProjects),
                None,
                Some(TrayCommand::Quit),
            ]
        );
    }

    #[test]
    fn test_item_ids_dispatch_commands() {
        assert_eq!(
            TrayCommand::from_item_id("VERSION"),
            Some(TrayCommand::ShowVersion)
        );
        assert_eq!(
            TrayCommand::from_item_id("PROJECTS"),
            Some(TrayCommand::ShowProjects)
        );
        assert_eq!(TrayCommand::from_item_id("QUIT"), Some(TrayCommand::Quit));
        assert_eq!(TrayCommand::from_item_id("SEP"), None);
    }

    #[test]
    fn test_menu_disabled_on_macos() {
        assert!(TrayMenu::for_environment(Platform::MacOs, RunMode::Window).is_none());
    }

    #[test]
    fn test_menu_disabled_outside_window_mode() {
        assert!(TrayMenu::for_environment(Platform::Unix, RunMode::Cli).is_none());
    }

    #[test]
    fn test_menu_enabled_in_window_mode() {
        assert_eq!(
            TrayMenu::for_environment(Platform::Windows, RunMode::Window),
            Some(TrayMenu::standard())
        );
    }

    #[test]
    fn test_version_info_mentions_version() {
        assert!(version_info().contains(env!("CARGO_PKG_VERSION")));
    }
}
