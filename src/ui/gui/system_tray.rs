//! The system tray icon carrying the [`TrayMenu`].
//!
//! Menu clicks arrive on a global channel and are drained by the app once
//! per frame.

use crate::error::{DevdeckError, Result};
use crate::tray::{TrayCommand, TrayMenu, TrayMenuItem};
use crate::ui::gui::theme::colors;
use std::fmt;
use tray_icon::menu::{Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const ICON_SIZE: u32 = 32;

pub struct SystemTray {
    // On Linux the icon is owned by the GTK thread.
    #[cfg(not(target_os = "linux"))]
    _icon: TrayIcon,
}

impl SystemTray {
    /// Show the tray icon. Must run on the thread that owns the event loop.
    #[cfg(not(target_os = "linux"))]
    pub fn install(menu: &TrayMenu) -> Result<Self> {
        Ok(Self {
            _icon: build_tray(menu)?,
        })
    }

    /// Show the tray icon from a dedicated GTK thread.
    #[cfg(target_os = "linux")]
    pub fn install(menu: &TrayMenu) -> Result<Self> {
        let menu = menu.clone();
        let (ready_tx, ready_rx) = std::sync::mpsc::channel();
        std::thread::Builder::new()
            .name("devdeck-tray".to_string())
            .spawn(move || {
                if let Err(e) = gtk::init() {
                    let _ = ready_tx.send(Err(tray_error("GTK context", e)));
                    return;
                }
                match build_tray(&menu) {
                    Ok(_icon) => {
                        let _ = ready_tx.send(Ok(()));
                        gtk::main();
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                    }
                }
            })?;
        ready_rx
            .recv()
            .map_err(|_| DevdeckError::GuiError("tray thread exited before starting".to_string()))??;
        Ok(Self {})
    }

    /// Commands clicked since the last poll, oldest first.
    pub fn poll(&self) -> Vec<TrayCommand> {
        commands_for(MenuEvent::receiver().try_iter().map(|event| event.id))
    }
}

fn commands_for(ids: impl IntoIterator<Item = MenuId>) -> Vec<TrayCommand> {
    ids.into_iter()
        .filter_map(|id| TrayCommand::from_item_id(&id.0))
        .collect()
}

fn build_tray(menu: &TrayMenu) -> Result<TrayIcon> {
    let tray_menu = Menu::new();
    for item in menu.items() {
        let appended = match item {
            TrayMenuItem::Action { id, text } => {
                tray_menu.append(&MenuItem::with_id(*id, *text, true, None))
            }
            TrayMenuItem::Separator => tray_menu.append(&PredefinedMenuItem::separator()),
        };
        appended.map_err(|e| tray_error("menu", e))?;
    }

    TrayIconBuilder::new()
        .with_menu(Box::new(tray_menu))
        .with_tooltip("devdeck")
        .with_icon(icon()?)
        .build()
        .map_err(|e| tray_error("icon", e))
}

fn tray_error(what: &str, e: impl fmt::Display) -> DevdeckError {
    DevdeckError::GuiError(format!("failed to create tray {what}: {e}"))
}

fn icon() -> Result<Icon> {
    Icon::from_rgba(icon_rgba(), ICON_SIZE, ICON_SIZE).map_err(|e| tray_error("image", e))
}

/// A filled accent-colored disc on a transparent square.
fn icon_rgba() -> Vec<u8> {
    let center = (ICON_SIZE as f32 - 1.0) / 2.0;
    let radius = ICON_SIZE as f32 / 2.0 - 1.0;
    let color = colors::ACCENT;

    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let alpha = if dx * dx + dy * dy <= radius * radius {
                255
            } else {
                0
            };
            rgba.extend_from_slice(&[color.r(), color.g(), color.b(), alpha]);
        }
    }
    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_ids_map_to_commands_in_click_order() {
        let clicked = ["QUIT", "SEP", "VERSION", "PROJECTS"].map(MenuId::new);
        assert_eq!(
            commands_for(clicked),
            vec![
                TrayCommand::Quit,
                TrayCommand::ShowVersion,
                TrayCommand::ShowProjects
            ]
        );
    }

    #[test]
    fn test_icon_is_an_opaque_disc() {
        let rgba = icon_rgba();
        assert_eq!(rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);

        let alpha_at = |x: u32, y: u32| rgba[((y * ICON_SIZE + x) * 4 + 3) as usize];
        assert_eq!(alpha_at(0, 0), 0);
        assert_eq!(alpha_at(ICON_SIZE - 1, ICON_SIZE - 1), 0);
        assert_eq!(alpha_at(ICON_SIZE / 2, ICON_SIZE / 2), 255);
        assert_eq!(rgba[0], colors::ACCENT.r());
    }
}
