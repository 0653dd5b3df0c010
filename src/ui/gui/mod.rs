//! Native GUI for devdeck using eframe/egui.

pub mod app;
pub mod components;
pub mod modal;
pub mod system_tray;
pub mod theme;
pub mod typography;

pub use app::run_gui;
