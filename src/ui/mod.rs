//! User interfaces for devdeck.
//!
//! - [`gui`] - native window using eframe/egui

pub mod gui;
