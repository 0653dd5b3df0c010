//! Modal dialogs drawn inside the window.
//!
//! A modal draws a backdrop that swallows clicks, a centered card with a
//! title, a body and a right-aligned button row. Escape cancels.
//!
//! ```ignore
//! let action = Modal::new("Delete project")
//!     .message("Delete 'Site'?")
//!     .confirm_button(ModalButton::destructive("Delete"))
//!     .show(ctx);
//! ```

use eframe::egui::{self, Color32, Key, Order, Pos2, Rounding, Sense, Stroke};

use crate::ui::gui::theme::{colors, rounding, shadow, spacing};
use crate::ui::gui::typography::{self, FontSize, FontWeight};

const DIALOG_WIDTH: f32 = 420.0;
const DIALOG_PADDING: f32 = spacing::XL;
const BUTTON_HEIGHT: f32 = 32.0;
const BUTTON_WIDTH: f32 = 96.0;
const BUTTON_GAP: f32 = spacing::MD;
const BACKDROP_ALPHA: u8 = 110;

#[derive(Debug, Clone)]
pub struct ModalButton {
    pub label: String,
    pub fill_color: Color32,
    pub text_color: Color32,
    pub stroke: Option<Stroke>,
}

impl ModalButton {
    /// A primary button in the accent color.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fill_color: colors::ACCENT,
            text_color: Color32::WHITE,
            stroke: None,
        }
    }

    pub fn secondary(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fill_color: colors::SURFACE,
            text_color: colors::TEXT_PRIMARY,
            stroke: Some(Stroke::new(1.0, colors::BORDER)),
        }
    }

    pub fn destructive(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fill_color: colors::STATUS_ERROR,
            text_color: Color32::WHITE,
            stroke: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Confirmed,
    /// Cancel button, backdrop click or Escape.
    Cancelled,
    /// Still open.
    None,
}

#[derive(Debug, Clone)]
pub struct Modal {
    id: String,
    title: String,
    title_color: Color32,
    message: String,
    cancel_button: Option<ModalButton>,
    confirm_button: ModalButton,
    width: f32,
    dismiss_on_backdrop: bool,
    order: Order,
}

impl Modal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: "modal".to_string(),
            title: title.into(),
            title_color: colors::TEXT_PRIMARY,
            message: String::new(),
            cancel_button: Some(ModalButton::secondary("Cancel")),
            confirm_button: ModalButton::new("OK"),
            width: DIALOG_WIDTH,
            dismiss_on_backdrop: true,
            order: Order::Foreground,
        }
    }

    /// Distinguishes modals that can be layered on top of each other.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title_color(mut self, color: Color32) -> Self {
        self.title_color = color;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn cancel_button(mut self, button: ModalButton) -> Self {
        self.cancel_button = Some(button);
        self
    }

    /// Single-button modals for information and errors.
    pub fn no_cancel_button(mut self) -> Self {
        self.cancel_button = None;
        self
    }

    pub fn confirm_button(mut self, button: ModalButton) -> Self {
        self.confirm_button = button;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Keep the modal open when the backdrop is clicked. Forms use this so
    /// a stray click doesn't throw away typed input.
    pub fn keep_open_on_backdrop(mut self) -> Self {
        self.dismiss_on_backdrop = false;
        self
    }

    /// Draw above modals on the default layer.
    pub fn on_top(mut self) -> Self {
        self.order = Order::Tooltip;
        self
    }

    /// Draw a message modal.
    pub fn show(&self, ctx: &egui::Context) -> ModalAction {
        self.show_with(ctx, |_| {})
    }

    /// Draw the modal with extra content between the message and the buttons.
    pub fn show_with(&self, ctx: &egui::Context, body: impl FnOnce(&mut egui::Ui)) -> ModalAction {
        self.show_layered(ctx, true, body)
    }

    /// Like [`Modal::show_with`]. With `interactive` false the modal is drawn
    /// but ignores input, for when another modal sits above it.
    pub fn show_layered(
        &self,
        ctx: &egui::Context,
        interactive: bool,
        body: impl FnOnce(&mut egui::Ui),
    ) -> ModalAction {
        let mut action = ModalAction::None;
        self.render_backdrop(ctx, interactive, &mut action);
        self.render_dialog(ctx, interactive, body, &mut action);

        if interactive && ctx.input(|i| i.key_pressed(Key::Escape)) {
            action = ModalAction::Cancelled;
        }
        action
    }

    fn render_backdrop(&self, ctx: &egui::Context, interactive: bool, action: &mut ModalAction) {
        let screen_rect = ctx.screen_rect();

        egui::Area::new(egui::Id::new(format!("{}_backdrop", self.id)))
            .order(self.order)
            .fixed_pos(Pos2::ZERO)
            .interactable(interactive)
            .show(ctx, |ui| {
                ui.painter().rect_filled(
                    screen_rect,
                    Rounding::ZERO,
                    Color32::from_rgba_unmultiplied(0, 0, 0, BACKDROP_ALPHA),
                );
                let (_, response) = ui.allocate_exact_size(screen_rect.size(), Sense::click());
                if response.clicked() && self.dismiss_on_backdrop {
                    *action = ModalAction::Cancelled;
                }
            });
    }

    fn render_dialog(
        &self,
        ctx: &egui::Context,
        interactive: bool,
        body: impl FnOnce(&mut egui::Ui),
        action: &mut ModalAction,
    ) {
        let screen_rect = ctx.screen_rect();
        let x = ((screen_rect.width() - self.width) / 2.0).max(0.0);
        let y = (screen_rect.height() * 0.2).max(spacing::LG);

        egui::Area::new(egui::Id::new(format!("{}_dialog", self.id)))
            .order(self.order)
            .fixed_pos(Pos2::new(x, y))
            .interactable(interactive)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(colors::SURFACE)
                    .rounding(Rounding::same(rounding::CARD))
                    .shadow(shadow::elevated())
                    .stroke(Stroke::new(1.0, colors::BORDER))
                    .inner_margin(egui::Margin::same(DIALOG_PADDING))
                    .show(ui, |ui| {
                        let inner_width = self.width - 2.0 * DIALOG_PADDING;
                        ui.set_min_width(inner_width);
                        ui.set_max_width(inner_width);

                        ui.label(
                            egui::RichText::new(&self.title)
                                .font(typography::font(FontSize::Heading, FontWeight::SemiBold))
                                .color(self.title_color),
                        );
                        ui.add_space(spacing::MD);

                        if !self.message.is_empty() {
                            ui.label(
                                egui::RichText::new(&self.message)
                                    .font(typography::font(FontSize::Body, FontWeight::Regular))
                                    .color(colors::TEXT_SECONDARY),
                            );
                        }
                        body(ui);
                        ui.add_space(spacing::XL);

                        self.render_buttons(ui, action);
                    });
            });
    }

    fn render_buttons(&self, ui: &mut egui::Ui, action: &mut ModalAction) {
        ui.horizontal(|ui| {
            let count = if self.cancel_button.is_some() { 2.0 } else { 1.0 };
            let total = count * BUTTON_WIDTH + (count - 1.0) * BUTTON_GAP;
            ui.add_space((ui.available_width() - total).max(0.0));

            if let Some(cancel) = &self.cancel_button {
                if render_button(ui, cancel).clicked() {
                    *action = ModalAction::Cancelled;
                }
                ui.add_space(BUTTON_GAP);
            }
            if render_button(ui, &self.confirm_button).clicked() {
                *action = ModalAction::Confirmed;
            }
        });
    }
}

fn render_button(ui: &mut egui::Ui, button: &ModalButton) -> egui::Response {
    let mut btn = egui::Button::new(
        egui::RichText::new(&button.label)
            .font(typography::font(FontSize::Body, FontWeight::Medium))
            .color(button.text_color),
    )
    .fill(button.fill_color)
    .rounding(Rounding::same(rounding::BUTTON));

    if let Some(stroke) = button.stroke {
        btn = btn.stroke(stroke);
    }
    ui.add_sized([BUTTON_WIDTH, BUTTON_HEIGHT], btn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_styles() {
        let primary = ModalButton::new("Save");
        assert_eq!(primary.fill_color, colors::ACCENT);
        assert!(primary.stroke.is_none());

        let secondary = ModalButton::secondary("Cancel");
        assert_eq!(secondary.text_color, colors::TEXT_PRIMARY);
        assert!(secondary.stroke.is_some());

        let destructive = ModalButton::destructive("Delete");
        assert_eq!(destructive.fill_color, colors::STATUS_ERROR);
    }

    #[test]
    fn test_modal_defaults() {
        let modal = Modal::new("Title");
        assert_eq!(modal.id, "modal");
        assert_eq!(modal.confirm_button.label, "OK");
        assert_eq!(modal.cancel_button.as_ref().unwrap().label, "Cancel");
        assert!(modal.dismiss_on_backdrop);
        assert_eq!(modal.width, DIALOG_WIDTH);
        assert_eq!(modal.order, Order::Foreground);
        assert_eq!(Modal::new("Title").on_top().order, Order::Tooltip);
    }

    #[test]
    fn test_modal_builder_chain() {
        let modal = Modal::new("Delete project")
            .id("confirm_delete")
            .message("Delete 'Site'?")
            .cancel_button(ModalButton::secondary("No"))
            .confirm_button(ModalButton::destructive("Yes"))
            .keep_open_on_backdrop()
            .width(380.0);

        assert_eq!(modal.id, "confirm_delete");
        assert_eq!(modal.message, "Delete 'Site'?");
        assert_eq!(modal.cancel_button.as_ref().unwrap().label, "No");
        assert_eq!(modal.confirm_button.label, "Yes");
        assert!(!modal.dismiss_on_backdrop);
        assert_eq!(modal.width, 380.0);
    }

    #[test]
    fn test_single_button_modal() {
        assert!(Modal::new("Info").no_cancel_button().cancel_button.is_none());
    }
}
