//! Project cards, notice banners and small display helpers.

use crate::ui::gui::theme::{colors, rounding, shadow, spacing};
use crate::ui::gui::typography::{self, FontSize, FontWeight};
use crate::view::{MessageLevel, Notice, ProjectItem};
use eframe::egui::{self, Color32, Rounding, Sense, Stroke};

/// Longest path shown on a card before it is shortened.
pub const MAX_PATH_CHARS: usize = 60;

/// What the user clicked on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Open,
    Edit,
    Delete,
    OpenRepository,
}

/// Foreground and background colors for a message level.
pub fn level_colors(level: MessageLevel) -> (Color32, Color32) {
    match level {
        MessageLevel::Info => (colors::STATUS_INFO, colors::STATUS_INFO_BG),
        MessageLevel::Warning => (colors::STATUS_WARNING, colors::STATUS_WARNING_BG),
        MessageLevel::Error => (colors::STATUS_ERROR, colors::STATUS_ERROR_BG),
    }
}

/// Shorten `path` to at most `max_chars` characters, keeping its end.
///
/// The tail of a path is the part that tells projects apart, so the cut
/// happens at the front. Unicode-safe.
pub fn shorten_path(path: &str, max_chars: usize) -> String {
    let count = path.chars().count();
    if count <= max_chars {
        return path.to_string();
    }
    if max_chars <= 3 {
        return path.chars().skip(count - max_chars).collect();
    }
    let keep = max_chars - 3;
    let tail: String = path.chars().skip(count - keep).collect();
    // Prefer starting at a separator so no directory name is cut in half.
    match tail.find(['/', '\\']) {
        Some(i) if i + 1 < tail.len() => format!("...{}", &tail[i..]),
        _ => format!("...{tail}"),
    }
}

/// Draw one project card and report which of its actions was clicked.
pub fn project_card(ui: &mut egui::Ui, item: &ProjectItem) -> Option<CardAction> {
    let mut action = None;

    egui::Frame::none()
        .fill(colors::SURFACE)
        .rounding(Rounding::same(rounding::CARD))
        .shadow(shadow::subtle())
        .stroke(Stroke::new(1.0, colors::BORDER))
        .inner_margin(egui::Margin::same(spacing::LG))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let body = ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&item.name)
                            .font(typography::font(FontSize::Large, FontWeight::SemiBold))
                            .color(colors::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(shorten_path(&item.path, MAX_PATH_CHARS))
                            .font(typography::mono(FontSize::Small))
                            .color(colors::TEXT_SECONDARY),
                    )
                    .on_hover_text(&item.path);
                });
                let body = body
                    .response
                    .interact(Sense::click())
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .on_hover_text("Open in editor");
                if body.clicked() {
                    action = Some(CardAction::Open);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(egui::Button::new(
                            egui::RichText::new("Delete").color(colors::STATUS_ERROR),
                        ))
                        .clicked()
                    {
                        action = Some(CardAction::Delete);
                    }
                    if ui.button("Edit").clicked() {
                        action = Some(CardAction::Edit);
                    }
                    let repo = ui
                        .add_enabled(item.repo_enabled, egui::Button::new("Repository"))
                        .on_disabled_hover_text("No repository URL configured");
                    if repo.clicked() {
                        action = Some(CardAction::OpenRepository);
                    }
                });
            });
        });

    action
}

/// Draw a dismissible banner. Returns true when its close button was clicked.
pub fn notice_banner(ui: &mut egui::Ui, notice: &Notice) -> bool {
    let (fg, bg) = level_colors(notice.level);
    let mut dismissed = false;

    egui::Frame::none()
        .fill(bg)
        .rounding(Rounding::same(rounding::BUTTON))
        .stroke(Stroke::new(1.0, fg))
        .inner_margin(egui::Margin::symmetric(spacing::MD, spacing::SM))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&notice.message)
                        .font(typography::font(FontSize::Body, FontWeight::Regular))
                        .color(colors::TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        dismissed = true;
                    }
                });
            });
        });

    dismissed
}

/// A small colored dot followed by a label.
pub fn status_label(ui: &mut egui::Ui, color: Color32, text: &str) -> egui::Response {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), Sense::hover());
        ui.painter().circle_filled(rect.center(), 4.0, color);
        ui.label(
            egui::RichText::new(text)
                .font(typography::font(FontSize::Small, FontWeight::Medium))
                .color(color),
        );
    })
    .response
}
