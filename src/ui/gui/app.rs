//! The devdeck window.
//!
//! The app is a thin shell: everything it draws comes from the
//! [`ProjectListView`] and every click is handed back to it.

use crate::error::{DevdeckError, Result};
use crate::tray::{TrayCommand, TrayMenu};
use crate::ui::gui::components::{self, level_colors, CardAction};
use crate::ui::gui::modal::{Modal, ModalAction, ModalButton};
use crate::ui::gui::system_tray::SystemTray;
use crate::ui::gui::theme::{self, colors, spacing};
use crate::ui::gui::typography::{self, FontSize, FontWeight};
use crate::view::{Dialog, DialogResponse, ListSurface, ProjectListView};
use eframe::egui::{self, Sense, Stroke};
use std::time::Duration;
use tracing::warn;

const DEFAULT_WIDTH: f32 = 720.0;
const DEFAULT_HEIGHT: f32 = 560.0;
const MIN_WIDTH: f32 = 420.0;
const MIN_HEIGHT: f32 = 320.0;
const TITLE_BAR_HEIGHT: f32 = 40.0;
const FORM_LABEL_WIDTH: f32 = 96.0;
/// How often tray clicks are checked while nothing else repaints the window.
const TRAY_POLL_INTERVAL: Duration = Duration::from_millis(200);

pub struct DevdeckApp {
    view: ProjectListView,
    tray: Option<SystemTray>,
    seen_revision: u64,
}

impl DevdeckApp {
    pub fn new(view: ProjectListView, tray: Option<SystemTray>) -> Self {
        let seen_revision = view.revision();
        Self {
            view,
            tray,
            seen_revision,
        }
    }

    fn handle_tray(&mut self, ctx: &egui::Context, command: TrayCommand) {
        match command {
            TrayCommand::ShowVersion => self.view.show_version(),
            TrayCommand::ShowProjects => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
                ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(false));
                ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
            }
            TrayCommand::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    // ========================================================================
    // Title Bar
    // ========================================================================

    fn render_title_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("title_bar")
            .exact_height(TITLE_BAR_HEIGHT)
            .frame(
                egui::Frame::none()
                    .fill(colors::SURFACE)
                    .inner_margin(egui::Margin::symmetric(spacing::LG, spacing::SM))
                    .stroke(Stroke::new(1.0, colors::SEPARATOR)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new("devdeck")
                            .font(typography::font(FontSize::Large, FontWeight::SemiBold))
                            .color(colors::TEXT_PRIMARY),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if !self.view.store().is_synced() {
                            components::status_label(ui, colors::STATUS_WARNING, "Not saved")
                                .on_hover_text(
                                    "The last change could not be written to disk. It will be retried with the next change.",
                                );
                        }
                    });
                });
            });
    }

    // ========================================================================
    // Project List
    // ========================================================================

    fn render_content(&mut self, ui: &mut egui::Ui) {
        let mut dismissed = None;
        for (index, notice) in self.view.notices().iter().enumerate() {
            if components::notice_banner(ui, notice) {
                dismissed = Some(index);
            }
            ui.add_space(spacing::SM);
        }
        if let Some(index) = dismissed {
            self.view.dismiss_notice(index);
        }

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Projects")
                    .font(typography::font(FontSize::Title, FontWeight::SemiBold))
                    .color(colors::TEXT_PRIMARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let add = egui::Button::new(
                    egui::RichText::new("+ Add project").color(egui::Color32::WHITE),
                )
                .fill(colors::ACCENT);
                if ui.add(add).clicked() {
                    self.view.show_add_form();
                }
            });
        });
        ui.add_space(spacing::LG);

        let items = match self.view.surface() {
            ListSurface::Empty { placeholder } => {
                ui.add_space(spacing::XXL);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(placeholder)
                            .font(typography::font(FontSize::Body, FontWeight::Regular))
                            .color(colors::TEXT_MUTED),
                    );
                });
                return;
            }
            ListSurface::Items(items) => items,
        };

        let mut clicked = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for item in &items {
                    if let Some(action) = components::project_card(ui, item) {
                        clicked = Some((item.id, action));
                    }
                    ui.add_space(spacing::MD);
                }
            });

        match clicked {
            Some((id, CardAction::Open)) => self.view.open_project(id),
            Some((id, CardAction::Edit)) => self.view.show_edit_form(id),
            Some((id, CardAction::Delete)) => self.view.confirm_delete(id),
            Some((id, CardAction::OpenRepository)) => self.view.open_repository(id),
            None => {}
        }
    }

    // ========================================================================
    // Modals
    // ========================================================================

    fn render_form(&mut self, ctx: &egui::Context) {
        let interactive = self.view.dialog().is_none();
        let Some(form) = self.view.form_mut() else {
            return;
        };

        let mut browse = false;
        let modal = Modal::new(form.title())
            .id("project_form")
            .confirm_button(ModalButton::new("Save"))
            .keep_open_on_backdrop()
            .width(480.0);
        let action = modal.show_layered(ctx, interactive, |ui| {
            let draft = &mut form.draft;
            form_row(ui, "Name", |ui| {
                ui.add(egui::TextEdit::singleline(&mut draft.name).hint_text("My project"));
            });
            form_row(ui, "Path", |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut draft.path)
                        .hint_text("~/dev/my-project")
                        .desired_width(220.0),
                );
                if ui.button("Browse…").clicked() {
                    browse = true;
                }
            });
            form_row(ui, "Repository", |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut draft.repo)
                        .hint_text("https://github.com/me/my-project (optional)"),
                );
            });
        });

        if browse {
            self.view.browse_for_path();
        }
        match action {
            ModalAction::Confirmed => {
                self.view.submit_form();
            }
            ModalAction::Cancelled => self.view.cancel_form(),
            ModalAction::None => {}
        }
    }

    fn render_dialog(&mut self, ctx: &egui::Context) {
        let modal = match self.view.dialog() {
            None => return,
            Some(Dialog::Message { level, title, body }) => Modal::new(title.as_str())
                .id("message_dialog")
                .title_color(level_colors(*level).0)
                .message(body.as_str())
                .no_cancel_button(),
            Some(Dialog::ConfirmDelete { name, .. }) => Modal::new("Delete project")
                .id("confirm_delete")
                .message(format!("Are you sure you want to delete '{name}'?"))
                .cancel_button(ModalButton::secondary("No"))
                .confirm_button(ModalButton::destructive("Yes")),
        };

        match modal.on_top().show(ctx) {
            ModalAction::Confirmed => self.view.resolve_dialog(DialogResponse::Accept),
            ModalAction::Cancelled => self.view.resolve_dialog(DialogResponse::Dismiss),
            ModalAction::None => {}
        }
    }
}

fn form_row(ui: &mut egui::Ui, label: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.add_space(spacing::SM);
    ui.horizontal(|ui| {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(FORM_LABEL_WIDTH, 20.0), Sense::hover());
        ui.painter().text(
            rect.left_center(),
            egui::Align2::LEFT_CENTER,
            label,
            typography::font(FontSize::Body, FontWeight::Medium),
            colors::TEXT_SECONDARY,
        );
        add_contents(ui);
    });
}

impl eframe::App for DevdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let clicked = self.tray.as_ref().map(SystemTray::poll).unwrap_or_default();
        for command in clicked {
            self.handle_tray(ctx, command);
        }
        if self.tray.is_some() {
            ctx.request_repaint_after(TRAY_POLL_INTERVAL);
        }

        self.render_title_bar(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(colors::BACKGROUND)
                    .inner_margin(egui::Margin::same(spacing::XL)),
            )
            .show(ctx, |ui| {
                self.render_content(ui);
            });

        self.render_form(ctx);
        self.render_dialog(ctx);

        if self.view.revision() != self.seen_revision {
            self.seen_revision = self.view.revision();
            ctx.request_repaint();
        }
    }
}

fn build_viewport() -> egui::ViewportBuilder {
    egui::ViewportBuilder::default()
        .with_title("devdeck")
        .with_inner_size([DEFAULT_WIDTH, DEFAULT_HEIGHT])
        .with_min_inner_size([MIN_WIDTH, MIN_HEIGHT])
}

/// Open the main window and block until it is closed.
///
/// `tray` is shown as a system tray icon when given. A tray that cannot be
/// created is logged and the window opens without it.
pub fn run_gui(view: ProjectListView, tray: Option<TrayMenu>) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: build_viewport(),
        ..Default::default()
    };

    eframe::run_native(
        "devdeck",
        options,
        Box::new(|cc| {
            typography::init(&cc.egui_ctx);
            theme::init(&cc.egui_ctx);
            let tray = tray.and_then(|menu| match SystemTray::install(&menu) {
                Ok(tray) => Some(tray),
                Err(e) => {
                    warn!(error = %e, "system tray unavailable");
                    None
                }
            });
            Ok(Box::new(DevdeckApp::new(view, tray)))
        }),
    )
    .map_err(|e| DevdeckError::GuiError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::{EditorCommand, Launcher};
    use crate::platform::{MapEnvironment, Platform};
    use crate::storage::MemoryStorage;
    use crate::test_utils::{RecordingRunner, StubFolderPicker};

    fn app() -> DevdeckApp {
        let launcher = Launcher::new(
            Box::new(RecordingRunner::new()),
            Box::new(MapEnvironment::new()),
            Platform::Unix,
            EditorCommand::new("code", Vec::new()),
        );
        let view = ProjectListView::start(
            Box::new(MemoryStorage::new()),
            launcher,
            Box::new(StubFolderPicker::default()),
        );
        DevdeckApp::new(view, None)
    }

    #[test]
    fn test_new_app_tracks_current_revision() {
        let app = app();
        assert_eq!(app.seen_revision, app.view.revision());
    }

    #[test]
    fn test_show_version_tray_command_opens_dialog() {
        let mut app = app();
        let ctx = egui::Context::default();
        app.handle_tray(&ctx, TrayCommand::ShowVersion);
        assert!(matches!(app.view.dialog(), Some(Dialog::Message { .. })));
    }

    #[test]
    fn test_window_commands_leave_view_untouched() {
        let mut app = app();
        let ctx = egui::Context::default();
        app.handle_tray(&ctx, TrayCommand::ShowProjects);
        app.handle_tray(&ctx, TrayCommand::Quit);
        assert!(app.view.dialog().is_none());
        assert_eq!(app.view.store().len(), 3);
    }

    #[test]
    fn test_build_viewport_sets_title() {
        let viewport = build_viewport();
        assert_eq!(viewport.title.as_deref(), Some("devdeck"));
    }
}
