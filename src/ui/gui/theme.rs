//! Theme for the devdeck window.
//!
//! A light, neutral palette with one accent color and semantic colors for
//! info, warning and error messages.

use eframe::egui::{self, Color32, Rounding, Stroke, Style, Visuals};

/// Spacing scale, in points.
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 24.0;
    pub const XXL: f32 = 32.0;
}

pub mod rounding {
    pub const CARD: f32 = 8.0;
    pub const BUTTON: f32 = 4.0;
}

pub mod shadow {
    use super::Color32;
    use eframe::egui::Shadow;

    const SHADOW_BASE: Color32 = Color32::from_rgba_premultiplied(20, 24, 32, 255);

    fn with_alpha(alpha: u8) -> Color32 {
        Color32::from_rgba_premultiplied(SHADOW_BASE.r(), SHADOW_BASE.g(), SHADOW_BASE.b(), alpha)
    }

    /// Resting project cards.
    pub fn subtle() -> Shadow {
        Shadow {
            offset: [0.0, 1.0].into(),
            blur: 3.0,
            spread: 0.0,
            color: with_alpha(12),
        }
    }

    /// Hovered cards and menus.
    pub fn medium() -> Shadow {
        Shadow {
            offset: [0.0, 2.0].into(),
            blur: 8.0,
            spread: 0.0,
            color: with_alpha(18),
        }
    }

    /// Modal dialogs.
    pub fn elevated() -> Shadow {
        Shadow {
            offset: [0.0, 4.0].into(),
            blur: 16.0,
            spread: 0.0,
            color: with_alpha(28),
        }
    }
}

pub mod colors {
    use super::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgb(247, 248, 250);
    pub const SURFACE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const SURFACE_HOVER: Color32 = Color32::from_rgb(240, 242, 245);
    pub const SURFACE_SELECTED: Color32 = Color32::from_rgb(230, 233, 238);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(28, 28, 30);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(88, 92, 100);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(142, 142, 147);

    pub const BORDER: Color32 = Color32::from_rgb(224, 227, 232);
    pub const BORDER_FOCUSED: Color32 = Color32::from_rgb(196, 201, 210);
    pub const SEPARATOR: Color32 = Color32::from_rgb(224, 227, 232);

    pub const ACCENT: Color32 = Color32::from_rgb(0, 122, 255);
    pub const ACCENT_SUBTLE: Color32 = Color32::from_rgb(230, 244, 255);

    pub const STATUS_INFO: Color32 = Color32::from_rgb(0, 149, 255);
    pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 149, 0);
    pub const STATUS_ERROR: Color32 = Color32::from_rgb(255, 59, 48);

    pub const STATUS_INFO_BG: Color32 = Color32::from_rgb(230, 244, 255);
    pub const STATUS_WARNING_BG: Color32 = Color32::from_rgb(255, 244, 230);
    pub const STATUS_ERROR_BG: Color32 = Color32::from_rgb(255, 235, 234);
}

pub fn configure_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = colors::SURFACE;
    visuals.panel_fill = colors::BACKGROUND;
    visuals.faint_bg_color = colors::SURFACE_HOVER;
    visuals.extreme_bg_color = colors::SURFACE;

    visuals.selection.bg_fill = colors::ACCENT_SUBTLE;
    visuals.selection.stroke = Stroke::new(1.0, colors::ACCENT);
    visuals.hyperlink_color = colors::ACCENT;

    visuals.window_shadow = shadow::elevated();
    visuals.popup_shadow = shadow::medium();
    visuals.window_stroke = Stroke::new(1.0, colors::BORDER);
    visuals.window_rounding = Rounding::same(rounding::CARD);
    visuals.menu_rounding = Rounding::same(rounding::BUTTON);
    visuals.text_cursor.stroke = Stroke::new(2.0, colors::ACCENT);

    let widgets = &mut visuals.widgets;
    for (state, fill, stroke) in [
        (&mut widgets.noninteractive, colors::SURFACE, colors::BORDER),
        (&mut widgets.inactive, colors::SURFACE, colors::BORDER),
        (&mut widgets.hovered, colors::SURFACE_HOVER, colors::BORDER_FOCUSED),
        (&mut widgets.active, colors::SURFACE_SELECTED, colors::ACCENT),
        (&mut widgets.open, colors::SURFACE, colors::ACCENT),
    ] {
        state.bg_fill = fill;
        state.weak_bg_fill = fill;
        state.bg_stroke = Stroke::new(1.0, stroke);
        state.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);
        state.rounding = Rounding::same(rounding::BUTTON);
    }

    visuals
}

pub fn configure_style() -> Style {
    let default_style = Style::default();
    let mut style_spacing = default_style.spacing.clone();
    style_spacing.item_spacing = egui::vec2(spacing::SM, spacing::XS);
    style_spacing.window_margin = egui::Margin::same(spacing::LG);
    style_spacing.button_padding = egui::vec2(spacing::MD, 6.0);
    style_spacing.menu_margin = egui::Margin::same(spacing::SM);
    style_spacing.text_edit_width = 320.0;

    Style {
        visuals: configure_visuals(),
        spacing: style_spacing,
        animation_time: 0.1,
        ..Default::default()
    }
}

/// Apply the theme to a context. Call once at startup, after typography.
pub fn init(ctx: &egui::Context) {
    let text_styles = ctx.style().text_styles.clone();
    let mut style = configure_style();
    style.text_styles = text_styles;
    ctx.set_style(style);
}
