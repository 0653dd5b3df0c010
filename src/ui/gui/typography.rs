//! Type scale for the GUI.
//!
//! devdeck uses egui's bundled fonts. Weight is approximated by size and
//! color since the default families carry a single weight.

use eframe::egui::{self, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSize {
    Caption,
    Small,
    Body,
    Large,
    Heading,
    Title,
}

impl FontSize {
    pub fn pixels(self) -> f32 {
        match self {
            FontSize::Caption => 10.0,
            FontSize::Small => 12.0,
            FontSize::Body => 14.0,
            FontSize::Large => 16.0,
            FontSize::Heading => 18.0,
            FontSize::Title => 24.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontWeight {
    Regular,
    Medium,
    SemiBold,
}

impl FontWeight {
    /// Size boost used to suggest weight with a single-weight family.
    fn boost(self) -> f32 {
        match self {
            FontWeight::Regular => 0.0,
            FontWeight::Medium => 0.5,
            FontWeight::SemiBold => 1.0,
        }
    }
}

pub fn font(size: FontSize, weight: FontWeight) -> FontId {
    FontId::new(size.pixels() + weight.boost(), FontFamily::Proportional)
}

pub fn mono(size: FontSize) -> FontId {
    FontId::new(size.pixels(), FontFamily::Monospace)
}

fn text_styles() -> BTreeMap<TextStyle, FontId> {
    BTreeMap::from([
        (TextStyle::Small, font(FontSize::Small, FontWeight::Regular)),
        (TextStyle::Body, font(FontSize::Body, FontWeight::Regular)),
        (TextStyle::Button, font(FontSize::Body, FontWeight::Medium)),
        (TextStyle::Heading, font(FontSize::Heading, FontWeight::SemiBold)),
        (TextStyle::Monospace, mono(FontSize::Body)),
    ])
}

pub fn init(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles = text_styles();
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_sizes_increase() {
        let sizes = [
            FontSize::Caption,
            FontSize::Small,
            FontSize::Body,
            FontSize::Large,
            FontSize::Heading,
            FontSize::Title,
        ];
        assert!(sizes.windows(2).all(|w| w[0].pixels() < w[1].pixels()));
    }

    #[test]
    fn test_heavier_weights_render_larger() {
        let regular = font(FontSize::Body, FontWeight::Regular);
        let semibold = font(FontSize::Body, FontWeight::SemiBold);
        assert!(semibold.size > regular.size);
        assert_eq!(regular.family, FontFamily::Proportional);
    }

    #[test]
    fn test_text_styles_cover_defaults() {
        let styles = text_styles();
        assert_eq!(styles.len(), 5);
        assert_eq!(styles[&TextStyle::Monospace].family, FontFamily::Monospace);
    }
}
