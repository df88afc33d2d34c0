//! Styles for the noteapp terminal client.
//!
//! Renderers never pick colors themselves. They ask the theme for a semantic
//! style name (`row-title`, `row-date`, `success`, ...) and the theme maps that
//! name to a `console::Style`. Changing the look means editing this file only.
//!
//! The palette follows the light grey surfaces of the app bar and note rows.
//! All styles are registered once through `once_cell::sync::Lazy`.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared by the renderers.
pub mod names {
    pub const APP_BAR: &str = "app-bar";
    pub const LABEL: &str = "label";
    pub const FIELD: &str = "field";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const BUTTON: &str = "button";
    pub const DIVIDER: &str = "divider";
    pub const ROW_INDEX: &str = "row-index";
    pub const ROW_TITLE: &str = "row-title";
    pub const ROW_DESCRIPTION: &str = "row-description";
    pub const ROW_DATE: &str = "row-date";
    pub const MUTED: &str = "muted";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const WARNING: &str = "warning";
}

/// Named styles.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Applies the named style. Unknown names and `use_color == false` give
    /// the text back unchanged.
    pub fn paint(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            _ => text.to_string(),
        }
    }
}

/// Maps an RGB color onto the 6x6x6 cube of the 256-color palette.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    let level = |c: u8| -> u8 { ((u16::from(c) * 5 + 127) / 255) as u8 };
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

pub static NOTE_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let surface = rgb_to_ansi256((0xDA, 0xDF, 0xE3));
    let muted = Style::new().color256(rgb_to_ansi256((115, 115, 115)));

    Theme::new()
        .add(names::APP_BAR, Style::new().black().on_color256(surface).bold())
        .add(names::LABEL, muted.clone())
        .add(names::FIELD, Style::new().bold())
        .add(names::PLACEHOLDER, muted.clone().italic())
        .add(names::BUTTON, Style::new().black().on_color256(surface))
        .add(
            names::DIVIDER,
            Style::new().color256(rgb_to_ansi256((173, 173, 173))),
        )
        .add(
            names::ROW_INDEX,
            Style::new().color256(rgb_to_ansi256((196, 140, 0))),
        )
        .add(names::ROW_TITLE, Style::new().bold())
        .add(names::ROW_DESCRIPTION, Style::new())
        .add(names::ROW_DATE, muted.clone().italic())
        .add(names::MUTED, muted.clone())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
        .add(names::WARNING, Style::new().yellow().bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_without_color_is_plain() {
        assert_eq!(NOTE_THEME.paint(names::ROW_TITLE, "Trip", false), "Trip");
    }

    #[test]
    fn paint_with_color_adds_escapes() {
        let painted = NOTE_THEME.paint(names::SUCCESS, "Note Added", true);
        assert!(painted.contains("Note Added"));
        assert!(painted.contains('\u{1b}'));
    }

    #[test]
    fn unknown_style_is_plain() {
        assert_eq!(NOTE_THEME.paint("nope", "x", true), "x");
    }

    #[test]
    fn rgb_cube_corners() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
    }
}
