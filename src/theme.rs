//! Light/dark site theme and the default backdrop colors derived from it

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::Rgba;

/// Site-wide color theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Value stored in `localStorage.theme`
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// A stored preference wins; without one, follow the system color scheme.
    /// Unrecognized stored values count as no preference.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored.and_then(|s| s.parse().ok()) {
            Some(theme) => theme,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Site accent ("highlight") color
pub const HIGHLIGHT: Rgba = Rgba::rgb(59, 130, 246);

/// Blue-white used for nodes and lines on dark backgrounds
const DARK_INK: Rgba = Rgba::rgb(210, 230, 255);

/// Default backdrop colors for a theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeColors {
    pub node: Rgba,
    pub line: Rgba,
    pub highlight: Rgba,
}

impl ThemeColors {
    pub fn for_theme(theme: Theme) -> Self {
        let ink = match theme {
            Theme::Dark => DARK_INK,
            Theme::Light => HIGHLIGHT,
        };
        Self {
            node: ink.with_alpha(0.9),
            line: ink.with_alpha(0.5),
            highlight: HIGHLIGHT,
        }
    }
}

/// egui visuals for the preview window, one per theme
#[cfg(feature = "preview")]
pub mod visuals {
    use super::Theme;
    use egui::Color32;

    pub const BG_DARK: Color32 = Color32::from_rgb(10, 12, 20);
    pub const BG_LIGHT: Color32 = Color32::from_rgb(248, 250, 252);

    pub fn background(theme: Theme) -> Color32 {
        match theme {
            Theme::Dark => BG_DARK,
            Theme::Light => BG_LIGHT,
        }
    }

    pub fn for_theme(theme: Theme) -> egui::Visuals {
        let mut visuals = match theme {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };

        let bg = background(theme);
        visuals.panel_fill = bg;
        visuals.window_fill = bg;
        visuals.extreme_bg_color = bg;

        // Flat, backdrop-first look
        visuals.window_shadow = egui::Shadow::NONE;
        visuals.popup_shadow = egui::Shadow::NONE;

        visuals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins_over_system() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn falls_back_to_system_preference() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert_eq!(Theme::Dark.as_str().parse::<Theme>(), Ok(Theme::Dark));
    }

    #[test]
    fn dark_theme_uses_blue_white_ink() {
        let colors = ThemeColors::for_theme(Theme::Dark);
        assert_eq!(colors.node, Rgba::new(210, 230, 255, 0.9));
        assert_eq!(colors.line, Rgba::new(210, 230, 255, 0.5));
        assert_eq!(ThemeColors::for_theme(Theme::Light).node, HIGHLIGHT.with_alpha(0.9));
    }
}
