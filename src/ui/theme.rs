//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML files. Two are built in (Catppuccin Mocha and Latte) and a
//! custom one can be loaded from disk. Colors are hex strings turned into
//! 24-bit ANSI escapes at render time.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme (default)
//! - `catppuccin-latte`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#cba6f7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! accent = "#f5c2e7"
//! positive = "#a6e3a1"
//! negative = "#f38ba8"
//! chart_line = "#89b4fa"
//! lever_physiology = "#89b4fa"
//! lever_focus = "#a6e3a1"
//! lever_language = "#fab387"
//! lever_imagination = "#cba6f7"
//! ```
//!
//! # Example
//!
//! ```rust
//! use palancas::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! print!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert_eq!(theme.name, "catppuccin-latte");
//! ```

use crate::domain::error::{PalancasError, Result};
use crate::domain::Lever;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card and button foreground.
    pub selection_fg: String,
    /// Selected card and button background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, legends, disabled widgets.
    pub text_dim: String,

    pub border: String,

    /// Text inputs and highlighted statements.
    pub accent: String,
    /// Positive mood deltas.
    pub positive: String,
    /// Negative mood deltas.
    pub negative: String,
    pub chart_line: String,

    pub lever_physiology: String,
    pub lever_focus: String,
    pub lever_language: String,
    pub lever_imagination: String,
}

impl Theme {
    /// Loads a built-in theme by name, `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PalancasError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| PalancasError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents).map_err(|e| PalancasError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Card and accent color of a lever.
    #[must_use]
    pub fn lever_color(&self, lever: Lever) -> &str {
        match lever {
            Lever::Physiology => &self.colors.lever_physiology,
            Lever::Focus => &self.colors.lever_focus,
            Lever::Language => &self.colors.lever_language,
            Lever::Imagination => &self.colors.lever_imagination,
        }
    }

    /// Color for a signed mood change.
    #[must_use]
    pub fn delta_color(&self, delta: i32) -> &str {
        match delta.signum() {
            1 => &self.colors.positive,
            -1 => &self.colors.negative,
            _ => &self.colors.text_dim,
        }
    }

    /// Parses `#rrggbb`, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn strikethrough() -> &'static str {
        "\u{001b}[9m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        for name in ["catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn levers_have_distinct_colors() {
        let theme = Theme::default();
        let colors: Vec<&str> = Lever::ALL.iter().map(|l| theme.lever_color(*l)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn escapes_from_hex() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let contents = include_str!("../../themes/catppuccin-latte.toml").replace("catppuccin-latte", "custom");
        file.write_all(contents.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.colors.header_bg.as_deref(), Some("#e6e9ef"));
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(PalancasError::Theme(_))));
        assert!(matches!(Theme::from_file("/nonexistent/theme.toml"), Err(PalancasError::Theme(_))));
    }
}
