//! Theme management and ANSI escape sequence generation.
//!
//! Colour schemes come from built-in TOML themes or user TOML files. Hex colours
//! are turned into 24-bit ANSI escape sequences at render time.
//!
//! # Built-in Themes
//!
//! - `clinical-light`: The reference palette (indigo headers, red flags in red)
//! - `clinical-dark`: Dark variant with the same roles
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#667eea"
//! text_normal = "#2c3e50"
//! text_dim = "#7f8c8d"
//! border = "#bdc3c7"
//! selection_fg = "#ffffff"
//! selection_bg = "#667eea"
//! match_highlight_fg = "#2c3e50"
//! match_highlight_bg = "#ffeaa7"
//! empty_state_fg = "#7f8c8d"
//! pearl_fg = "#f5576c"
//! red_flag_fg = "#e53e3e"
//! range_fg = "#3498db"
//! ```

use crate::domain::error::{BloodRefError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "clinical-light";

/// Colour scheme configuration for terminal rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Colour palette for all UI roles.
    pub colors: ThemeColors,
}

/// Colour definitions for each UI role, as hex strings (e.g. `"#667eea"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header and title text.
    pub header_fg: String,
    /// Optional header background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Body text.
    pub text_normal: String,
    /// Secondary text (descriptions, footer, counts).
    pub text_dim: String,
    /// Separator lines.
    pub border: String,

    /// Selected row foreground.
    pub selection_fg: String,
    /// Selected row background.
    pub selection_bg: String,

    /// Query match highlight foreground.
    pub match_highlight_fg: String,
    /// Query match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message.
    pub empty_state_fg: String,
    /// Clinical pearl titles.
    pub pearl_fg: String,
    /// Red flag lines.
    pub red_flag_fg: String,
    /// Reference range values.
    pub range_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bloodref::ui::Theme;
    ///
    /// let theme = Theme::from_name("clinical-dark").unwrap();
    /// assert_eq!(theme.name, "clinical-dark");
    /// assert!(Theme::from_name("neon").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "clinical-light" => include_str!("../../themes/clinical-light.toml"),
            "clinical-dark" => include_str!("../../themes/clinical-dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Names of all built-in themes.
    #[must_use]
    pub const fn builtin_names() -> &'static [&'static str] {
        &["clinical-light", "clinical-dark"]
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BloodRefError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            BloodRefError::Theme(format!("failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| BloodRefError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex colour to an RGB tuple. Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground escape sequence for a hex colour.
    ///
    /// ```rust
    /// use bloodref::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#667eea"), "\u{1b}[38;2;102;126;234m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for a hex colour.
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

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in `clinical-light` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the theme tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in clinical-light theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in Theme::builtin_names() {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(&theme.name, name);
        }
    }

    #[test]
    fn default_is_clinical_light() {
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn malformed_hex_renders_white() {
        assert_eq!(Theme::fg("#zzz"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("12345"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn loads_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let text = include_str!("../../themes/clinical-dark.toml").replace("clinical-dark", "ward-night");
        file.write_all(text.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "ward-night");
        assert_eq!(theme.colors.header_bg.as_deref(), Some("#1e2233"));
    }

    #[test]
    fn missing_file_is_theme_error() {
        let err = Theme::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, BloodRefError::Theme(_)));
    }
}
