//! Shared rendering utilities and helpers.
//!
//! Components write into a `String` buffer through a [`Painter`], which hands
//! out ANSI sequences from the active theme or empty strings when colour is
//! switched off (`--no-color`, piped output).
//!
//! # Example
//!
//! ```rust
//! use bloodref::ui::helpers::Painter;
//! use bloodref::ui::Theme;
//!
//! let theme = Theme::default();
//! let plain = Painter::new(&theme, false);
//! assert_eq!(plain.highlighted("Full Blood Count", &[(5, 10)], false), "Full Blood Count");
//! ```

use crate::ui::theme::Theme;

/// Theme-aware ANSI sequence source for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct Painter<'a> {
    pub theme: &'a Theme,
    pub color: bool,
}

impl<'a> Painter<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme, color: bool) -> Self {
        Self { theme, color }
    }

    /// Foreground sequence for a hex colour.
    #[must_use]
    pub fn fg(&self, hex: &str) -> String {
        if self.color {
            Theme::fg(hex)
        } else {
            String::new()
        }
    }

    /// Background sequence for a hex colour.
    #[must_use]
    pub fn bg(&self, hex: &str) -> String {
        if self.color {
            Theme::bg(hex)
        } else {
            String::new()
        }
    }

    #[must_use]
    pub const fn bold(&self) -> &'static str {
        if self.color {
            Theme::bold()
        } else {
            ""
        }
    }

    #[must_use]
    pub const fn dim(&self) -> &'static str {
        if self.color {
            Theme::dim()
        } else {
            ""
        }
    }

    #[must_use]
    pub const fn reset(&self) -> &'static str {
        if self.color {
            Theme::reset()
        } else {
            ""
        }
    }

    /// Wraps `text` in a foreground colour and a reset.
    #[must_use]
    pub fn paint(&self, hex: &str, text: &str) -> String {
        format!("{}{text}{}", self.fg(hex), self.reset())
    }

    /// Renders text with highlighted character ranges for query matches.
    ///
    /// Ranges are `(start, end)` character indices, end exclusive. Highlighting
    /// is skipped on selected rows so the selection background stays intact,
    /// and entirely when colour is off.
    #[must_use]
    pub fn highlighted(&self, text: &str, ranges: &[(usize, usize)], is_selected: bool) -> String {
        if ranges.is_empty() || is_selected || !self.color {
            return text.to_string();
        }

        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len() + 32);
        let mut current_pos = 0;

        for &(start, end) in ranges {
            let start = start.min(chars.len());
            let end = end.min(chars.len());
            if start < current_pos || start >= end {
                continue;
            }

            out.extend(&chars[current_pos..start]);
            out.push_str(&self.fg(&self.theme.colors.match_highlight_fg));
            out.push_str(&self.bg(&self.theme.colors.match_highlight_bg));
            out.extend(&chars[start..end]);
            out.push_str(self.reset());
            out.push_str(&self.fg(&self.theme.colors.text_normal));

            current_pos = end;
        }

        out.extend(&chars[current_pos..]);
        out
    }
}

/// Display width of `text`, counted in characters.
#[must_use]
pub fn visible_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to `max` characters, ending in `…` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if visible_len(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Greedy word wrap to `width` characters. Words longer than `width` get their own line.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if visible_len(&current) + 1 + visible_len(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_wraps_match_in_theme_colours() {
        let theme = Theme::default();
        let painter = Painter::new(&theme, true);
        let out = painter.highlighted("Urea", &[(0, 2)], false);

        assert!(out.starts_with(&Theme::fg(&theme.colors.match_highlight_fg)));
        assert!(out.contains("Ur\u{1b}[0m"));
        assert!(out.ends_with("ea"));
    }

    #[test]
    fn selected_rows_are_not_highlighted() {
        let theme = Theme::default();
        let painter = Painter::new(&theme, true);
        assert_eq!(painter.highlighted("Urea", &[(0, 2)], true), "Urea");
    }

    #[test]
    fn out_of_bounds_ranges_are_clamped() {
        let theme = Theme::default();
        let painter = Painter::new(&theme, true);
        let out = painter.highlighted("MCV", &[(1, 40)], false);
        assert!(out.starts_with('M'));
        assert!(out.contains("CV"));
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Haemoglobin", 20), "Haemoglobin");
        assert_eq!(truncate("Haemoglobin", 5), "Haem…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn wrap_breaks_on_words() {
        let lines = wrap("Never interpret a single value in isolation", 16);
        assert_eq!(lines, vec!["Never interpret", "a single value", "in isolation"]);
    }
}
