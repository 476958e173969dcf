//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! Output is returned as a `String` so the caller decides where it goes.
//!
//! # Example
//!
//! ```rust
//! use bloodref::app::AppState;
//! use bloodref::content::Manifest;
//! use bloodref::ui::{render, Theme};
//!
//! let state = AppState::new(Manifest::embedded()?, Theme::default());
//! let screen = render(&state, false, 80);
//! assert!(screen.contains("Quick Access"));
//! # Ok::<(), bloodref::BloodRefError>(())
//! ```

use crate::app::AppState;
use crate::content::ContentStats;
use crate::domain::RangeEntry;
use crate::ui::components;
use crate::ui::helpers::Painter;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Default line width when the terminal size is unknown.
pub const DEFAULT_WIDTH: usize = 80;

/// Renders the current screen of `state`.
#[must_use]
pub fn render(state: &AppState, color: bool, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();
    render_to_string(&viewmodel, &state.theme, color, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_to_string(vm: &UIViewModel, theme: &Theme, color: bool, cols: usize) -> String {
    let painter = Painter::new(theme, color);
    let mut out = String::new();
    components::render_screen(&mut out, vm, &painter, cols);
    out
}

/// Renders reference range tables.
#[must_use]
pub fn render_ranges(entries: &[&RangeEntry], theme: &Theme, color: bool, cols: usize) -> String {
    let painter = Painter::new(theme, color);
    let mut out = String::new();
    components::ranges::render_ranges(&mut out, entries, &painter, cols);
    out
}

/// Renders content statistics, one count per line.
#[must_use]
pub fn render_stats(stats: &ContentStats, theme: &Theme, color: bool) -> String {
    let p = Painter::new(theme, color);
    [
        ("Chapters", stats.chapters),
        ("Clinical pearls", stats.clinical_pearls),
        ("Red flags", stats.red_flags),
        ("Reference ranges", stats.range_entries),
    ]
    .iter()
    .map(|(label, count)| {
        format!(
            "{:<18}{}\n",
            label,
            p.paint(&theme.colors.header_fg, &count.to_string())
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event, Tab};
    use crate::content::Manifest;

    fn state() -> AppState {
        AppState::new(Manifest::embedded().unwrap(), Theme::default())
    }

    #[test]
    fn plain_output_has_no_escapes() {
        let out = render(&state(), false, DEFAULT_WIDTH);
        assert!(!out.contains('\u{1b}'));
        assert!(out.contains("[ Home ]"));
        assert!(out.contains("Blood Test Interpretation"));
    }

    #[test]
    fn home_shows_red_flags_and_pearl_preview() {
        let out = render(&state(), false, DEFAULT_WIDTH);
        assert!(out.contains("13 Chapters · 2 Clinical Pearls · 4 Red Flags"));
        assert!(out.contains("Clinical Pearl\n"));
        assert!(out.contains("Never Read in Isolation"));
    }

    #[test]
    fn coloured_output_uses_theme() {
        let state = state();
        let out = render(&state, true, DEFAULT_WIDTH);
        assert!(out.contains(&Theme::fg(&state.theme.colors.header_fg)));
    }

    #[test]
    fn chapter_list_shows_count_and_rows() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectTab(Tab::Chapters)).unwrap();
        let out = render(&state, false, DEFAULT_WIDTH);
        assert!(out.contains("13 chapters found"));
        assert!(out.contains("Case Studies"));
    }

    #[test]
    fn empty_filter_shows_hint() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectTab(Tab::Chapters)).unwrap();
        state.set_query("qqqq");
        let out = render(&state, false, DEFAULT_WIDTH);
        assert!(out.contains("No chapters found"));
        assert!(out.contains("Try adjusting your search terms"));
    }

    #[test]
    fn detail_shows_pearls_and_flags() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenChapter(1)).unwrap();
        let out = render(&state, false, DEFAULT_WIDTH);
        assert!(out.contains("Clinical Pearls"));
        assert!(out.contains("Never Read in Isolation"));
        assert!(out.contains("Red Flags"));
    }

    #[test]
    fn ranges_are_grouped_by_category() {
        let state = state();
        let entries: Vec<&RangeEntry> = state.index.ranges().collect();
        let out = render_ranges(&entries, &state.theme, false, DEFAULT_WIDTH);
        assert!(out.starts_with("FBC\n"));
        assert!(out.contains("\nBIOCHEMISTRY\n"));
        assert!(out.contains("130-175 g/L"));
        assert!(out.contains("Haemoglobin (Female)    120-155 g/L"));
    }

    #[test]
    fn stats_lists_every_count() {
        let state = state();
        let out = render_stats(&state.stats, &state.theme, false);
        assert_eq!(out.lines().count(), 4);
        assert!(out.starts_with("Chapters          13"));
    }
}
