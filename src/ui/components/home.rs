//! Home screen renderer: content statistics, quick access chapters and a
//! clinical pearl preview.

use super::table::render_list;
use crate::content::ContentStats;
use crate::domain::ClinicalPearl;
use crate::ui::helpers::{visible_len, wrap, Painter};
use crate::ui::viewmodel::DisplayItem;

pub fn render_home(
    out: &mut String,
    stats: &ContentStats,
    quick_access: &[DisplayItem],
    pearl: Option<&ClinicalPearl>,
    p: &Painter,
    cols: usize,
) {
    let line = stat_line(stats);
    out.push('\n');
    out.push_str(&" ".repeat(cols.saturating_sub(visible_len(&line)) / 2));
    out.push_str(p.bold());
    out.push_str(&p.paint(&p.theme.colors.header_fg, &line));
    out.push_str("\n\n");

    out.push_str("  ");
    out.push_str(p.bold());
    out.push_str(&p.paint(&p.theme.colors.text_normal, "Quick Access"));
    out.push('\n');
    render_list(out, None, quick_access, p, cols);

    if let Some(pearl) = pearl {
        out.push('\n');
        out.push_str("  ");
        out.push_str(p.bold());
        out.push_str(&p.paint(&p.theme.colors.text_normal, "Clinical Pearl"));
        out.push('\n');
        out.push_str("    ");
        out.push_str(p.bold());
        out.push_str(&p.paint(&p.theme.colors.pearl_fg, &pearl.title));
        out.push('\n');
        for text in wrap(&pearl.content, cols.saturating_sub(6).max(20)) {
            out.push_str("    ");
            out.push_str(&p.paint(&p.theme.colors.text_normal, &text));
            out.push('\n');
        }
    }
}

/// `13 Chapters · 2 Clinical Pearls · 4 Red Flags`
#[must_use]
pub fn stat_line(stats: &ContentStats) -> String {
    format!(
        "{} Chapters · {} Clinical Pearls · {} Red Flags",
        stats.chapters, stats.clinical_pearls, stats.red_flags
    )
}
