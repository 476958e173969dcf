//! List component renderer.
//!
//! Each row takes two lines: the title with a kind tag on the right, then the
//! subtitle indented and dimmed. The selected row gets the selection colours
//! across the full width.
//!
//! ```text
//! ▌ Full Blood Count (FBC)                                     chapter
//!     Reading and interpreting FBC results with systematic approach
//! ```

use crate::ui::helpers::{truncate, visible_len, Painter};
use crate::ui::viewmodel::{DisplayItem, ItemKind};

const INDENT: usize = 4;

/// Renders the optional count line followed by every row.
pub fn render_list(
    out: &mut String,
    count_label: Option<&str>,
    items: &[DisplayItem],
    p: &Painter,
    cols: usize,
) {
    if let Some(label) = count_label {
        out.push_str("  ");
        out.push_str(&p.paint(&p.theme.colors.text_dim, label));
        out.push('\n');
    }

    for item in items {
        render_row(out, item, p, cols);
    }
}

fn render_row(out: &mut String, item: &DisplayItem, p: &Painter, cols: usize) {
    let tag = match item.kind {
        ItemKind::Chapter => "chapter",
        ItemKind::Range => "range",
    };
    let marker = if item.is_selected { "▌ " } else { "  " };
    let title_width = cols.saturating_sub(visible_len(marker) + visible_len(tag) + 2);
    let title = truncate(&item.title, title_width);
    let ranges: Vec<(usize, usize)> = if title == item.title {
        item.highlight_ranges.clone()
    } else {
        Vec::new()
    };

    if item.is_selected {
        out.push_str(&p.fg(&p.theme.colors.selection_fg));
        out.push_str(&p.bg(&p.theme.colors.selection_bg));
    } else if let Some(accent) = &item.accent {
        out.push_str(&p.fg(accent));
    } else {
        out.push_str(&p.fg(&p.theme.colors.text_normal));
    }
    out.push_str(marker);

    if !item.is_selected {
        out.push_str(&p.fg(&p.theme.colors.text_normal));
    }
    out.push_str(&p.highlighted(&title, &ranges, item.is_selected));

    let used = visible_len(marker) + visible_len(&title);
    out.push_str(&" ".repeat(cols.saturating_sub(used + visible_len(tag))));
    if !item.is_selected {
        out.push_str(&p.fg(&p.theme.colors.text_dim));
    }
    out.push_str(tag);
    out.push_str(p.reset());
    out.push('\n');

    let colour = match item.kind {
        ItemKind::Range => &p.theme.colors.range_fg,
        ItemKind::Chapter => &p.theme.colors.text_dim,
    };
    let subtitle = truncate(&item.subtitle, cols.saturating_sub(INDENT));
    out.push_str(&" ".repeat(INDENT));
    out.push_str(&p.paint(colour, &subtitle));
    out.push('\n');
}
