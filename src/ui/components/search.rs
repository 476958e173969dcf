//! Search bar component renderer.
//!
//! Renders a three-line bordered box with the current query, or the
//! placeholder in dim text when the query is empty.

use crate::ui::helpers::{truncate, visible_len, Painter};
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 2;

pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, p: &Painter, cols: usize) {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2).max(4);
    let inner_width = box_width - 2;
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = &p.theme.colors.border;

    out.push_str(&margin);
    out.push_str(&p.paint(border, &format!("┌{}┐", "─".repeat(inner_width))));
    out.push('\n');

    let (text, colour) = if search.query.is_empty() {
        (format!(" {}", search.placeholder), &p.theme.colors.text_dim)
    } else {
        (format!(" {}", search.query), &p.theme.colors.text_normal)
    };
    let text = truncate(&text, inner_width);
    let padding = inner_width.saturating_sub(visible_len(&text));

    out.push_str(&margin);
    out.push_str(&p.paint(border, "│"));
    out.push_str(&p.paint(colour, &text));
    out.push_str(&" ".repeat(padding));
    out.push_str(&p.paint(border, "│"));
    out.push('\n');

    out.push_str(&margin);
    out.push_str(&p.paint(border, &format!("└{}┘", "─".repeat(inner_width))));
    out.push('\n');
}
