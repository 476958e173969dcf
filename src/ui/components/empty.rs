//! Empty state component renderer.
//!
//! Shown instead of a list when a screen has nothing to display, such as a
//! blank Search tab or a filter with no matches.

use crate::ui::helpers::{visible_len, Painter};
use crate::ui::viewmodel::EmptyState;

/// Renders the message centred in the empty state colour, with the optional
/// subtitle dimmed on the next line.
pub fn render_empty_state(out: &mut String, empty: &EmptyState, p: &Painter, cols: usize) {
    out.push('\n');

    let msg_padding = cols.saturating_sub(visible_len(&empty.message)) / 2;
    out.push_str(&" ".repeat(msg_padding));
    out.push_str(&p.paint(&p.theme.colors.empty_state_fg, &empty.message));
    out.push('\n');

    if let Some(subtitle) = &empty.subtitle {
        let sub_padding = cols.saturating_sub(visible_len(subtitle)) / 2;
        out.push_str(&" ".repeat(sub_padding));
        out.push_str(p.dim());
        out.push_str(&p.paint(&p.theme.colors.text_dim, subtitle));
        out.push('\n');
    }

    out.push('\n');
}
