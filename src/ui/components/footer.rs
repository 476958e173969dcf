//! Footer component renderer.

use crate::ui::helpers::{truncate, visible_len, Painter};
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centred and dimmed, cut to the line width.
pub fn render_footer(out: &mut String, footer: &FooterInfo, p: &Painter, cols: usize) {
    let help_text = truncate(&footer.keybindings, cols);
    let padding = cols.saturating_sub(visible_len(&help_text)) / 2;

    out.push_str(&" ".repeat(padding));
    out.push_str(&p.paint(&p.theme.colors.text_dim, &help_text));
    out.push('\n');
}
