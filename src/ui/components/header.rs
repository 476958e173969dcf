//! Tab bar and header renderers.
//!
//! The tab bar lists every tab with the active one in bold header colours. The
//! header centres the screen title, with an optional dimmed subtitle below.

use crate::ui::helpers::{visible_len, Painter};
use crate::ui::viewmodel::{HeaderInfo, TabInfo};

/// Renders the tab bar as a single line: `[ Home ]  Chapters  Search  About`.
pub fn render_tabs(out: &mut String, tabs: &[TabInfo], p: &Painter, cols: usize) {
    let mut line = String::new();
    let mut len = 0;

    for tab in tabs {
        let label = if tab.is_active {
            format!("[ {} ]", tab.title)
        } else {
            format!("  {}  ", tab.title)
        };
        len += visible_len(&label);

        if tab.is_active {
            line.push_str(p.bold());
            line.push_str(&p.fg(&p.theme.colors.header_fg));
        } else {
            line.push_str(&p.fg(&p.theme.colors.text_dim));
        }
        line.push_str(&label);
        line.push_str(p.reset());
    }

    let padding = cols.saturating_sub(len) / 2;
    out.push_str(&" ".repeat(padding));
    out.push_str(&line);
    out.push('\n');
}

/// Renders the centred screen title and subtitle.
///
/// ```text
/// [left padding] TITLE [right padding]
/// ```
///
/// If the width cannot be split evenly, the right side gets the extra column.
pub fn render_header(out: &mut String, header: &HeaderInfo, p: &Painter, cols: usize) {
    let title_len = visible_len(&header.title);
    let padding = cols.saturating_sub(title_len) / 2;

    out.push_str(p.bold());
    out.push_str(&p.fg(&p.theme.colors.header_fg));
    if let Some(bg) = &p.theme.colors.header_bg {
        out.push_str(&p.bg(bg));
    }
    out.push_str(&" ".repeat(padding));
    out.push_str(&header.title);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + title_len)));
    out.push_str(p.reset());
    out.push('\n');

    if let Some(subtitle) = &header.subtitle {
        let sub_len = visible_len(subtitle);
        out.push_str(&" ".repeat(cols.saturating_sub(sub_len) / 2));
        out.push_str(&p.paint(&p.theme.colors.text_dim, subtitle));
        out.push('\n');
    }
}
