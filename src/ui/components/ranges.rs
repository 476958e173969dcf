//! Reference range table renderer.
//!
//! Groups entries by category, one table per category:
//!
//! ```text
//! FBC
//!   Haemoglobin (Male)        130-175 g/L
//!   Haemoglobin (Female)      120-155 g/L
//! ```

use crate::domain::RangeEntry;
use crate::ui::helpers::{truncate, visible_len, Painter};

/// Renders entries in their given order, starting a new block when the category changes.
pub fn render_ranges(out: &mut String, entries: &[&RangeEntry], p: &Painter, cols: usize) {
    let name_width = entries
        .iter()
        .map(|e| visible_len(&e.test))
        .max()
        .unwrap_or(0)
        .min(cols / 2);

    let mut category: Option<&str> = None;
    for entry in entries {
        if category != Some(entry.category.as_str()) {
            if category.is_some() {
                out.push('\n');
            }
            out.push_str(p.bold());
            out.push_str(&p.paint(&p.theme.colors.header_fg, &entry.category.to_uppercase()));
            out.push('\n');
            category = Some(entry.category.as_str());
        }

        let name = truncate(&entry.test, name_width);
        out.push_str("  ");
        out.push_str(&p.paint(&p.theme.colors.text_normal, &name));
        out.push_str(&" ".repeat(name_width.saturating_sub(visible_len(&name)) + 4));
        out.push_str(&p.paint(&p.theme.colors.range_fg, &entry.range));
        out.push('\n');
    }
}
