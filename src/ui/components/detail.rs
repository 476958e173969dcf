//! Chapter detail renderer.
//!
//! Lays out the description, read time, sections, clinical pearls and red
//! flags, wrapping prose to the line width.

use crate::ui::helpers::{wrap, Painter};
use crate::ui::viewmodel::ChapterDetail;

pub fn render_detail(out: &mut String, detail: &ChapterDetail, p: &Painter, cols: usize) {
    let text_width = cols.saturating_sub(4).max(20);
    let accent = detail
        .accent
        .as_deref()
        .unwrap_or(&p.theme.colors.header_fg);

    for line in wrap(&detail.description, text_width) {
        out.push_str("  ");
        out.push_str(&p.paint(&p.theme.colors.text_normal, &line));
        out.push('\n');
    }
    out.push_str("  ");
    out.push_str(&p.paint(&p.theme.colors.text_dim, &detail.read_time));
    out.push_str("\n\n");

    if !detail.sections.is_empty() {
        heading(out, "Sections", accent, p);
        for (i, section) in detail.sections.iter().enumerate() {
            out.push_str(&format!("  {}. ", i + 1));
            out.push_str(&p.paint(&p.theme.colors.text_normal, section));
            out.push('\n');
        }
        out.push('\n');
    }

    if !detail.pearls.is_empty() {
        heading(out, "Clinical Pearls", &p.theme.colors.pearl_fg, p);
        for pearl in &detail.pearls {
            out.push_str("  ");
            out.push_str(p.bold());
            out.push_str(&p.paint(&p.theme.colors.pearl_fg, &pearl.title));
            if let Some(category) = &pearl.category {
                out.push(' ');
                out.push_str(&p.paint(&p.theme.colors.text_dim, &format!("({category})")));
            }
            out.push('\n');
            for line in wrap(&pearl.content, text_width.saturating_sub(2)) {
                out.push_str("    ");
                out.push_str(&p.paint(&p.theme.colors.text_normal, &line));
                out.push('\n');
            }
        }
        out.push('\n');
    }

    if !detail.red_flags.is_empty() {
        heading(out, "Red Flags", &p.theme.colors.red_flag_fg, p);
        for flag in &detail.red_flags {
            out.push_str("  ");
            out.push_str(&p.paint(&p.theme.colors.red_flag_fg, &format!("! {flag}")));
            out.push('\n');
        }
        out.push('\n');
    }
}

fn heading(out: &mut String, text: &str, colour: &str, p: &Painter) {
    out.push_str("  ");
    out.push_str(p.bold());
    out.push_str(&p.paint(colour, text));
    out.push('\n');
}
