//! Composable UI component renderers.
//!
//! Each component appends its lines to a `String` buffer through a
//! [`Painter`](crate::ui::helpers::Painter).
//!
//! # Components
//!
//! - [`header`]: Tab bar and screen title
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`table`]: Chapter and range result rows
//! - [`home`]: Statistics and quick access
//! - [`detail`]: Full chapter content
//! - [`ranges`]: Reference range tables
//! - [`empty`]: Empty state message
//!
//! # Layout
//!
//! ```text
//! [Tabs]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, list screens only]
//! [Body]
//! [Border]
//! [Footer]
//! ```

pub mod detail;
pub mod empty;
pub mod footer;
pub mod header;
pub mod home;
pub mod ranges;
pub mod search;
pub mod table;

use crate::ui::helpers::Painter;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Renders a horizontal border line.
pub fn render_border(out: &mut String, p: &Painter, cols: usize) {
    out.push_str(&p.paint(&p.theme.colors.border, &"─".repeat(cols)));
    out.push('\n');
}

/// Renders a full screen from its view model.
pub fn render_screen(out: &mut String, vm: &UIViewModel, p: &Painter, cols: usize) {
    header::render_tabs(out, &vm.tabs, p, cols);
    header::render_header(out, &vm.header, p, cols);
    render_border(out, p, cols);

    if let Some(bar) = &vm.search_bar {
        search::render_search_bar(out, bar, p, cols);
    }

    match &vm.body {
        Body::Home {
            stats,
            quick_access,
            pearl,
        } => home::render_home(out, stats, quick_access, pearl.as_ref(), p, cols),
        Body::List { count_label, items } => {
            table::render_list(out, count_label.as_deref(), items, p, cols);
        }
        Body::Empty(empty) => empty::render_empty_state(out, empty, p, cols),
        Body::Detail(detail) => detail::render_detail(out, detail, p, cols),
        Body::Text(paragraphs) => {
            for paragraph in paragraphs {
                for line in crate::ui::helpers::wrap(paragraph, cols.saturating_sub(4).max(20)) {
                    out.push_str("  ");
                    out.push_str(&p.paint(&p.theme.colors.text_normal, &line));
                    out.push('\n');
                }
                out.push('\n');
            }
        }
    }

    render_border(out, p, cols);
    footer::render_footer(out, &vm.footer, p, cols);
}
