//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: labels are formatted, match
//! highlights are pre-computed, and selection is resolved.

use crate::content::ContentStats;
use crate::domain::ClinicalPearl;

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Tab bar entries in order.
    pub tabs: Vec<TabInfo>,
    /// Screen title block.
    pub header: HeaderInfo,
    /// Present on screens with a text field.
    pub search_bar: Option<SearchBarInfo>,
    /// Screen body.
    pub body: Body,
    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// One entry of the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub title: String,
    pub is_active: bool,
}

/// Screen title and optional subtitle line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: Option<String>,
}

/// Search bar state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Shown dimmed when the query is empty.
    pub placeholder: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Screen body variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Home screen: statistics, quick access chapters and a pearl preview.
    Home {
        stats: ContentStats,
        quick_access: Vec<DisplayItem>,
        pearl: Option<ClinicalPearl>,
    },
    /// A selectable list with an optional count line above it.
    List {
        count_label: Option<String>,
        items: Vec<DisplayItem>,
    },
    /// Nothing to list.
    Empty(EmptyState),
    /// Full chapter content.
    Detail(ChapterDetail),
    /// Static paragraphs.
    Text(Vec<String>),
}

/// What a list row refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Chapter,
    Range,
}

/// One list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub kind: ItemKind,
    pub title: String,
    pub subtitle: String,
    /// Chapter accent colour, if any.
    pub accent: Option<String>,
    pub is_selected: bool,
    /// Character ranges of `title` to highlight as `(start, end)`, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Empty state message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: Option<String>,
}

/// Chapter detail content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDetail {
    pub title: String,
    pub description: String,
    pub accent: Option<String>,
    pub read_time: String,
    pub sections: Vec<String>,
    pub pearls: Vec<ClinicalPearl>,
    pub red_flags: Vec<String>,
}
