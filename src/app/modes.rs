//! Navigation state types.
//!
//! The reader has four top-level tabs. The Chapters tab owns a stack: the chapter
//! list at the bottom and chapter detail screens pushed on top of it.
//!
//! ```text
//! Home ── Chapters ── Search ── About
//!            │
//!            ├─ ChapterList          (filter, blank shows all)
//!            └─ ChapterDetail(id)    (pushed on select)
//! ```

use serde::{Deserialize, Serialize};

/// Top-level navigation tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Welcome screen with content statistics and quick access chapters.
    Home,
    /// Chapter list and detail stack.
    Chapters,
    /// Unified search over chapters and reference ranges.
    Search,
    /// Application information.
    About,
}

impl Tab {
    /// All tabs in bar order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Chapters, Self::Search, Self::About];

    /// Tab bar label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Chapters => "Chapters",
            Self::Search => "Search",
            Self::About => "About",
        }
    }

    /// Next tab to the right, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous tab to the left, wrapping to the last.
    #[must_use]
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parses a tab name case-insensitively.
    ///
    /// ```rust
    /// use bloodref::app::Tab;
    ///
    /// assert_eq!(Tab::parse("SEARCH"), Some(Tab::Search));
    /// assert_eq!(Tab::parse("settings"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.title().eq_ignore_ascii_case(name.trim()))
    }
}

/// Screen currently shown, derived from the tab and the chapter stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    ChapterList,
    ChapterDetail(u32),
    Search,
    About,
}

impl Screen {
    /// Whether this screen has a text field that receives typed characters.
    #[must_use]
    pub const fn has_search_bar(self) -> bool {
        matches!(self, Self::ChapterList | Self::Search)
    }
}
