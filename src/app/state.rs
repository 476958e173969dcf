//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for navigation: which tab is
//! active, what is on the chapter stack, the text typed into each search field,
//! and the cursor position. The list of selectable rows is derived state,
//! recomputed by [`AppState::refresh`] after every change.
//!
//! # Search Fields
//!
//! The chapter list and the Search tab each keep their own query:
//!
//! - Chapter list: [`KeywordSearchIndex::filter_chapters`], blank shows all
//! - Search tab: [`KeywordSearchIndex::search`], blank shows nothing
//!
//! # Example
//!
//! ```rust
//! use bloodref::app::{AppState, Tab};
//! use bloodref::content::Manifest;
//! use bloodref::ui::Theme;
//!
//! let mut state = AppState::new(Manifest::embedded()?, Theme::default());
//! state.select_tab(Tab::Search);
//! state.set_query("troponin");
//! assert_eq!(state.visible_count(), 1);
//! # Ok::<(), bloodref::BloodRefError>(())
//! ```

use super::modes::{Screen, Tab};
use crate::content::{ContentSource, ContentStats};
use crate::domain::{ChapterRecord, RangeEntry};
use crate::search::{KeywordSearchIndex, Needle, SearchHit};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, ChapterDetail, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ItemKind,
    SearchBarInfo, TabInfo, UIViewModel,
};

/// Number of chapters shown in the home screen quick access grid.
pub const QUICK_ACCESS_COUNT: usize = 4;

/// A selectable row on the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selectable {
    Chapter(u32),
    Range(RangeEntry),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search index over the loaded manifest.
    pub index: KeywordSearchIndex,

    /// Content counts for the home screen.
    pub stats: ContentStats,

    /// Colour scheme for rendering.
    pub theme: Theme,

    /// Active tab.
    pub tab: Tab,

    /// Chapter ids pushed on the Chapters stack; empty means the list is showing.
    pub chapter_stack: Vec<u32>,

    /// Text typed into the chapter list filter.
    pub list_query: String,

    /// Text typed into the Search tab.
    pub search_query: String,

    /// Zero-based cursor within `visible`.
    pub selected_index: usize,

    /// Selectable rows of the current screen, in display order.
    visible: Vec<Selectable>,
}

impl AppState {
    /// Creates state on the Home tab over the given content.
    #[must_use]
    pub fn new(source: &impl ContentSource, theme: Theme) -> Self {
        let index = KeywordSearchIndex::build(source);
        let stats = source.stats();

        let mut state = Self {
            index,
            stats,
            theme,
            tab: Tab::Home,
            chapter_stack: Vec::new(),
            list_query: String::new(),
            search_query: String::new(),
            selected_index: 0,
            visible: Vec::new(),
        };
        state.refresh();
        state
    }

    /// The screen currently shown.
    #[must_use]
    pub fn screen(&self) -> Screen {
        match self.tab {
            Tab::Home => Screen::Home,
            Tab::Chapters => self
                .chapter_stack
                .last()
                .map_or(Screen::ChapterList, |id| Screen::ChapterDetail(*id)),
            Tab::Search => Screen::Search,
            Tab::About => Screen::About,
        }
    }

    /// Switches tabs, keeping each tab's own state.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.selected_index = 0;
        }
        self.refresh();
    }

    /// Pushes a chapter onto the Chapters stack and shows it.
    ///
    /// Returns `false` if the id is unknown, leaving state untouched.
    pub fn open_chapter(&mut self, id: u32) -> bool {
        if self.index.chapter(id).is_none() {
            return false;
        }

        self.tab = Tab::Chapters;
        self.chapter_stack.push(id);
        self.selected_index = 0;
        self.refresh();
        true
    }

    /// Pops the Chapters stack. Returns `false` when there was nothing to pop.
    pub fn go_back(&mut self) -> bool {
        if self.tab != Tab::Chapters || self.chapter_stack.pop().is_none() {
            return false;
        }
        self.selected_index = 0;
        self.refresh();
        true
    }

    /// Mutable access to the query of the current screen, if it has a search bar.
    fn active_query_mut(&mut self) -> Option<&mut String> {
        match self.screen() {
            Screen::ChapterList => Some(&mut self.list_query),
            Screen::Search => Some(&mut self.search_query),
            _ => None,
        }
    }

    /// The query of the current screen, if it has a search bar.
    #[must_use]
    pub fn active_query(&self) -> Option<&str> {
        match self.screen() {
            Screen::ChapterList => Some(&self.list_query),
            Screen::Search => Some(&self.search_query),
            _ => None,
        }
    }

    /// Replaces the current screen's query. Returns `false` if it has no search bar.
    pub fn set_query(&mut self, query: &str) -> bool {
        let Some(target) = self.active_query_mut() else {
            return false;
        };
        query.clone_into(target);
        self.refresh();
        true
    }

    /// Appends a character to the current screen's query.
    pub fn push_char(&mut self, c: char) -> bool {
        let Some(target) = self.active_query_mut() else {
            return false;
        };
        target.push(c);
        self.refresh();
        true
    }

    /// Removes the last character of the current screen's query.
    pub fn pop_char(&mut self) -> bool {
        let Some(target) = self.active_query_mut() else {
            return false;
        };
        if target.pop().is_none() {
            return false;
        }
        self.refresh();
        true
    }

    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// The row under the cursor, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Selectable> {
        self.visible.get(self.selected_index)
    }

    /// Number of selectable rows on the current screen.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Recomputes the selectable rows for the current screen and clamps the cursor.
    pub fn refresh(&mut self) {
        let screen = self.screen();
        let _span = tracing::debug_span!("refresh", screen = ?screen).entered();

        self.visible = match screen {
            Screen::Home => self
                .index
                .chapters()
                .take(QUICK_ACCESS_COUNT)
                .map(|c| Selectable::Chapter(c.id))
                .collect(),
            Screen::ChapterList => self
                .index
                .filter_chapters(self.list_query.as_str())
                .into_iter()
                .map(|c| Selectable::Chapter(c.id))
                .collect(),
            Screen::Search => self
                .index
                .search(self.search_query.as_str())
                .hits()
                .into_iter()
                .map(|hit| match hit {
                    SearchHit::Chapter(c) => Selectable::Chapter(c.id),
                    SearchHit::Range(r) => Selectable::Range(r.clone()),
                })
                .collect(),
            Screen::ChapterDetail(_) | Screen::About => Vec::new(),
        };

        if self.visible.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible.len() - 1);
        }

        tracing::debug!(visible = self.visible.len(), "screen refreshed");
    }

    /// Computes the view model for the current screen.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let screen = self.screen();

        let tabs = Tab::ALL
            .iter()
            .map(|t| TabInfo {
                title: t.title().to_string(),
                is_active: *t == self.tab,
            })
            .collect();

        let search_bar = match screen {
            Screen::ChapterList => Some(SearchBarInfo {
                query: self.list_query.clone(),
                placeholder: "Search chapters, topics, tests...".to_string(),
            }),
            Screen::Search => Some(SearchBarInfo {
                query: self.search_query.clone(),
                placeholder: "Search tests, chapters, normal ranges...".to_string(),
            }),
            _ => None,
        };

        UIViewModel {
            tabs,
            header: self.compute_header(screen),
            search_bar,
            body: self.compute_body(screen),
            footer: Self::compute_footer(screen),
        }
    }

    fn compute_header(&self, screen: Screen) -> HeaderInfo {
        match screen {
            Screen::Home => HeaderInfo {
                title: "Blood Test Interpretation".to_string(),
                subtitle: Some("Comprehensive guide for primary care physicians".to_string()),
            },
            Screen::ChapterList => HeaderInfo {
                title: "Blood Test Chapters".to_string(),
                subtitle: None,
            },
            Screen::ChapterDetail(id) => HeaderInfo {
                title: self
                    .index
                    .chapter(id)
                    .map_or_else(|| "Chapter".to_string(), |c| c.title.clone()),
                subtitle: None,
            },
            Screen::Search => HeaderInfo {
                title: "Search".to_string(),
                subtitle: None,
            },
            Screen::About => HeaderInfo {
                title: "About".to_string(),
                subtitle: None,
            },
        }
    }

    fn compute_body(&self, screen: Screen) -> Body {
        match screen {
            Screen::Home => Body::Home {
                stats: self.stats,
                quick_access: self.display_items(None, |c| {
                    (c.label().to_string(), c.description.clone())
                }),
                pearl: self
                    .index
                    .chapters()
                    .find_map(|c| c.pearls().first())
                    .cloned(),
            },
            Screen::ChapterList => {
                if self.visible.is_empty() {
                    return Body::Empty(EmptyState {
                        message: "No chapters found".to_string(),
                        subtitle: Some("Try adjusting your search terms".to_string()),
                    });
                }
                let count = self.visible.len();
                let plural = if count == 1 { "" } else { "s" };
                Body::List {
                    count_label: Some(format!("{count} chapter{plural} found")),
                    items: self.display_items(Needle::new(Some(self.list_query.as_str())), |c| {
                        (c.title.clone(), c.description.clone())
                    }),
                }
            }
            Screen::Search => {
                if self.visible.is_empty() {
                    let message = if self.search_query.is_empty() {
                        "Start typing to search"
                    } else {
                        "No results found"
                    };
                    return Body::Empty(EmptyState {
                        message: message.to_string(),
                        subtitle: None,
                    });
                }
                Body::List {
                    count_label: None,
                    items: self.display_items(Needle::new(Some(self.search_query.as_str())), |c| {
                        (c.title.clone(), c.description.clone())
                    }),
                }
            }
            Screen::ChapterDetail(id) => self.index.chapter(id).map_or_else(
                || {
                    Body::Empty(EmptyState {
                        message: format!("Chapter {id} is not available"),
                        subtitle: None,
                    })
                },
                |c| Body::Detail(Self::chapter_detail(c)),
            ),
            Screen::About => Body::Text(vec![
                "Blood Test Interpretation".to_string(),
                format!("Version {}", env!("CARGO_PKG_VERSION")),
                "A reference guide to reading common blood tests in primary care.".to_string(),
                "Content is educational and does not replace clinical judgement or local guidelines."
                    .to_string(),
                format!(
                    "{} chapters, {} clinical pearls, {} red flags, {} reference ranges.",
                    self.stats.chapters,
                    self.stats.clinical_pearls,
                    self.stats.red_flags,
                    self.stats.range_entries
                ),
            ]),
        }
    }

    /// Builds display rows for `visible`, labelling chapters with `label`.
    fn display_items<F>(&self, needle: Option<Needle>, label: F) -> Vec<DisplayItem>
    where
        F: Fn(&ChapterRecord) -> (String, String),
    {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                let is_selected = i == self.selected_index;
                let (kind, title, subtitle, accent) = match item {
                    Selectable::Chapter(id) => {
                        let chapter = self.index.chapter(*id)?;
                        let (title, subtitle) = label(chapter);
                        (ItemKind::Chapter, title, subtitle, chapter.color.clone())
                    }
                    Selectable::Range(entry) => (
                        ItemKind::Range,
                        entry.test.clone(),
                        format!("Normal: {}", entry.range),
                        None,
                    ),
                };

                let highlight_ranges = needle
                    .as_ref()
                    .and_then(|n| n.char_range_in(&title))
                    .into_iter()
                    .collect();

                Some(DisplayItem {
                    kind,
                    title,
                    subtitle,
                    accent,
                    is_selected,
                    highlight_ranges,
                })
            })
            .collect()
    }

    fn chapter_detail(chapter: &ChapterRecord) -> ChapterDetail {
        ChapterDetail {
            title: chapter.title.clone(),
            description: chapter.description.clone(),
            accent: chapter.color.clone(),
            read_time: chapter.read_time(),
            sections: chapter.sections.clone(),
            pearls: chapter.pearls().to_vec(),
            red_flags: chapter.flags().to_vec(),
        }
    }

    fn compute_footer(screen: Screen) -> FooterInfo {
        let keybindings = match screen {
            Screen::Home => ":next/:prev tabs  j/k: navigate  enter: open  :q quit",
            Screen::ChapterList => "type to filter  j/k: navigate  enter: open  :clear  :q quit",
            Screen::ChapterDetail(_) => ":back  :next/:prev tabs  :q quit",
            Screen::Search => "type to search  j/k: navigate  enter: open chapter  :clear  :q quit",
            Screen::About => ":next/:prev tabs  :q quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
