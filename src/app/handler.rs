//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the front end (the `browse` loop or a one-shot command)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! The returned flag says whether anything visible changed and a redraw is due.
//!
//! # Example
//!
//! ```rust
//! use bloodref::app::{handle_event, AppState, Event, Tab};
//! use bloodref::content::Manifest;
//! use bloodref::ui::Theme;
//!
//! let mut state = AppState::new(Manifest::embedded()?, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::SelectTab(Tab::Chapters))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), bloodref::BloodRefError>(())
//! ```

use super::modes::{Screen, Tab};
use super::state::Selectable;
use crate::app::{Action, AppState};
use crate::domain::error::{BloodRefError, Result};

/// Events triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves to the tab on the right (wraps).
    NextTab,
    /// Moves to the tab on the left (wraps).
    PrevTab,
    /// Jumps straight to a tab.
    SelectTab(Tab),
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Opens the highlighted row.
    Select,
    /// Pops the chapter stack.
    Back,
    /// Appends a character to the current query.
    Char(char),
    /// Removes the last character from the current query.
    Backspace,
    /// Empties the current query.
    ClearQuery,
    /// Opens a chapter by id, from any tab.
    OpenChapter(u32),
    /// Ends the session.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(render, actions)`: `render` is `true` when the view changed.
///
/// # Errors
///
/// Returns [`BloodRefError::NotFound`] for [`Event::OpenChapter`] with an id
/// that is not in the manifest.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::NextTab => {
            state.select_tab(state.tab.next());
            Ok((true, vec![]))
        }
        Event::PrevTab => {
            state.select_tab(state.tab.prev());
            Ok((true, vec![]))
        }
        Event::SelectTab(tab) => {
            let changed = state.tab != *tab;
            state.select_tab(*tab);
            Ok((changed, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((state.visible_count() > 1, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((state.visible_count() > 1, vec![]))
        }
        Event::Select => {
            let Some(selected) = state.selected().cloned() else {
                tracing::debug!("nothing selected");
                return Ok((false, vec![]));
            };

            match selected {
                Selectable::Chapter(id) => {
                    tracing::debug!(chapter_id = id, "opening chapter");
                    Ok((state.open_chapter(id), vec![]))
                }
                Selectable::Range(entry) => {
                    tracing::debug!(test = %entry.test, "range rows have no detail screen");
                    Ok((false, vec![]))
                }
            }
        }
        Event::Back => Ok((state.go_back(), vec![])),
        Event::Char(c) => {
            let changed = state.push_char(*c);
            if changed {
                tracing::trace!(query = ?state.active_query(), char = %c, "query updated");
            }
            Ok((changed, vec![]))
        }
        Event::Backspace => Ok((state.pop_char(), vec![])),
        Event::ClearQuery => {
            if state.active_query().map_or(true, str::is_empty) {
                return Ok((false, vec![]));
            }
            Ok((state.set_query(""), vec![]))
        }
        Event::OpenChapter(id) => {
            if state.screen() == Screen::ChapterDetail(*id) {
                return Ok((false, vec![]));
            }
            if state.open_chapter(*id) {
                Ok((true, vec![]))
            } else {
                Err(BloodRefError::NotFound(format!("chapter {id}")))
            }
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Manifest;
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(Manifest::embedded().unwrap(), Theme::default())
    }

    fn run(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    #[test]
    fn typing_on_home_is_ignored() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Char('a')).unwrap();
        assert!(!render);
        assert_eq!(state.screen(), Screen::Home);
    }

    #[test]
    fn select_on_home_opens_chapter() {
        let mut state = state();
        run(&mut state, &[Event::KeyDown, Event::Select]);
        assert_eq!(state.screen(), Screen::ChapterDetail(2));
        assert_eq!(state.tab, Tab::Chapters);
    }

    #[test]
    fn type_filter_then_open() {
        let mut state = state();
        run(
            &mut state,
            &[
                Event::SelectTab(Tab::Chapters),
                Event::Char('l'),
                Event::Char('f'),
                Event::Char('t'),
                Event::Select,
            ],
        );
        assert_eq!(state.screen(), Screen::ChapterDetail(2));

        run(&mut state, &[Event::Back]);
        assert_eq!(state.screen(), Screen::ChapterList);
        assert_eq!(state.list_query, "lft");
    }

    #[test]
    fn backspace_and_clear() {
        let mut state = state();
        run(
            &mut state,
            &[Event::SelectTab(Tab::Search), Event::Char('x'), Event::Char('y')],
        );
        run(&mut state, &[Event::Backspace]);
        assert_eq!(state.search_query, "x");

        let (render, _) = handle_event(&mut state, &Event::ClearQuery).unwrap();
        assert!(render);
        assert!(state.search_query.is_empty());

        let (render, _) = handle_event(&mut state, &Event::ClearQuery).unwrap();
        assert!(!render);
    }

    #[test]
    fn selecting_a_range_row_stays_put() {
        let mut state = state();
        run(&mut state, &[Event::SelectTab(Tab::Search)]);
        for c in "sodium".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        // Chapter 3 first, then the Sodium range.
        run(&mut state, &[Event::KeyDown]);
        assert!(matches!(state.selected(), Some(Selectable::Range(_))));

        let (render, _) = handle_event(&mut state, &Event::Select).unwrap();
        assert!(!render);
        assert_eq!(state.screen(), Screen::Search);
    }

    #[test]
    fn open_unknown_chapter_is_not_found() {
        let mut state = state();
        let err = handle_event(&mut state, &Event::OpenChapter(99)).unwrap_err();
        assert!(matches!(err, BloodRefError::NotFound(_)));
    }

    #[test]
    fn tabs_cycle() {
        let mut state = state();
        run(&mut state, &[Event::PrevTab]);
        assert_eq!(state.tab, Tab::About);
        run(&mut state, &[Event::NextTab, Event::NextTab]);
        assert_eq!(state.tab, Tab::Chapters);
    }

    #[test]
    fn quit_emits_action() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert_eq!(actions, vec![Action::Quit]);
    }
}
