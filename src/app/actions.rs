//! Actions representing side effects for the runtime to execute.
//!
//! The event handler only mutates [`AppState`](super::AppState). Anything that
//! reaches outside the state, such as ending the session, is returned as an
//! [`Action`] for the caller to carry out.

/// Commands the runtime executes after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Ends the interactive session.
    Quit,
}
