//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the front end (main.rs) and the content/search
//! layers. It implements the event-driven navigation behind both the one-shot
//! commands and the interactive `browse` loop.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                            ↓
//!                                      compute_viewmodel → Renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Tab and screen types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Screen, Tab};
pub use state::{AppState, Selectable};
