//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into text with optional ANSI colour, through
//! composable rendering components.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, wrapping)
//! - [`theme`]: Colour scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_ranges, render_stats, render_to_string, DEFAULT_WIDTH};
pub use theme::{Theme, DEFAULT_THEME};
pub use viewmodel::{
    Body, ChapterDetail, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ItemKind,
    SearchBarInfo, TabInfo, UIViewModel,
};
