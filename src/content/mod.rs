//! Content layer for the reference manifest.
//!
//! Chapters, keyword sets and reference range tables ship inside the binary as a
//! TOML manifest. This module parses and validates that manifest and exposes it
//! through the [`ContentSource`] trait.
//!
//! # Modules
//!
//! - `source`: Read-only content trait consumed by search and the app layer
//! - `manifest`: Validated manifest and the embedded copy
//! - `models`: Serialized TOML layout

pub mod manifest;
pub mod models;
pub mod source;

pub use manifest::{ContentStats, Manifest};
pub use models::{ManifestData, MANIFEST_VERSION};
pub use source::ContentSource;
