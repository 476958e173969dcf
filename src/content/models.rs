//! Serialized manifest format.
//!
//! These types mirror the on-disk TOML layout exactly and are converted into a
//! validated [`Manifest`](super::Manifest) right after parsing. Keeping them
//! separate lets the file format stay flat while the in-memory form is indexed.
//!
//! # File Format
//!
//! ```toml
//! version = 1
//!
//! [[chapters]]
//! id = 1
//! title = "Full Blood Count (FBC)"
//! description = "Reading and interpreting FBC results"
//! sections = ["Introduction"]
//!
//! [keywords]
//! 1 = ["fbc", "anaemia"]
//!
//! [[ranges]]
//! category = "fbc"
//! tests = [{ name = "Haemoglobin (Male)", range = "130-175 g/L" }]
//! ```

use crate::domain::{ChapterRecord, RangeTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current manifest format version.
pub const MANIFEST_VERSION: u32 = 1;

const fn default_version() -> u32 {
    MANIFEST_VERSION
}

/// Top-level manifest document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestData {
    /// Format version for future migrations.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Chapters in display order.
    #[serde(default)]
    pub chapters: Vec<ChapterRecord>,

    /// Keyword lists keyed by chapter id. TOML table keys are strings, so ids are
    /// parsed during validation.
    #[serde(default)]
    pub keywords: BTreeMap<String, Vec<String>>,

    /// Reference range tables in display order.
    #[serde(default)]
    pub ranges: Vec<RangeTable>,
}

impl Default for ManifestData {
    fn default() -> Self {
        Self {
            version: MANIFEST_VERSION,
            chapters: Vec::new(),
            keywords: BTreeMap::new(),
            ranges: Vec::new(),
        }
    }
}
