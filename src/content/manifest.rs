//! Validated content manifest.
//!
//! The manifest is parsed from TOML once and then treated as read-only. The
//! compiled-in manifest is embedded with `include_str!` and cached in a
//! process-wide [`OnceLock`] on first access.
//!
//! # Validation
//!
//! - Chapter ids must be positive and unique
//! - Keyword table keys must parse as chapter ids
//! - Keywords are lowercased and deduplicated preserving order; surrounding
//!   whitespace is kept and takes part in matching

use crate::content::models::{ManifestData, MANIFEST_VERSION};
use crate::content::source::ContentSource;
use crate::domain::error::{BloodRefError, Result};
use crate::domain::{ChapterRecord, RangeTable};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Compiled-in manifest text.
const EMBEDDED_MANIFEST: &str = include_str!("../../data/manifest.toml");

static EMBEDDED: OnceLock<Manifest> = OnceLock::new();

/// Immutable reference content: chapters, keyword sets and range tables.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    chapters: Vec<ChapterRecord>,
    keywords: HashMap<u32, Vec<String>>,
    range_tables: Vec<RangeTable>,
}

/// Aggregate counts shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    pub chapters: usize,
    pub clinical_pearls: usize,
    pub red_flags: usize,
    pub range_entries: usize,
}

impl Manifest {
    /// Builds a manifest from already-typed parts.
    ///
    /// Applies the same validation as [`Manifest::from_toml_str`].
    ///
    /// # Errors
    ///
    /// Returns [`BloodRefError::Manifest`] if a chapter id is zero or repeated.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloodref::content::Manifest;
    /// use bloodref::domain::{ChapterRecord, RangeTable};
    /// use std::collections::HashMap;
    ///
    /// let manifest = Manifest::new(
    ///     vec![ChapterRecord::new(1, "Full Blood Count (FBC)", "Reading FBC results")],
    ///     HashMap::from([(1, vec!["Anaemia".to_string()])]),
    ///     vec![RangeTable::new("fbc", [("MCV", "82-100 fl")])],
    /// )?;
    /// assert_eq!(manifest.keywords(1), ["anaemia"]);
    /// assert!(manifest.keywords(42).is_empty());
    /// # Ok::<(), bloodref::BloodRefError>(())
    /// ```
    pub fn new(
        chapters: Vec<ChapterRecord>,
        keywords: HashMap<u32, Vec<String>>,
        range_tables: Vec<RangeTable>,
    ) -> Result<Self> {
        validate_chapter_ids(&chapters)?;

        let keywords = keywords
            .into_iter()
            .map(|(id, words)| (id, normalize_keywords(words)))
            .collect();

        Ok(Self {
            chapters,
            keywords,
            range_tables,
        })
    }

    /// Parses and validates a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`BloodRefError::Manifest`] if the TOML is malformed, the version is
    /// unsupported, a keyword key is not a chapter id, or chapter ids are invalid.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let data: ManifestData = toml::from_str(text)
            .map_err(|e| BloodRefError::Manifest(format!("failed to parse TOML: {e}")))?;

        if data.version > MANIFEST_VERSION {
            return Err(BloodRefError::Manifest(format!(
                "unsupported manifest version {} (expected <= {MANIFEST_VERSION})",
                data.version
            )));
        }

        let mut keywords = HashMap::with_capacity(data.keywords.len());
        for (key, words) in data.keywords {
            let id = key.trim().parse::<u32>().map_err(|_| {
                BloodRefError::Manifest(format!("keyword key {key:?} is not a chapter id"))
            })?;
            keywords.insert(id, words);
        }

        let manifest = Self::new(data.chapters, keywords, data.ranges)?;

        tracing::debug!(
            version = data.version,
            chapters = manifest.chapters.len(),
            keyword_sets = manifest.keywords.len(),
            range_tables = manifest.range_tables.len(),
            "manifest parsed"
        );

        Ok(manifest)
    }

    /// Returns the compiled-in manifest, parsing it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`BloodRefError::Manifest`] if the embedded text fails validation.
    /// The failure is not cached; a later call parses again.
    pub fn embedded() -> Result<&'static Self> {
        if let Some(manifest) = EMBEDDED.get() {
            return Ok(manifest);
        }

        let _span = tracing::debug_span!("load_embedded_manifest").entered();
        let parsed = Self::from_toml_str(EMBEDDED_MANIFEST)?;
        Ok(EMBEDDED.get_or_init(|| parsed))
    }

    /// Lowercase keywords for a chapter, empty for unknown ids.
    #[must_use]
    pub fn keywords(&self, id: u32) -> &[String] {
        self.keywords.get(&id).map(Vec::as_slice).unwrap_or_default()
    }
}

impl ContentSource for Manifest {
    fn chapters(&self) -> &[ChapterRecord] {
        &self.chapters
    }

    fn keywords_for(&self, id: u32) -> &[String] {
        self.keywords(id)
    }

    fn range_tables(&self) -> &[RangeTable] {
        &self.range_tables
    }
}

fn validate_chapter_ids(chapters: &[ChapterRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(chapters.len());
    for chapter in chapters {
        if chapter.id == 0 {
            return Err(BloodRefError::Manifest(format!(
                "chapter {:?} has id 0; ids must be positive",
                chapter.title
            )));
        }
        if !seen.insert(chapter.id) {
            return Err(BloodRefError::Manifest(format!(
                "duplicate chapter id {}",
                chapter.id
            )));
        }
    }
    Ok(())
}

fn normalize_keywords(words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .map(|w| w.to_lowercase())
        .filter(|w| !w.is_empty() && seen.insert(w.clone()))
        .collect()
}
