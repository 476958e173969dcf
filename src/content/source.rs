//! Content source abstraction.
//!
//! This module defines the [`ContentSource`] trait that the search index and the
//! application layer read content through. The compiled-in [`Manifest`] is the
//! only production implementation; tests build small manifests from TOML text.
//!
//! [`Manifest`]: super::Manifest

use super::ContentStats;
use crate::domain::{flatten_ranges, ChapterRecord, RangeTable};

/// Read-only access to reference content.
///
/// Implementations hand out borrowed slices. Content is immutable for the life
/// of the source, so repeated calls return the same data in the same order.
pub trait ContentSource {
    /// All chapters in manifest order.
    fn chapters(&self) -> &[ChapterRecord];

    /// Lowercase keywords for a chapter.
    ///
    /// Ids absent from the source yield an empty slice, never an error.
    fn keywords_for(&self, id: u32) -> &[String];

    /// Reference range tables in manifest order.
    fn range_tables(&self) -> &[RangeTable];

    /// Looks up a chapter by id.
    fn chapter(&self, id: u32) -> Option<&ChapterRecord> {
        self.chapters().iter().find(|c| c.id == id)
    }

    /// Counts chapters, pearls, red flags and flattened range entries.
    fn stats(&self) -> ContentStats {
        let chapters = self.chapters();
        ContentStats {
            chapters: chapters.len(),
            clinical_pearls: chapters.iter().map(|c| c.pearls().len()).sum(),
            red_flags: chapters.iter().map(|c| c.flags().len()).sum(),
            range_entries: flatten_ranges(self.range_tables()).len(),
        }
    }
}
