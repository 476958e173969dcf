//! Keyword search index over chapters and reference ranges.
//!
//! The index is built once from a [`ContentSource`]. Building lowercases every
//! searchable string and flattens range tables, so each query is a single pass
//! of substring checks with no allocation per record.
//!
//! # Matching Rules
//!
//! - Chapter: needle in title, OR in description, OR in any one keyword
//! - Range entry: needle in the test name only (not category, not range value)
//! - Results keep manifest order; there is no scoring

use crate::content::ContentSource;
use crate::domain::{flatten_ranges, ChapterRecord, RangeEntry};
use crate::search::matcher::Needle;
use crate::search::policy::EmptyQueryPolicy;
use serde::Serialize;

#[derive(Debug, Clone)]
struct IndexedChapter {
    record: ChapterRecord,
    title: String,
    description: String,
    keywords: Vec<String>,
}

impl IndexedChapter {
    fn matches(&self, needle: &Needle) -> bool {
        needle.found_in(&self.title)
            || needle.found_in(&self.description)
            || self.keywords.iter().any(|k| needle.found_in(k))
    }
}

#[derive(Debug, Clone)]
struct IndexedRange {
    entry: RangeEntry,
    test: String,
}

/// Search results in manifest order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults<'a> {
    pub chapters: Vec<&'a ChapterRecord>,
    pub ranges: Vec<&'a RangeEntry>,
}

/// One item of the combined result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum SearchHit<'a> {
    Chapter(&'a ChapterRecord),
    Range(&'a RangeEntry),
}

impl<'a> SearchResults<'a> {
    const fn empty() -> Self {
        Self {
            chapters: Vec::new(),
            ranges: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty() && self.ranges.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len() + self.ranges.len()
    }

    /// Chapters first, then range entries.
    #[must_use]
    pub fn hits(&self) -> Vec<SearchHit<'a>> {
        self.chapters
            .iter()
            .copied()
            .map(SearchHit::Chapter)
            .chain(self.ranges.iter().copied().map(SearchHit::Range))
            .collect()
    }
}

/// In-memory index answering substring queries.
///
/// # Examples
///
/// ```
/// use bloodref::content::Manifest;
/// use bloodref::search::KeywordSearchIndex;
///
/// let index = KeywordSearchIndex::build(Manifest::embedded()?);
///
/// let results = index.search("anaemia");
/// assert_eq!(results.chapters[0].id, 1);
///
/// assert!(index.search("").is_empty());
/// assert_eq!(index.filter_chapters("").len(), index.chapter_count());
/// # Ok::<(), bloodref::BloodRefError>(())
/// ```
#[derive(Debug, Clone)]
pub struct KeywordSearchIndex {
    chapters: Vec<IndexedChapter>,
    ranges: Vec<IndexedRange>,
}

impl KeywordSearchIndex {
    /// Builds an index from a content source.
    #[must_use]
    pub fn build(source: &impl ContentSource) -> Self {
        let _span = tracing::debug_span!("build_search_index").entered();

        let chapters: Vec<IndexedChapter> = source
            .chapters()
            .iter()
            .map(|record| IndexedChapter {
                title: record.title.to_lowercase(),
                description: record.description.to_lowercase(),
                keywords: source
                    .keywords_for(record.id)
                    .iter()
                    .map(|k| k.to_lowercase())
                    .collect(),
                record: record.clone(),
            })
            .collect();

        let ranges: Vec<IndexedRange> = flatten_ranges(source.range_tables())
            .into_iter()
            .map(|entry| IndexedRange {
                test: entry.test.to_lowercase(),
                entry,
            })
            .collect();

        tracing::debug!(
            chapters = chapters.len(),
            ranges = ranges.len(),
            "search index built"
        );

        Self { chapters, ranges }
    }

    /// Unified search: a blank query returns nothing.
    ///
    /// Accepts `&str` or `Option<&str>`; `None` behaves like `""`.
    pub fn search<'q>(&self, query: impl Into<Option<&'q str>>) -> SearchResults<'_> {
        self.filter(query, EmptyQueryPolicy::ReturnNone)
    }

    /// Chapter list filter: a blank query returns every chapter.
    pub fn filter_chapters<'q>(&self, query: impl Into<Option<&'q str>>) -> Vec<&ChapterRecord> {
        self.filter(query, EmptyQueryPolicy::ReturnAll).chapters
    }

    /// Filters chapters and ranges under an explicit empty-query policy.
    pub fn filter<'q>(
        &self,
        query: impl Into<Option<&'q str>>,
        policy: EmptyQueryPolicy,
    ) -> SearchResults<'_> {
        let query = query.into();
        let _span = tracing::debug_span!(
            "filter",
            query_len = query.map_or(0, str::len),
            policy = %policy
        )
        .entered();

        let Some(needle) = Needle::new(query) else {
            return match policy {
                EmptyQueryPolicy::ReturnNone => SearchResults::empty(),
                EmptyQueryPolicy::ReturnAll => SearchResults {
                    chapters: self.chapters.iter().map(|c| &c.record).collect(),
                    ranges: self.ranges.iter().map(|r| &r.entry).collect(),
                },
            };
        };

        let chapters: Vec<&ChapterRecord> = self
            .chapters
            .iter()
            .filter(|c| c.matches(&needle))
            .map(|c| &c.record)
            .collect();

        let ranges: Vec<&RangeEntry> = self
            .ranges
            .iter()
            .filter(|r| needle.found_in(&r.test))
            .map(|r| &r.entry)
            .collect();

        tracing::debug!(
            chapters = chapters.len(),
            ranges = ranges.len(),
            "filter applied"
        );

        SearchResults { chapters, ranges }
    }

    /// Looks up an indexed chapter by id.
    #[must_use]
    pub fn chapter(&self, id: u32) -> Option<&ChapterRecord> {
        self.chapters.iter().map(|c| &c.record).find(|c| c.id == id)
    }

    /// All chapters in manifest order.
    pub fn chapters(&self) -> impl Iterator<Item = &ChapterRecord> {
        self.chapters.iter().map(|c| &c.record)
    }

    /// All flattened range entries in manifest order.
    pub fn ranges(&self) -> impl Iterator<Item = &RangeEntry> {
        self.ranges.iter().map(|r| &r.entry)
    }

    #[must_use]
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Manifest;
    use crate::domain::RangeTable;
    use std::collections::HashMap;

    fn sample_index() -> KeywordSearchIndex {
        let mut fbc = ChapterRecord::new(
            1,
            "Full Blood Count (FBC)",
            "Reading and interpreting FBC results",
        );
        fbc.short_title = Some("FBC".to_string());
        let iron = ChapterRecord::new(5, "Iron, B12 & Folate", "Haematinics and deficiency patterns");
        let lipids = ChapterRecord::new(7, "Lipid Profile", "Cardiovascular risk assessment");

        let manifest = Manifest::new(
            vec![fbc, iron, lipids],
            HashMap::from([
                (1, vec!["anaemia".to_string(), "haemoglobin".to_string()]),
                (7, vec!["cholesterol".to_string()]),
            ]),
            vec![
                RangeTable::new(
                    "fbc",
                    [("Haemoglobin (Male)", "130-175 g/L"), ("MCV", "82-100 fl")],
                ),
                RangeTable::new("biochemistry", [("Sodium", "135-145 mmol/L")]),
            ],
        )
        .unwrap();

        KeywordSearchIndex::build(&manifest)
    }

    fn ids(chapters: &[&ChapterRecord]) -> Vec<u32> {
        chapters.iter().map(|c| c.id).collect()
    }

    #[test]
    fn blank_query_returns_nothing_for_search() {
        let index = sample_index();
        assert!(index.search("").is_empty());
        assert!(index.search("   ").is_empty());
        assert!(index.search(None::<&str>).is_empty());
    }

    #[test]
    fn blank_query_returns_everything_for_list_filter() {
        let index = sample_index();
        assert_eq!(ids(&index.filter_chapters("")), vec![1, 5, 7]);
        assert_eq!(ids(&index.filter_chapters(None::<&str>)), vec![1, 5, 7]);
        assert_eq!(ids(&index.filter_chapters(" \t")), vec![1, 5, 7]);
    }

    #[test]
    fn matches_title_description_and_keyword() {
        let index = sample_index();
        assert_eq!(ids(&index.search("folate").chapters), vec![5]);
        assert_eq!(ids(&index.search("cardiovascular").chapters), vec![7]);
        assert_eq!(ids(&index.search("choles").chapters), vec![7]);
    }

    #[test]
    fn range_matches_test_name_only() {
        let index = sample_index();

        let results = index.search("haemoglobin");
        assert_eq!(ids(&results.chapters), vec![1]);
        assert_eq!(
            results.ranges,
            vec![&RangeEntry {
                category: "fbc".to_string(),
                test: "Haemoglobin (Male)".to_string(),
                range: "130-175 g/L".to_string(),
            }]
        );

        assert!(index.search("biochemistry").ranges.is_empty());
        assert!(index.search("mmol").ranges.is_empty());
    }

    #[test]
    fn query_case_does_not_matter() {
        let index = sample_index();
        assert_eq!(index.search("IRON"), index.search("iron"));
        assert_eq!(index.search("HaEmOgLoBiN"), index.search("haemoglobin"));
    }

    #[test]
    fn hits_list_chapters_before_ranges() {
        let index = sample_index();
        let hits = index.search("haemoglobin").hits();
        assert!(matches!(hits[0], SearchHit::Chapter(c) if c.id == 1));
        assert!(matches!(hits[1], SearchHit::Range(r) if r.test == "Haemoglobin (Male)"));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn list_filter_applies_same_rule_when_query_present() {
        let index = sample_index();
        assert_eq!(ids(&index.filter_chapters("anaemia")), vec![1]);
        assert!(index.filter_chapters("xyz-not-present").is_empty());
    }

    #[test]
    fn hit_serializes_with_type_tag() {
        let index = sample_index();
        let results = index.search("sodium");
        let json = serde_json::to_value(results.hits()).unwrap();
        assert_eq!(json[0]["type"], "range");
        assert_eq!(json[0]["data"]["category"], "biochemistry");
    }
}
