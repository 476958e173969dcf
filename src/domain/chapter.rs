//! Chapter domain model.
//!
//! A [`ChapterRecord`] is one entry of the content manifest: a titled chapter with
//! its section outline and optional clinical pearls and red flags. Records are
//! loaded once and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Number of words per minute assumed when no read time is given.
const WORDS_PER_MINUTE: usize = 200;

/// A short, memorable clinical teaching point attached to a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalPearl {
    pub title: String,
    pub content: String,
    /// Free-form grouping such as `interpretation` or `diagnostic`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One chapter of the reference content.
///
/// # Fields
///
/// - `id`: Unique positive identifier, stable across releases
/// - `title` / `description`: Searchable text
/// - `short_title`: Compact label used by the home screen quick access grid
/// - `icon` / `color`: Presentation hints (Material icon name, hex colour)
/// - `estimated_read_time`: Display string such as `"15 min"`
/// - `sections`: Ordered section headings
/// - `clinical_pearls` / `red_flags`: Optional teaching content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_read_time: Option<String>,
    #[serde(default)]
    pub sections: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_pearls: Option<Vec<ClinicalPearl>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red_flags: Option<Vec<String>>,
}

impl ChapterRecord {
    /// Creates a chapter with only the required fields set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloodref::ChapterRecord;
    ///
    /// let chapter = ChapterRecord::new(7, "Lipid Profile", "Cardiovascular risk assessment");
    /// assert_eq!(chapter.label(), "Lipid Profile");
    /// assert!(chapter.pearls().is_empty());
    /// ```
    #[must_use]
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            short_title: None,
            icon: None,
            color: None,
            estimated_read_time: None,
            sections: Vec::new(),
            clinical_pearls: None,
            red_flags: None,
        }
    }

    /// Returns the short title if present, otherwise the full title.
    #[must_use]
    pub fn label(&self) -> &str {
        self.short_title.as_deref().unwrap_or(&self.title)
    }

    /// Clinical pearls, empty when the chapter has none.
    #[must_use]
    pub fn pearls(&self) -> &[ClinicalPearl] {
        self.clinical_pearls.as_deref().unwrap_or_default()
    }

    /// Red flags, empty when the chapter has none.
    #[must_use]
    pub fn flags(&self) -> &[String] {
        self.red_flags.as_deref().unwrap_or_default()
    }

    /// Returns the read time for display.
    ///
    /// Uses `estimated_read_time` when set. Otherwise estimates from the word count
    /// of the description, sections and pearls, never less than one minute.
    #[must_use]
    pub fn read_time(&self) -> String {
        if let Some(time) = &self.estimated_read_time {
            return time.clone();
        }

        let words = self.description.split_whitespace().count()
            + self
                .sections
                .iter()
                .map(|s| s.split_whitespace().count())
                .sum::<usize>()
            + self
                .pearls()
                .iter()
                .map(|p| p.content.split_whitespace().count())
                .sum::<usize>();

        let minutes = ((words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE).max(1);
        format!("{minutes} min")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_short_title() {
        let mut chapter = ChapterRecord::new(1, "Full Blood Count (FBC)", "desc");
        assert_eq!(chapter.label(), "Full Blood Count (FBC)");

        chapter.short_title = Some("FBC".to_string());
        assert_eq!(chapter.label(), "FBC");
    }

    #[test]
    fn read_time_uses_explicit_value() {
        let mut chapter = ChapterRecord::new(1, "t", "d");
        chapter.estimated_read_time = Some("15 min".to_string());
        assert_eq!(chapter.read_time(), "15 min");
    }

    #[test]
    fn read_time_estimate_has_one_minute_floor() {
        let chapter = ChapterRecord::new(1, "t", "a few words");
        assert_eq!(chapter.read_time(), "1 min");
    }

    #[test]
    fn optional_lists_default_to_empty() {
        let chapter = ChapterRecord::new(2, "Liver Function Tests", "LFTs");
        assert!(chapter.pearls().is_empty());
        assert!(chapter.flags().is_empty());
    }
}
