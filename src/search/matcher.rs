//! Case-insensitive substring matching.
//!
//! A [`Needle`] is a normalized query. Only the emptiness check trims; the needle
//! itself is the whole query lowercased, so leading or trailing spaces take part in
//! matching exactly as typed.

/// A non-blank, lowercased query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(String);

impl Needle {
    /// Normalizes a query, returning `None` when it is absent or blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloodref::search::Needle;
    ///
    /// assert!(Needle::new(None).is_none());
    /// assert!(Needle::new(Some("   ")).is_none());
    /// assert_eq!(Needle::new(Some("IRON")).unwrap().as_str(), "iron");
    /// ```
    #[must_use]
    pub fn new(query: Option<&str>) -> Option<Self> {
        let query = query.unwrap_or_default();
        if query.trim().is_empty() {
            None
        } else {
            Some(Self(query.to_lowercase()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the needle occurs in `haystack`, which must already be
    /// lowercase.
    #[must_use]
    pub fn found_in(&self, haystack: &str) -> bool {
        haystack.contains(self.0.as_str())
    }

    /// Finds the first match in `text` as a character range `(start, end)`.
    ///
    /// Returns `None` when there is no match or when lowercasing changes the
    /// character count of `text`, since indices would no longer line up.
    #[must_use]
    pub fn char_range_in(&self, text: &str) -> Option<(usize, usize)> {
        let lower = text.to_lowercase();
        if lower.chars().count() != text.chars().count() {
            return None;
        }

        let byte_start = lower.find(self.0.as_str())?;
        let start = lower[..byte_start].chars().count();
        let end = start + self.0.chars().count();
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_blank() {
        assert!(Needle::new(Some("\t \n")).is_none());
        assert!(Needle::new(Some("")).is_none());
    }

    #[test]
    fn surrounding_spaces_are_kept_in_needle() {
        let needle = Needle::new(Some(" iron")).unwrap();
        assert_eq!(needle.as_str(), " iron");
        assert!(!needle.found_in("iron, b12 & folate"));
        assert!(needle.found_in("serum iron"));
    }

    #[test]
    fn char_range_is_case_insensitive() {
        let needle = Needle::new(Some("blood")).unwrap();
        assert_eq!(needle.char_range_in("Full Blood Count (FBC)"), Some((5, 10)));
    }

    #[test]
    fn char_range_counts_characters_not_bytes() {
        let needle = Needle::new(Some("l")).unwrap();
        assert_eq!(needle.char_range_in("×10⁹/L"), Some((5, 6)));
    }

    #[test]
    fn char_range_absent_when_no_match() {
        let needle = Needle::new(Some("xyz")).unwrap();
        assert_eq!(needle.char_range_in("Lipid Profile"), None);
    }
}
