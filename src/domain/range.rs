//! Normal reference range model.
//!
//! Reference ranges are authored as ordered tables, one per category (`fbc`,
//! `biochemistry`, ...), each mapping a test name to a range string. Searching and
//! display work on the flattened [`RangeEntry`] form, which keeps category order
//! first and test order within a category second.

use serde::{Deserialize, Serialize};

/// One test row inside a [`RangeTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeTest {
    /// Test name, e.g. `"Haemoglobin (Male)"`.
    pub name: String,
    /// Range text including units, e.g. `"130-175 g/L"`.
    pub range: String,
}

/// An ordered category of reference ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeTable {
    pub category: String,
    #[serde(default)]
    pub tests: Vec<RangeTest>,
}

impl RangeTable {
    /// Creates a table from `(test, range)` pairs, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloodref::domain::RangeTable;
    ///
    /// let table = RangeTable::new("fbc", [("Haemoglobin (Male)", "130-175 g/L")]);
    /// let entries = table.entries();
    /// assert_eq!(entries[0].category, "fbc");
    /// assert_eq!(entries[0].test, "Haemoglobin (Male)");
    /// assert_eq!(entries[0].range, "130-175 g/L");
    /// ```
    pub fn new<I, T, R>(category: impl Into<String>, tests: I) -> Self
    where
        I: IntoIterator<Item = (T, R)>,
        T: Into<String>,
        R: Into<String>,
    {
        Self {
            category: category.into(),
            tests: tests
                .into_iter()
                .map(|(name, range)| RangeTest {
                    name: name.into(),
                    range: range.into(),
                })
                .collect(),
        }
    }

    /// Flattens this table into entries tagged with the category.
    #[must_use]
    pub fn entries(&self) -> Vec<RangeEntry> {
        self.tests
            .iter()
            .map(|test| RangeEntry {
                category: self.category.clone(),
                test: test.name.clone(),
                range: test.range.clone(),
            })
            .collect()
    }
}

/// A flattened reference range: `{category, test, range}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEntry {
    pub category: String,
    pub test: String,
    pub range: String,
}

/// Flattens every table in order into a single entry list.
#[must_use]
pub fn flatten_ranges(tables: &[RangeTable]) -> Vec<RangeEntry> {
    tables.iter().flat_map(RangeTable::entries).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_keeps_category_then_test_order() {
        let tables = vec![
            RangeTable::new("fbc", [("MCV", "82-100 fl"), ("WCC", "4.0-11.0 ×10⁹/L")]),
            RangeTable::new("biochemistry", [("Sodium", "135-145 mmol/L")]),
        ];

        let tests: Vec<(String, String)> = flatten_ranges(&tables)
            .into_iter()
            .map(|e| (e.category, e.test))
            .collect();

        assert_eq!(
            tests,
            vec![
                ("fbc".to_string(), "MCV".to_string()),
                ("fbc".to_string(), "WCC".to_string()),
                ("biochemistry".to_string(), "Sodium".to_string()),
            ]
        );
    }

    #[test]
    fn empty_table_flattens_to_nothing() {
        let table = RangeTable::new("empty", Vec::<(String, String)>::new());
        assert!(table.entries().is_empty());
    }
}
