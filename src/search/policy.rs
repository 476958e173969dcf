//! Empty-query policy.
//!
//! The unified search screen and the chapter list share one filter but disagree on
//! what a blank query means. The screen that searches everything starts empty; the
//! browsable list starts full.

use serde::{Deserialize, Serialize};

/// What a filter returns when the trimmed query is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyQueryPolicy {
    /// Return no records. Used by the unified search.
    ReturnNone,
    /// Return every record unfiltered. Used by the chapter list.
    ReturnAll,
}

impl std::fmt::Display for EmptyQueryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReturnNone => f.write_str("return-none"),
            Self::ReturnAll => f.write_str("return-all"),
        }
    }
}
