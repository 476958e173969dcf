//! Keyword search over reference content.
//!
//! # Modules
//!
//! - `index`: [`KeywordSearchIndex`] and its result types
//! - `matcher`: Query normalization and substring matching
//! - `policy`: [`EmptyQueryPolicy`] for blank queries

pub mod index;
pub mod matcher;
pub mod policy;

pub use index::{KeywordSearchIndex, SearchHit, SearchResults};
pub use matcher::Needle;
pub use policy::EmptyQueryPolicy;
