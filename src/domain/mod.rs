//! Domain layer for bloodref.
//!
//! Core record types and errors, independent of how content is stored or
//! rendered.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`chapter`]: Chapter records and clinical pearls
//! - [`range`]: Reference range tables and their flattened entries
//!
//! # Examples
//!
//! ```
//! use bloodref::domain::{ChapterRecord, Result};
//!
//! fn make_chapter() -> Result<ChapterRecord> {
//!     Ok(ChapterRecord::new(3, "Urea & Electrolytes", "Kidney function"))
//! }
//! # make_chapter().unwrap();
//! ```

pub mod chapter;
pub mod error;
pub mod range;

pub use chapter::{ChapterRecord, ClinicalPearl};
pub use error::{BloodRefError, Result};
pub use range::{flatten_ranges, RangeEntry, RangeTable, RangeTest};
