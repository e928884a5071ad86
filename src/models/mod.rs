//! Data models for glossary records and directory history.
//!
//! - [`GlossaryEntry`] - symbol, description and sort key of one named record
//! - [`GlossaryFiles`] - paths of the files backing a glossary directory
//! - [`HistoryDocument`] - JSON document holding recently used directories

pub mod glossary;
pub mod history;

pub use glossary::{GlossaryEntry, GlossaryFiles};
pub use history::HistoryDocument;
