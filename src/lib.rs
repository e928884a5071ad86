//! Glossary Store - maintain a LaTeX nomenclature backed by plain-text files
//!
//! A glossary directory holds three files:
//!
//! - `nomenclature.tex` - one `\NomenclaturEntry{name}{symbol}{description}{sort_key}` per entry
//! - `defvars.tex` - generated `\def\name{\Var{name}}` lines
//! - `macros.tex` - generated `\def\name{{symbol}}` lines
//!
//! [`GlossaryStore`] loads the record file into a name-keyed mapping and rewrites all three
//! files from it on save. [`DirectoryHistory`] remembers the most recently used glossary
//! directories in a small JSON document.
//!
//! # Example
//!
//! ```no_run
//! use glossary_store::{GlossaryEntry, GlossaryStore};
//!
//! let mut store = GlossaryStore::new("/home/alice/thesis/notation");
//! let report = store.load()?;
//! println!("Loaded {} entries ({} skipped)", report.loaded, report.skipped.len());
//!
//! store.insert("T", GlossaryEntry::new("T", "Temperature", "T"));
//! store.save()?;
//! # Ok::<(), glossary_store::GlossaryError>(())
//! ```

pub mod cli;
pub mod error;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod render;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use error::{GlossaryError, RecordParseError};
pub use filters::filter_names;
pub use models::{GlossaryEntry, GlossaryFiles};
pub use parsers::{parse_nomenclature_file, parse_record_line};
pub use store::{DirectoryHistory, GlossaryStore, LoadReport};
pub use utils::{has_balanced_braces, is_valid_name, macro_reference, normalize_path};
