//! The two stores behind the glossary editor
//!
//! - [`GlossaryStore`] - name-keyed glossary entries loaded from and saved to a directory
//! - [`DirectoryHistory`] - bounded list of recently used glossary directories
//!
//! The stores are independent of each other. Both do plain blocking file I/O and assume a
//! single process owns the files they touch.

pub mod glossary;
pub mod history;

pub use glossary::{GlossaryStore, LoadReport};
pub use history::{DEFAULT_MAX_ENTRIES, DirectoryHistory};
