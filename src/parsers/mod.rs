//! Parsers for the nomenclature record format
//!
//! # Error Handling Strategy
//!
//! - **Individual line failures**: Malformed record lines are logged as warnings and skipped,
//!   and each one is reported back to the caller as a [`SkippedLine`]. A bad line never breaks
//!   the rest of the file.
//!
//! - **I/O failures**: A file that cannot be opened or read (including invalid UTF-8 and
//!   oversized files) fails the whole parse with a [`crate::error::GlossaryError`].

pub mod nomenclature;
pub mod record;

pub use nomenclature::{ParsedNomenclature, SkippedLine, parse_nomenclature_file};
pub use record::{ParsedRecord, RECORD_KEYWORD, format_record_line, parse_record_line};
