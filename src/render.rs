//! Projections of a glossary mapping into the text of its output files.
//!
//! Every projection iterates the mapping in name order, so rendering the same mapping twice
//! yields identical text.

use std::collections::BTreeMap;

use crate::models::GlossaryEntry;
use crate::parsers::format_record_line;

/// Primary record file: one `\NomenclaturEntry{..}{..}{..}{..}` line per entry
pub fn render_nomenclature(entries: &BTreeMap<String, GlossaryEntry>) -> String {
    entries.iter().map(|(name, entry)| format_record_line(name, entry)).collect()
}

/// Variable definitions: `\def\name{\Var{name}}` per entry
pub fn render_def_vars(entries: &BTreeMap<String, GlossaryEntry>) -> String {
    entries.keys().map(|name| format!("\\def\\{name}{{\\Var{{{name}}}}}\n")).collect()
}

/// Macro definitions: `\def\name{{symbol}}` per entry
///
/// The symbol sits inside doubled braces so the expansion stays grouped wherever the macro
/// is used.
pub fn render_macros(entries: &BTreeMap<String, GlossaryEntry>) -> String {
    entries
        .iter()
        .map(|(name, entry)| format!("\\def\\{name}{{{{{}}}}}\n", entry.symbol))
        .collect()
}

/// Summary listing: `name : symbol` per entry
pub fn render_summary(entries: &BTreeMap<String, GlossaryEntry>) -> String {
    entries.iter().map(|(name, entry)| format!("{name} : {}\n", entry.symbol)).collect()
}
