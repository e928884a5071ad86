//! Single-line parser for `\NomenclaturEntry{name}{symbol}{description}{sort_key}` records.
//!
//! Arguments are read positionally with a brace-depth counter. Everything between an
//! argument's outer braces is kept verbatim, nested `{`/`}` included, and text outside
//! the braces between arguments is ignored.
//!
//! An empty group directly after the keyword is consumed up front. When four groups
//! follow it they are the record (a legacy five-field line with a leading empty field);
//! when exactly three follow, the name itself is the empty string.

use crate::error::RecordParseError;
use crate::models::GlossaryEntry;

pub const RECORD_KEYWORD: &str = r"\NomenclaturEntry";

const ARG_COUNT: usize = 4;

/// A successfully parsed record line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub name: String,
    pub entry: GlossaryEntry,
}

/// Parse one trimmed, non-comment line of the nomenclature file
pub fn parse_record_line(line: &str) -> Result<ParsedRecord, RecordParseError> {
    let rest = line.strip_prefix(RECORD_KEYWORD).ok_or(RecordParseError::MissingKeyword)?.trim();

    let (rest, leading_empty) = match rest.strip_prefix("{}") {
        Some(after) => (after.trim_start(), true),
        None if rest.starts_with('{') => (rest, false),
        None => return Err(RecordParseError::MissingOpeningBrace),
    };

    let mut args = brace_groups(rest, ARG_COUNT);
    if leading_empty && args.len() == ARG_COUNT - 1 {
        args.insert(0, String::new());
    }
    if args.len() != ARG_COUNT {
        return Err(RecordParseError::IncompleteArguments { found: args.len() });
    }

    let mut args = args.into_iter();
    let mut next = || args.next().unwrap_or_default();
    let name = next();
    let entry = GlossaryEntry { symbol: next(), description: next(), sort_key: next() };
    Ok(ParsedRecord { name, entry })
}

/// Collect up to `limit` complete top-level brace groups from `input`
fn brace_groups(input: &str, limit: usize) -> Vec<String> {
    let mut groups = Vec::with_capacity(limit);
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in input.chars() {
        match ch {
            '{' => {
                if depth > 0 {
                    current.push(ch);
                }
                depth += 1;
            }
            '}' => match depth {
                // stray closing brace between groups
                0 => {}
                1 => {
                    depth = 0;
                    groups.push(std::mem::take(&mut current));
                    if groups.len() == limit {
                        break;
                    }
                }
                _ => {
                    depth -= 1;
                    current.push(ch);
                }
            },
            _ if depth > 0 => current.push(ch),
            _ => {}
        }
    }

    groups
}

/// Render one record in the primary file format, including the trailing newline
pub fn format_record_line(name: &str, entry: &GlossaryEntry) -> String {
    format!(
        "{RECORD_KEYWORD}{{{name}}}{{{}}}{{{}}}{{{}}}\n",
        entry.symbol, entry.description, entry.sort_key
    )
}
