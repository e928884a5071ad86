use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{GlossaryError, RecordParseError, Result};
use crate::models::GlossaryEntry;
use crate::parsers::record::parse_record_line;
use crate::utils::validate_file_size;

const COMMENT_MARKER: char = '%';

/// A record line that was skipped during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source file
    pub line_number: usize,
    pub line: String,
    pub reason: RecordParseError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedNomenclature {
    pub entries: BTreeMap<String, GlossaryEntry>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse the primary nomenclature file into a name-keyed mapping
/// Malformed lines are logged and reported in `skipped`; later duplicates overwrite earlier ones
pub fn parse_nomenclature_file(path: &Path) -> Result<ParsedNomenclature> {
    let file = File::open(path).map_err(|e| GlossaryError::io(path, e))?;
    validate_file_size(&file, path)?;

    let reader = BufReader::new(file);
    let mut parsed = ParsedNomenclature::default();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| GlossaryError::io(path, e))?;
        let line = line.trim();

        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        match parse_record_line(line) {
            Ok(record) => {
                parsed.entries.insert(record.name, record.entry);
            }
            Err(reason) => {
                log::warn!("Skipping malformed line {}: {} - {}", line_num + 1, line, reason);
                parsed.skipped.push(SkippedLine {
                    line_number: line_num + 1,
                    line: line.to_string(),
                    reason,
                });
            }
        }
    }

    if !parsed.skipped.is_empty() {
        log::info!(
            "Parsed {}: {} entries ({} skipped)",
            path.display(),
            parsed.entries.len(),
            parsed.skipped.len()
        );
    }

    Ok(parsed)
}
