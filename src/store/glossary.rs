//! The nomenclature record store: one owned mapping per glossary directory.
//!
//! Loading reads only the primary record file; the variable-definition and macro files are
//! write-only projections regenerated in full on every save. There is no file locking, so two
//! writers pointed at the same directory will overwrite each other's files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GlossaryError, Result};
use crate::models::{GlossaryEntry, GlossaryFiles};
use crate::parsers::{SkippedLine, parse_nomenclature_file};
use crate::render::{render_def_vars, render_macros, render_nomenclature, render_summary};

/// Outcome of a successful load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug, Clone)]
pub struct GlossaryStore {
    base_dir: PathBuf,
    files: GlossaryFiles,
    entries: BTreeMap<String, GlossaryEntry>,
    modified: bool,
}

impl GlossaryStore {
    /// Create an empty store for `base_dir`; nothing is read until [`GlossaryStore::load`]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let files = GlossaryFiles::in_dir(&base_dir);
        Self { base_dir, files, entries: BTreeMap::new(), modified: false }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn files(&self) -> &GlossaryFiles {
        &self.files
    }

    /// Replace the mapping with the contents of the primary record file
    ///
    /// # Errors
    ///
    /// - [`GlossaryError::MissingFiles`] if any of the three required files is absent
    /// - [`GlossaryError::Io`] / [`GlossaryError::FileTooLarge`] if the record file cannot be read
    ///
    /// The mapping is empty after any error. Malformed lines are not errors; they are logged
    /// and listed in [`LoadReport::skipped`].
    pub fn load(&mut self) -> Result<LoadReport> {
        self.entries.clear();
        self.modified = false;

        let missing: Vec<String> = self
            .files
            .required()
            .iter()
            .filter(|(_, path)| !path.exists())
            .map(|(name, _)| name.to_string())
            .collect();
        if !missing.is_empty() {
            log::warn!("Missing required files: {}", missing.join(", "));
            return Err(GlossaryError::MissingFiles { base_dir: self.base_dir.clone(), missing });
        }

        let parsed = parse_nomenclature_file(&self.files.nomenclature).inspect_err(|e| {
            log::error!("Error loading glossary: {e}");
        })?;

        self.entries = parsed.entries;
        log::info!("Successfully loaded {} entries", self.entries.len());

        Ok(LoadReport { loaded: self.entries.len(), skipped: parsed.skipped })
    }

    /// Rewrite the primary record file and both projections from the current mapping
    ///
    /// Files are written in order (records, variable definitions, macros). A failure part way
    /// through leaves the files already written in place.
    pub fn save(&mut self) -> Result<()> {
        let outputs = [
            (&self.files.nomenclature, render_nomenclature(&self.entries)),
            (&self.files.def_vars, render_def_vars(&self.entries)),
            (&self.files.macros, render_macros(&self.entries)),
        ];

        for (path, content) in outputs {
            write_file(path, &content).inspect_err(|e| {
                log::error!("Error saving glossary: {e}");
            })?;
        }

        self.modified = false;
        log::debug!("Saved {} entries to {}", self.entries.len(), self.base_dir.display());
        Ok(())
    }

    /// Write `nomenclature.log` listing each entry's name and symbol
    pub fn write_summary(&self) -> Result<()> {
        write_file(&self.files.summary, &render_summary(&self.entries))
    }

    /// Insert or replace an entry, returning the previous one
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        entry: GlossaryEntry,
    ) -> Option<GlossaryEntry> {
        self.modified = true;
        self.entries.insert(name.into(), entry)
    }

    pub fn remove(&mut self, name: &str) -> Option<GlossaryEntry> {
        let removed = self.entries.remove(name);
        if removed.is_some() {
            self.modified = true;
        }
        removed
    }

    pub fn get(&self, name: &str) -> Option<&GlossaryEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Read-only view of the mapping in name order
    pub fn entries(&self) -> &BTreeMap<String, GlossaryEntry> {
        &self.entries
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Names of all entries whose symbol equals `symbol`
    pub fn find_by_symbol(&self, symbol: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.symbol == symbol)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the mapping changed since the last load or save
    pub fn is_modified(&self) -> bool {
        self.modified
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| GlossaryError::io(path, e))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> GlossaryStore {
        GlossaryStore::new(dir.path())
    }

    #[test]
    fn test_new_store_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
        assert!(!store.is_modified());
        assert_eq!(store.base_dir(), dir.path());
    }

    #[test]
    fn test_insert_and_update_in_place() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        assert!(store.insert("T", GlossaryEntry::new("T", "Temperature", "T")).is_none());
        let previous = store.insert("T", GlossaryEntry::new("\\theta", "Temp", "t"));
        assert_eq!(previous.unwrap().description, "Temperature");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("T").unwrap().symbol, "\\theta");
        assert!(store.is_modified());
    }

    #[test]
    fn test_remove_missing_does_not_mark_modified() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert!(store.remove("nope").is_none());
        assert!(!store.is_modified());
    }

    #[test]
    fn test_save_clears_modified_flag() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.insert("p", GlossaryEntry::new("P", "Pressure", "P"));
        store.save().unwrap();
        assert!(!store.is_modified());
        assert!(store.files().def_vars.exists());
        assert!(store.files().macros.exists());
    }

    #[test]
    fn test_find_by_symbol() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.insert("T", GlossaryEntry::new("T", "Temperature", "T"));
        store.insert("Tw", GlossaryEntry::new("T", "Wall temperature", "Tw"));
        store.insert("p", GlossaryEntry::new("P", "Pressure", "P"));
        assert_eq!(store.find_by_symbol("T"), vec!["T", "Tw"]);
        assert!(store.find_by_symbol("Q").is_empty());
    }

    #[test]
    fn test_load_missing_files_names_each() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("nomenclature.tex"), "").unwrap();
        let mut store = store_in(&dir);

        match store.load() {
            Err(GlossaryError::MissingFiles { missing, .. }) => {
                assert_eq!(missing, vec!["defvars.tex".to_string(), "macros.tex".to_string()]);
            }
            other => panic!("expected MissingFiles, got {other:?}"),
        }
    }

    #[test]
    fn test_load_clears_previous_entries_on_failure() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.insert("x", GlossaryEntry::default());
        assert!(store.load().is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = GlossaryStore::new(dir.path().join("does-not-exist"));
        store.insert("x", GlossaryEntry::new("x", "unknown", "x"));
        assert!(matches!(store.save(), Err(GlossaryError::Io { .. })));
        assert!(store.is_modified());
    }

    #[test]
    fn test_write_summary() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.insert("T", GlossaryEntry::new("T", "Temperature", "T"));
        store.write_summary().unwrap();
        let summary = std::fs::read_to_string(&store.files().summary).unwrap();
        assert_eq!(summary, "T : T\n");
    }
}
