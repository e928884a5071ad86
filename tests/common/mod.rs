//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating test glossary directories
pub struct GlossaryDirBuilder {
    temp_dir: TempDir,
}

impl GlossaryDirBuilder {
    /// Create a new builder with an empty directory (no glossary files yet)
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the glossary directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write nomenclature.tex with the given content
    pub fn with_nomenclature(self, content: &str) -> Self {
        self.with_file("nomenclature.tex", content)
    }

    /// Write nomenclature.tex from records
    pub fn with_records(self, records: &[RecordBuilder]) -> Self {
        let content: String = records.iter().map(|r| r.to_line() + "\n").collect();
        self.with_nomenclature(&content)
    }

    /// Create empty defvars.tex and macros.tex
    pub fn with_derived_files(self) -> Self {
        self.with_file("defvars.tex", "").with_file("macros.tex", "")
    }

    /// Write an arbitrary file into the directory
    pub fn with_file(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for GlossaryDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `\NomenclaturEntry` lines
pub struct RecordBuilder {
    name: String,
    symbol: String,
    description: String,
    sort_key: String,
}

impl RecordBuilder {
    /// Create a record whose symbol and sort key default to the name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: name.to_string(),
            description: format!("Description of {}", name),
            sort_key: name.to_string(),
        }
    }

    pub fn symbol(mut self, symbol: &str) -> Self {
        self.symbol = symbol.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn sort_key(mut self, sort_key: &str) -> Self {
        self.sort_key = sort_key.to_string();
        self
    }

    /// Render the record line (without newline)
    pub fn to_line(&self) -> String {
        format!(
            "\\NomenclaturEntry{{{}}}{{{}}}{{{}}}{{{}}}",
            self.name, self.symbol, self.description, self.sort_key
        )
    }
}

/// A complete glossary directory with a handful of thermodynamics entries
pub fn realistic_glossary_dir() -> TempDir {
    GlossaryDirBuilder::new()
        .with_nomenclature(
            "% Nomenclature for chapter 2\n\
             \\NomenclaturEntry{T}{T}{Temperature}{T}\n\
             \\NomenclaturEntry{p}{p}{Pressure}{p}\n\
             \n\
             \\NomenclaturEntry{rhoL}{\\rho_{L}}{Density of the liquid phase}{rho}\n\
             \\NomenclaturEntry{cp}{c_{p}}{Specific heat capacity at {constant} pressure}{c}\n",
        )
        .with_derived_files()
        .build()
}

/// Read a file in `dir` to a string
pub fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).expect("Failed to read file")
}

/// Path of a history document inside a temp dir
pub fn history_path(dir: &TempDir) -> PathBuf {
    dir.path().join("directories.json")
}
