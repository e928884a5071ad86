//! Error types for the glossary stores.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by [`crate::store::GlossaryStore`] load and save operations
#[derive(Debug, Error)]
pub enum GlossaryError {
    /// One or more of the three required record files is absent
    #[error("Missing required files in {}: {}", base_dir.display(), missing.join(", "))]
    MissingFiles { base_dir: PathBuf, missing: Vec<String> },

    /// Reading or writing a glossary file failed at the OS level
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File too large: {} ({size} bytes, max {max} bytes)", path.display())]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },
}

impl GlossaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Why a single record line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordParseError {
    #[error("line does not start with \\NomenclaturEntry")]
    MissingKeyword,

    #[error("missing opening brace")]
    MissingOpeningBrace,

    #[error("expected 4 arguments, got {found}")]
    IncompleteArguments { found: usize },
}

pub type Result<T> = std::result::Result<T, GlossaryError>;
