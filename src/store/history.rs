//! Recently used directories, most recent first.
//!
//! Persistence is best effort: a document that cannot be read or parsed starts an empty
//! history, and failed writes are logged and dropped. The in-memory list stays authoritative
//! for the session either way.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::HistoryDocument;
use crate::utils::{get_history_path, normalize_path};

pub const DEFAULT_MAX_ENTRIES: usize = 10;

#[derive(Debug, Clone)]
pub struct DirectoryHistory {
    path: PathBuf,
    max_entries: usize,
    recent_dirs: Vec<String>,
}

impl DirectoryHistory {
    /// Open the history stored at `path`, keeping at most `max_entries` directories
    pub fn open(path: impl Into<PathBuf>, max_entries: usize) -> Self {
        let path = path.into();
        let max_entries = max_entries.max(1);
        let mut recent_dirs: Vec<String> = Vec::new();
        for dir in read_document(&path).recent_dirs {
            if dir.is_empty() {
                continue;
            }
            // hand-edited documents may hold relative paths or repeats; first occurrence wins
            let normalized = normalize_path(Path::new(&dir)).to_string_lossy().into_owned();
            if !recent_dirs.contains(&normalized) {
                recent_dirs.push(normalized);
            }
        }
        recent_dirs.truncate(max_entries);
        Self { path, max_entries, recent_dirs }
    }

    /// Open the history in the platform config directory
    pub fn open_default(max_entries: usize) -> Result<Self> {
        Ok(Self::open(get_history_path()?, max_entries))
    }

    /// Move `directory` to the front of the history, normalizing it first
    pub fn add(&mut self, directory: impl AsRef<Path>) {
        let directory = directory.as_ref();
        if directory.as_os_str().is_empty() {
            return;
        }

        let normalized = normalize_path(directory).to_string_lossy().into_owned();
        self.recent_dirs.retain(|d| *d != normalized);
        self.recent_dirs.insert(0, normalized);
        self.recent_dirs.truncate(self.max_entries);

        self.persist_best_effort();
    }

    /// Copy of the current history, most recent first
    pub fn list(&self) -> Vec<String> {
        self.recent_dirs.clone()
    }

    pub fn most_recent(&self) -> Option<&str> {
        self.recent_dirs.first().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.recent_dirs.clear();
        self.persist_best_effort();
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist_best_effort(&self) {
        if let Err(e) = self.persist() {
            log::warn!("Could not save directory history to {}: {:#}", self.path.display(), e);
        }
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let document = HistoryDocument { recent_dirs: self.recent_dirs.clone() };
        let json =
            serde_json::to_string_pretty(&document).context("Failed to serialize history")?;
        fs::write(&self.path, json).context("Failed to write history file")?;
        Ok(())
    }
}

fn read_document(path: &Path) -> HistoryDocument {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            if path.exists() {
                log::debug!("Could not read directory history {}: {}", path.display(), e);
            }
            return HistoryDocument::default();
        }
    };

    serde_json::from_str(&content).unwrap_or_else(|e| {
        log::debug!("Ignoring malformed directory history {}: {}", path.display(), e);
        HistoryDocument::default()
    })
}
