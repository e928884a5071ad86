use std::borrow::Cow;
use std::fs::File;
use std::path::{Component, Path, PathBuf};

use crate::error::{GlossaryError, Result};

// Maximum size for the primary record file: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Resolves a path to an absolute, normalized form
///
/// Existing paths are canonicalized so symlinks resolve. Paths that do not exist (yet) are
/// made absolute against the current directory and have `.` and `..` collapsed lexically.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use glossary_store::normalize_path;
///
/// let normalized = normalize_path(Path::new("/no/such/glossary/../thesis/./notation"));
/// assert_eq!(normalized, PathBuf::from("/no/such/thesis/notation"));
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    lexical_normalize(&absolute)
}

fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // never pops past the root
                if !matches!(
                    normalized.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle so the size is checked on the same file that is read.
///
/// # Errors
///
/// Returns an error if the file metadata cannot be read or the file is larger than 10MB.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file.metadata().map_err(|e| GlossaryError::io(path, e))?;

    let size = metadata.len();
    if size > MAX_FILE_SIZE_BYTES {
        return Err(GlossaryError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_FILE_SIZE_BYTES,
        });
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_with_home(path, dirs::home_dir().as_deref())
}

pub(crate) fn format_with_home(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(relative) = path.strip_prefix(home)
    {
        if relative.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", relative.display());
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
