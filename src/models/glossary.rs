use std::path::{Path, PathBuf};

pub const NOMENCLATURE_FILENAME: &str = "nomenclature.tex";
pub const DEF_VARS_FILENAME: &str = "defvars.tex";
pub const MACROS_FILENAME: &str = "macros.tex";
pub const SUMMARY_FILENAME: &str = "nomenclature.log";

/// One glossary record, keyed externally by its name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub symbol: String,
    pub description: String,
    pub sort_key: String,
}

impl GlossaryEntry {
    pub fn new(
        symbol: impl Into<String>,
        description: impl Into<String>,
        sort_key: impl Into<String>,
    ) -> Self {
        Self { symbol: symbol.into(), description: description.into(), sort_key: sort_key.into() }
    }
}

/// File set backing one glossary directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryFiles {
    pub nomenclature: PathBuf,
    pub def_vars: PathBuf,
    pub macros: PathBuf,
    pub summary: PathBuf,
}

impl GlossaryFiles {
    pub fn in_dir(base_dir: &Path) -> Self {
        Self {
            nomenclature: base_dir.join(NOMENCLATURE_FILENAME),
            def_vars: base_dir.join(DEF_VARS_FILENAME),
            macros: base_dir.join(MACROS_FILENAME),
            summary: base_dir.join(SUMMARY_FILENAME),
        }
    }

    /// The three files that must exist for a load to proceed, with their file names
    pub fn required(&self) -> [(&'static str, &Path); 3] {
        [
            (NOMENCLATURE_FILENAME, self.nomenclature.as_path()),
            (DEF_VARS_FILENAME, self.def_vars.as_path()),
            (MACROS_FILENAME, self.macros.as_path()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_in_dir() {
        let files = GlossaryFiles::in_dir(Path::new("/work/thesis"));
        assert_eq!(files.nomenclature, PathBuf::from("/work/thesis/nomenclature.tex"));
        assert_eq!(files.def_vars, PathBuf::from("/work/thesis/defvars.tex"));
        assert_eq!(files.macros, PathBuf::from("/work/thesis/macros.tex"));
        assert_eq!(files.summary, PathBuf::from("/work/thesis/nomenclature.log"));
    }

    #[test]
    fn test_required_excludes_summary() {
        let files = GlossaryFiles::in_dir(Path::new("/g"));
        let names: Vec<_> = files.required().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["nomenclature.tex", "defvars.tex", "macros.tex"]);
    }
}
