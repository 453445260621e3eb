//! Emitted documents.

use std::path::{Path, PathBuf};

use cradle_core::{FileRules, GeneratedFile};

/// Banner written above every generated document.
pub const GENERATED_HEADER: &str = "// This file is generated by cradle. Do not edit.";

/// One emitted document: where it goes, what it says, and which models it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Path relative to the project directory.
    pub path: PathBuf,
    /// Generated source text.
    pub contents: String,
    /// Models declared in this document, in schema order.
    pub models: Vec<String>,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>, models: Vec<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
            models,
        }
    }
}

impl GeneratedFile for OutputFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            header: Some(GENERATED_HEADER),
        }
    }

    fn render(&self) -> String {
        if self.contents.ends_with('\n') {
            self.contents.clone()
        } else {
            format!("{}\n", self.contents)
        }
    }
}

#[cfg(test)]
mod tests {
    use cradle_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_output_file() {
        let temp = TempDir::new().unwrap();
        let file = OutputFile::new(
            "src/models/User.ts",
            "export interface IUser {}",
            vec!["User".into()],
        );

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        let written = std::fs::read_to_string(temp.path().join("src/models/User.ts")).unwrap();
        assert_eq!(
            written,
            format!("{}\nexport interface IUser {{}}\n", GENERATED_HEADER)
        );

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Unchanged);
        assert!(!file.is_stale(temp.path()).unwrap());
    }
}
