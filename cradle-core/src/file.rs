use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Content as it lands on disk, header included.
    fn render_with_header(&self) -> String {
        match self.rules().header {
            Some(header) => format!("{}\n{}", header, self.render()),
            None => self.render(),
        }
    }

    /// Write the file to disk, leaving it untouched when the content is identical.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render_with_header();

        if read_existing(&path)?.as_deref() == Some(content.as_str()) {
            tracing::debug!(path = %path.display(), "unchanged");
            return Ok(WriteResult::Unchanged);
        }

        write_file(&path, &content)?;
        Ok(WriteResult::Written)
    }

    /// Check whether the file on disk differs from what would be written.
    fn is_stale(&self, base: &Path) -> Result<bool> {
        let existing = read_existing(&self.path(base))?;
        Ok(existing.as_deref() != Some(self.render_with_header().as_str()))
    }
}

fn read_existing(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "generated");
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the generated content
    Unchanged,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    /// Line written above the content, e.g. a "generated, do not edit" banner.
    pub header: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct TestFile {
        name: &'static str,
        content: &'static str,
        header: Option<&'static str>,
    }

    impl GeneratedFile for TestFile {
        fn path(&self, base: &Path) -> PathBuf {
            base.join(self.name)
        }

        fn rules(&self) -> FileRules {
            FileRules {
                header: self.header,
            }
        }

        fn render(&self) -> String {
            self.content.to_string()
        }
    }

    fn file(name: &'static str, content: &'static str) -> TestFile {
        TestFile {
            name,
            content,
            header: None,
        }
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let result = file("a/b/models.ts", "nested").write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("a/b/models.ts")).unwrap(),
            "nested"
        );
    }

    #[test]
    fn test_write_overwrites_changed_content() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("User.ts"), "original").unwrap();

        let result = file("User.ts", "updated").write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("User.ts")).unwrap(),
            "updated"
        );
    }

    #[test]
    fn test_write_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("User.ts"), "same").unwrap();

        let result = file("User.ts", "same").write(temp.path()).unwrap();
        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_write_with_header() {
        let temp = TempDir::new().unwrap();
        let f = TestFile {
            name: "models.ts",
            content: "export interface IUser {}\n",
            header: Some("// Generated by cradle. Do not edit."),
        };
        f.write(temp.path()).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("models.ts")).unwrap(),
            "// Generated by cradle. Do not edit.\nexport interface IUser {}\n"
        );
        assert!(!f.is_stale(temp.path()).unwrap());
    }

    #[test]
    fn test_is_stale() {
        let temp = TempDir::new().unwrap();
        let f = file("User.ts", "export class User {}\n");

        assert!(f.is_stale(temp.path()).unwrap());

        fs::write(temp.path().join("User.ts"), "export class User {}\n").unwrap();
        assert!(!f.is_stale(temp.path()).unwrap());

        fs::write(temp.path().join("User.ts"), "// edited by hand\n").unwrap();
        assert!(f.is_stale(temp.path()).unwrap());
    }
}
