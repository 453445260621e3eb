//! Merge policies for combining per-model fragments.

/// The rendered contents produced for one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelContents {
    pub model: String,
    pub contents: String,
}

impl ModelContents {
    pub fn new(model: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            contents: contents.into(),
        }
    }
}

/// Policy reducing per-model fragments, in schema order, into one document.
pub trait MergePolicy {
    fn merge(&self, contents: &[ModelContents]) -> String;
}

/// Concatenates fragments separated by a blank line, optionally behind a fixed prefix.
#[derive(Debug, Clone, Default)]
pub struct ConcatMerge {
    prefix: Option<String>,
}

impl ConcatMerge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a fixed block (e.g., a runtime import) above the fragments.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Join fragment bodies with a blank line between them.
    pub fn join(contents: &[ModelContents]) -> String {
        contents
            .iter()
            .map(|c| c.contents.trim_end())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl MergePolicy for ConcatMerge {
    fn merge(&self, contents: &[ModelContents]) -> String {
        let body = Self::join(contents);
        match &self.prefix {
            Some(prefix) if body.is_empty() => format!("{}\n", prefix.trim_end()),
            Some(prefix) => format!("{}\n\n{}\n", prefix.trim_end(), body),
            None if body.is_empty() => String::new(),
            None => format!("{}\n", body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments() -> Vec<ModelContents> {
        vec![
            ModelContents::new("User", "export interface IUser {}\n"),
            ModelContents::new("Film", "export interface IFilm {}\n"),
        ]
    }

    #[test]
    fn test_concat_in_order() {
        assert_eq!(
            ConcatMerge::new().merge(&fragments()),
            "export interface IUser {}\n\nexport interface IFilm {}\n"
        );
    }

    #[test]
    fn test_concat_with_prefix() {
        let merged = ConcatMerge::with_prefix("import { Model } from 'orm';\n").merge(&fragments());
        assert!(merged.starts_with("import { Model } from 'orm';\n\nexport interface IUser {}"));
    }

    #[test]
    fn test_concat_empty() {
        assert_eq!(ConcatMerge::new().merge(&[]), "");
    }
}
