//! Two-stage declaration registry.
//!
//! Stage one declares an addressable, empty handle per name; stage two looks
//! the handles up again to fill them. Looking up a name that was never
//! declared is a [`EmitError::MissingDeclaration`] fault, never a silent skip.

use indexmap::IndexMap;

use crate::{EmitError, Result};

/// Named declarations owned by one document, in declaration order.
#[derive(Debug, Clone)]
pub struct DeclarationRegistry<T> {
    document: String,
    entries: IndexMap<String, T>,
}

impl<T> DeclarationRegistry<T> {
    /// Create an empty registry for the named document.
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            entries: IndexMap::new(),
        }
    }

    /// Name of the owning document.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Declare a handle. Re-declaring a name replaces the handle in place.
    pub fn declare(&mut self, name: impl Into<String>, value: T) -> &mut T {
        let (index, _) = self.entries.insert_full(name.into(), value);
        &mut self.entries[index]
    }

    /// Look up a declared handle.
    pub fn get(&self, name: &str) -> Result<&T> {
        self.entries.get(name).ok_or_else(|| self.missing(name))
    }

    /// Look up a declared handle for filling.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut T> {
        match self.entries.get_index_of(name) {
            Some(index) => Ok(&mut self.entries[index]),
            None => Err(self.missing(name)),
        }
    }

    /// Check whether a name was declared.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over declarations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn missing(&self, name: &str) -> EmitError {
        EmitError::MissingDeclaration {
            name: name.to_string(),
            document: self.document.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_then_fill() {
        let mut registry: DeclarationRegistry<Vec<&str>> = DeclarationRegistry::new("models.ts");
        registry.declare("User", Vec::new());
        registry.declare("Film", Vec::new());

        registry.get_mut("Film").unwrap().push("title");
        registry.get_mut("User").unwrap().push("id");

        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["User", "Film"]);
        assert_eq!(registry.get("Film").unwrap(), &vec!["title"]);
    }

    #[test]
    fn test_redeclare_keeps_position() {
        let mut registry = DeclarationRegistry::new("models.ts");
        registry.declare("User", 1);
        registry.declare("Film", 2);
        *registry.declare("User", 3) += 1;

        let entries: Vec<(&str, i32)> = registry.iter().map(|(n, v)| (n, *v)).collect();
        assert_eq!(entries, vec![("User", 4), ("Film", 2)]);
    }

    #[test]
    fn test_missing_declaration_fails_loudly() {
        let mut registry: DeclarationRegistry<()> = DeclarationRegistry::new("User.ts");
        let err = registry.get_mut("IUser").unwrap_err();
        match err {
            EmitError::MissingDeclaration { name, document } => {
                assert_eq!(name, "IUser");
                assert_eq!(document, "User.ts");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
