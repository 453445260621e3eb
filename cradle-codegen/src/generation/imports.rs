//! Import collection utilities.

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order; symbols within a module keep insertion
/// order too, so a runtime import such as `{ Sequelize, Model, DataTypes }`
/// renders exactly as declared.
///
/// # Example
///
/// ```
/// use cradle_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("./Address", "IAddress");
/// imports.add("./Project", "IProject");
/// imports.add("./Address", "IAddress");
///
/// assert_eq!(imports.len(), 2);
/// for (module, symbols) in imports.iter() {
///     println!("import {{ {} }} from '{}';", symbols.join(", "), module);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> symbols in first-use order
    imports: IndexMap<String, Vec<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        let symbols = self.imports.entry(module.to_string()).or_default();
        if !symbols.iter().any(|s| s == symbol) {
            symbols.push(symbol.to_string());
        }
    }

    /// Add several symbols from one module.
    pub fn add_all<'a>(&mut self, module: &str, symbols: impl IntoIterator<Item = &'a str>) {
        for symbol in symbols {
            self.add(module, symbol);
        }
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}
