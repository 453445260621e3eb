//! In-memory TypeScript documents.
//!
//! A [`Project`] owns named [`SourceFile`]s; each file owns its imports and
//! an ordered set of named declarations. Declarations can be created as
//! empty shells and looked up again later, and a lookup of something that
//! was never created fails instead of being skipped.

use std::path::Path;

use cradle_codegen::{
    CodeBuilder, CodeFragment, DeclarationRegistry, EmitError, ImportCollector, Renderable, Result,
};
use indexmap::IndexMap;

use crate::ast::{Class, Import, Interface};

/// A top-level declaration in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Interface(Interface),
    Class(Class),
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Declaration::Interface(interface) => interface.to_fragments(),
            Declaration::Class(class) => class.to_fragments(),
        }
    }
}

/// A named TypeScript document.
#[derive(Debug, Clone)]
pub struct SourceFile {
    imports: ImportCollector,
    declarations: DeclarationRegistry<Declaration>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            imports: ImportCollector::new(),
            declarations: DeclarationRegistry::new(name),
        }
    }

    pub fn name(&self) -> &str {
        self.declarations.document()
    }

    /// Module specifier peers use to import this file (e.g., `./Address`).
    pub fn module_specifier(&self) -> String {
        let stem = Path::new(self.name())
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name().to_string());
        format!("./{}", stem)
    }

    /// Add named imports from a module, keeping their order.
    pub fn add_import<'a>(&mut self, module: &str, symbols: impl IntoIterator<Item = &'a str>) {
        self.imports.add_all(module, symbols);
    }

    pub fn imports(&self) -> &ImportCollector {
        &self.imports
    }

    /// Declare an interface and return it for filling.
    pub fn add_interface(&mut self, interface: Interface) -> &mut Interface {
        let name = interface.name().to_string();
        match self.declarations.declare(name, Declaration::Interface(interface)) {
            Declaration::Interface(interface) => interface,
            Declaration::Class(_) => unreachable!("an interface was just declared"),
        }
    }

    /// Declare a class and return it for filling.
    pub fn add_class(&mut self, class: Class) -> &mut Class {
        let name = class.name().to_string();
        match self.declarations.declare(name, Declaration::Class(class)) {
            Declaration::Class(class) => class,
            Declaration::Interface(_) => unreachable!("a class was just declared"),
        }
    }

    /// Look up a previously declared interface.
    pub fn interface_mut(&mut self, name: &str) -> Result<&mut Interface> {
        let document = self.name().to_string();
        match self.declarations.get_mut(name)? {
            Declaration::Interface(interface) => Ok(interface),
            Declaration::Class(_) => Err(EmitError::MissingDeclaration {
                name: name.to_string(),
                document,
            }),
        }
    }

    /// Look up a previously declared class.
    pub fn class_mut(&mut self, name: &str) -> Result<&mut Class> {
        let document = self.name().to_string();
        match self.declarations.get_mut(name)? {
            Declaration::Class(class) => Ok(class),
            Declaration::Interface(_) => Err(EmitError::MissingDeclaration {
                name: name.to_string(),
                document,
            }),
        }
    }

    /// Whether this file declares the given name.
    pub fn declares(&self, name: &str) -> bool {
        self.declarations.contains(name)
    }

    /// Render one declaration on its own, without the file's imports.
    pub fn render_declaration(&self, name: &str) -> Result<String> {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self.declarations.get(name)?);
        Ok(builder.build())
    }

    /// Render the whole document: imports, then declarations separated by blank lines.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for (module, symbols) in self.imports.iter() {
            builder.emit(&Import::new(module).named_all(symbols.iter().cloned()));
        }
        if !self.imports.is_empty() && !self.declarations.is_empty() {
            builder.push_blank();
        }

        for (i, (_, declaration)) in self.declarations.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            builder.emit(declaration);
        }

        builder.build()
    }
}

/// A set of named source files owned by one emission pass.
#[derive(Debug, Clone, Default)]
pub struct Project {
    files: IndexMap<String, SourceFile>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source file, replacing any file of the same name.
    pub fn create_source_file(&mut self, name: &str) -> &mut SourceFile {
        let (index, _) = self
            .files
            .insert_full(name.to_string(), SourceFile::new(name));
        &mut self.files[index]
    }

    /// Look up a source file.
    pub fn source_file(&self, name: &str) -> Result<&SourceFile> {
        self.files.get(name).ok_or_else(|| EmitError::MissingDocument {
            name: name.to_string(),
        })
    }

    /// Look up a source file for modification.
    pub fn source_file_mut(&mut self, name: &str) -> Result<&mut SourceFile> {
        self.files
            .get_mut(name)
            .ok_or_else(|| EmitError::MissingDocument {
                name: name.to_string(),
            })
    }

    /// Name of the file declaring `symbol`, if any.
    pub fn find_declaring_file(&self, symbol: &str) -> Option<&str> {
        self.files
            .values()
            .find(|file| file.declares(symbol))
            .map(SourceFile::name)
    }

    /// Import every symbol `file` uses but does not declare from the peer file declaring it.
    ///
    /// `references` pairs each referenced model with the symbol it resolves to.
    /// A symbol no file declares is an [`EmitError::UnresolvedReference`].
    pub fn fix_missing_imports<'a>(
        &mut self,
        file: &str,
        model: &str,
        references: impl IntoIterator<Item = (&'a str, String)>,
    ) -> Result<()> {
        let mut resolved = Vec::new();
        {
            let target_file = self.source_file(file)?;
            for (target, symbol) in references {
                if target_file.declares(&symbol) {
                    continue;
                }
                let peer = self
                    .find_declaring_file(&symbol)
                    .and_then(|name| self.files.get(name))
                    .ok_or_else(|| EmitError::UnresolvedReference {
                        model: model.to_string(),
                        target: target.to_string(),
                    })?;
                resolved.push((peer.module_specifier(), symbol));
            }
        }

        let target_file = self.source_file_mut(file)?;
        for (module, symbol) in resolved {
            tracing::debug!(file, module = %module, symbol = %symbol, "resolved import");
            target_file.add_import(&module, [symbol.as_str()]);
        }
        Ok(())
    }

    /// Import each of `symbols` that a peer file declares.
    ///
    /// Unlike [`Project::fix_missing_imports`], a symbol nobody declares is
    /// left alone, since it may be a builtin such as `string` or `Date`.
    pub fn import_declared_symbols<'a>(
        &mut self,
        file: &str,
        symbols: impl IntoIterator<Item = &'a str>,
    ) -> Result<()> {
        let mut resolved = Vec::new();
        {
            let target_file = self.source_file(file)?;
            for symbol in symbols {
                if target_file.declares(symbol) {
                    continue;
                }
                match self
                    .find_declaring_file(symbol)
                    .and_then(|name| self.files.get(name))
                {
                    Some(peer) => resolved.push((peer.module_specifier(), symbol)),
                    None => tracing::trace!(file, symbol, "no peer declares symbol"),
                }
            }
        }

        let target_file = self.source_file_mut(file)?;
        for (module, symbol) in resolved {
            tracing::debug!(file, module = %module, symbol, "resolved import");
            target_file.add_import(&module, [symbol]);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
