//! Exported TypeScript interfaces.

use cradle_codegen::{CodeBuilder, CodeFragment, Renderable};

/// One `name: type;` member. Optional members render as `name?: type;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    /// Mark optional when `optional` is true.
    pub fn optional_if(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

/// An `export interface` declaration.
///
/// Interfaces can be created empty and filled later through
/// [`add_fields`](Self::add_fields), which is how peer files get a name to
/// import before their members are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[InterfaceField] {
        &self.fields
    }

    /// Append a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Append fields to an existing interface.
    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = InterfaceField>) {
        self.fields.extend(fields);
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("export interface {} {{}}", self.name))];
        }

        let members = self
            .fields
            .iter()
            .map(|field| {
                let mark = if field.optional { "?" } else { "" };
                CodeFragment::line(format!("{}{}: {};", field.name, mark, field.ty))
            })
            .collect();
        vec![CodeFragment::block(
            format!("export interface {} {{", self.name),
            members,
            Some("}".to_string()),
        )]
    }
}
