//! TypeScript class builder.

use cradle_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::fns::{Param, param_list};

/// Token written after a class field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMark {
    #[default]
    None,
    /// `name!: T`, assigned outside the constructor
    Definite,
    /// `name?: T`
    Optional,
}

impl FieldMark {
    fn as_str(&self) -> &'static str {
        match self {
            FieldMark::None => "",
            FieldMark::Definite => "!",
            FieldMark::Optional => "?",
        }
    }
}

/// A field declared on a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassField {
    pub name: String,
    pub ty: String,
    pub mark: FieldMark,
    pub readonly: bool,
    pub scope: Option<&'static str>,
}

impl ClassField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            mark: FieldMark::None,
            readonly: false,
            scope: None,
        }
    }

    pub fn public(mut self) -> Self {
        self.scope = Some("public");
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn mark(mut self, mark: FieldMark) -> Self {
        self.mark = mark;
        self
    }

    fn to_line(&self) -> String {
        let scope = self.scope.map(|s| format!("{} ", s)).unwrap_or_default();
        let readonly = if self.readonly { "readonly " } else { "" };
        format!(
            "{}{}{}{}: {};",
            scope,
            readonly,
            self.name,
            self.mark.as_str(),
            self.ty
        )
    }
}

/// A class method. The body is opaque statement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    scope: Option<&'static str>,
    is_static: bool,
    params: Vec<Param>,
    body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: None,
            is_static: false,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn public(mut self) -> Self {
        self.scope = Some("public");
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Append a statement. Multiline statements keep their relative indentation.
    pub fn statement(mut self, text: impl Into<String>) -> Self {
        self.body.push(text.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn header(&self) -> String {
        let scope = self.scope.map(|s| format!("{} ", s)).unwrap_or_default();
        let static_kw = if self.is_static { "static " } else { "" };
        format!(
            "{}{}{}({}) {{",
            scope,
            static_kw,
            self.name,
            param_list(&self.params)
        )
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .body
            .iter()
            .flat_map(|statement| statement.lines())
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::line(line)
                }
            })
            .collect();
        vec![CodeFragment::block(self.header(), body, Some("}".to_string()))]
    }
}

/// Builder for TypeScript classes.
///
/// Classes can be declared as empty shells and filled later through
/// [`add_fields`](Self::add_fields) and [`add_method`](Self::add_method).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    name: String,
    extends: Option<String>,
    fields: Vec<ClassField>,
    methods: Vec<Method>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends = Some(base.into());
        self
    }

    pub fn field(mut self, field: ClassField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Append fields to an existing class.
    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = ClassField>) {
        self.fields.extend(fields);
    }

    /// Append a method to an existing class.
    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[ClassField] {
        &self.fields
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn header(&self) -> String {
        let extends = self
            .extends
            .as_ref()
            .map(|base| format!(" extends {}", base))
            .unwrap_or_default();
        format!("export class {}{}", self.name, extends)
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() && self.methods.is_empty() {
            return vec![CodeFragment::Line(format!("{} {{}}", self.header()))];
        }

        let mut body: Vec<CodeFragment> = self
            .fields
            .iter()
            .map(|field| CodeFragment::Line(field.to_line()))
            .collect();
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 || !self.fields.is_empty() {
                body.push(CodeFragment::Blank);
            }
            body.extend(method.to_fragments());
        }

        vec![CodeFragment::block(
            format!("{} {{", self.header()),
            body,
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_class_shell() {
        let c = Class::new("User").extends("Model").build();
        assert_eq!(c, "export class User extends Model {}\n");
    }

    #[test]
    fn test_class_fields() {
        let c = Class::new("User")
            .field(
                ClassField::new("id", "number")
                    .public()
                    .readonly()
                    .mark(FieldMark::Definite),
            )
            .field(
                ClassField::new("address", "Address")
                    .public()
                    .readonly()
                    .mark(FieldMark::Optional),
            )
            .build();
        assert_eq!(
            c,
            "export class User {\n  public readonly id!: number;\n  public readonly address?: Address;\n}\n"
        );
    }

    #[test]
    fn test_static_method_with_multiline_statement() {
        let c = Class::new("User")
            .extends("Model")
            .field(ClassField::new("id", "number"))
            .method(
                Method::new("Initialize")
                    .public()
                    .static_()
                    .param(Param::new("sequelize", "Sequelize"))
                    .statement("User.init(\n  {},\n);"),
            )
            .build();
        assert_eq!(
            c,
            "export class User extends Model {\n  id: number;\n\n  public static Initialize(sequelize: Sequelize) {\n    User.init(\n      {},\n    );\n  }\n}\n"
        );
    }

    #[test]
    fn test_fill_shell() {
        let mut c = Class::new("Film").extends("Model");
        c.add_fields([ClassField::new("title", "string")]);
        c.add_method(Method::new("describe").statement("return this.title;"));

        assert_eq!(c.fields().len(), 1);
        assert_eq!(c.methods()[0].name(), "describe");
        assert!(c.build().contains("  describe() {\n    return this.title;\n  }\n"));
    }
}
