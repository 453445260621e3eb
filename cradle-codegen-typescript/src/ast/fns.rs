//! TypeScript function pieces: parameters and arrow functions.

use cradle_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a TypeScript function or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

/// Join parameters into a signature list.
pub(crate) fn param_list(params: &[Param]) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// An arrow function with a block body.
#[derive(Debug, Clone, Default)]
pub struct ArrowFn {
    params: Vec<Param>,
    body: Vec<String>,
}

impl ArrowFn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn body_lines(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.body.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Build the arrow function as an expression string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build().trim_end().to_string()
    }
}

impl Renderable for ArrowFn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = format!("({}) => {{", param_list(&self.params));
        if self.body.is_empty() {
            return vec![CodeFragment::Line(format!("{}}}", header))];
        }
        vec![CodeFragment::Block {
            header,
            body: self.body.iter().map(|l| CodeFragment::line(l.as_str())).collect(),
            close: Some("}".to_string()),
        }]
    }
}
