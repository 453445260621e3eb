//! Fragments: the layout-only form AST nodes render to.
//!
//! Nodes say which lines nest under which header; the
//! [`CodeBuilder`](super::CodeBuilder) decides the actual indentation.

/// A piece of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line, without its newline.
    Line(String),
    Blank,
    /// A header line, an indented body and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: Option<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }
}

/// AST nodes that can lay themselves out as fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
