//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Builds indented code line by line.
///
/// Nodes implementing [`Renderable`] are emitted through [`CodeBuilder::emit`];
/// hand-written text goes through `push_line` and `push_lines`.
///
/// ```
/// use cradle_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("export class User {")
///     .push_indent()
///     .push_line("public readonly id!: number")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "export class User {\n  public readonly id!: number\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add several lines, each at the current indentation.
    ///
    /// Relative indentation inside `text` is preserved.
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.write(&mut self.buffer, self.indent_level);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::typescript();
        builder.push_line("const x = 1;");
        assert_eq!(builder.build(), "const x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line("function foo() {")
            .push_indent()
            .push_line("return 1;")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::typescript();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_push_lines_keeps_relative_indent() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_indent()
            .push_lines("User.init(\n  {},\n\n)");
        assert_eq!(builder.build(), "  User.init(\n    {},\n\n  )\n");
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder
            .push_line("{")
            .push_indent()
            .push_line("a: 1,")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "{\n\ta: 1,\n}\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::Block {
                        header: "interface IUser {".to_string(),
                        body: vec![CodeFragment::Line("id: number;".to_string())],
                        close: Some("}".to_string()),
                    },
                    CodeFragment::Blank,
                ]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&BlockNode);
        assert_eq!(builder.build(), "interface IUser {\n  id: number;\n}\n\n");
    }
}
