//! Exported `const` declarations.

use cradle_codegen::{CodeBuilder, CodeFragment, Renderable};

/// `export const name = value;`, where the value may span several lines.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let head = format!("export const {} = ", self.name);

        // The value keeps its own layout; the statement ends on its last line.
        let mut lines: Vec<String> = self.value.lines().map(str::to_string).collect();
        match lines.first_mut() {
            Some(first) => first.insert_str(0, &head),
            None => lines.push(head.trim_end().to_string()),
        }
        if let Some(last) = lines.last_mut() {
            last.push(';');
        }
        lines.into_iter().map(CodeFragment::Line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ArrowFn, Param};

    #[test]
    fn test_simple_const() {
        assert_eq!(Const::new("foo", "42").build(), "export const foo = 42;\n");
    }

    #[test]
    fn test_multiline_const() {
        let value = ArrowFn::new()
            .param(Param::new("sequelize", "Sequelize"))
            .body_line("User.Initialize(sequelize);")
            .build();
        let c = Const::new("initialize", value).build();
        assert_eq!(
            c,
            "export const initialize = (sequelize: Sequelize) => {\n  User.Initialize(sequelize);\n};\n"
        );
    }
}
