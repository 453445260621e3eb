//! Named ES module imports.

use cradle_codegen::{CodeBuilder, CodeFragment, Renderable};

/// An `import { A, B } from 'module';` statement.
///
/// Module specifiers are single-quoted; names keep the order they were added in.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    fn statement(&self) -> String {
        if self.named.is_empty() {
            format!("import '{}';", self.from)
        } else {
            format!("import {{ {} }} from '{}';", self.named.join(", "), self.from)
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}
