//! Indentation of generated code.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A run of spaces of the given width.
    Spaces(usize),
    Tab,
}

impl Indent {
    /// Two spaces, the TypeScript convention.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Append `level` units of indentation to `buffer`.
    pub fn write(&self, buffer: &mut String, level: usize) {
        match *self {
            Self::Spaces(width) => buffer.extend(std::iter::repeat_n(' ', width * level)),
            Self::Tab => buffer.extend(std::iter::repeat_n('\t', level)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}
