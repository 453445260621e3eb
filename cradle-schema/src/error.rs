use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for cradle-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the source content and filename so error factories don't need
/// both passed at every call site.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ParseToml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::ParseJson {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a configuration error pointing at `needle` when it occurs in the source.
    pub fn config_error(&self, message: impl Into<String>, needle: Option<&str>) -> Box<Error> {
        let span = needle
            .and_then(|n| self.src.find(n).map(|offset| (offset, n.len())))
            .map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

/// Byte offset of a 1-based line/column position.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(cradle::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML")]
    #[diagnostic(code(cradle::parse_error))]
    ParseToml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON")]
    #[diagnostic(code(cradle::parse_error))]
    ParseJson {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(cradle::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create an IO error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"a\": 1,\n  oops\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 3, 3), Some(14));
        assert_eq!(offset_of(src, 0, 1), None);
    }

    #[test]
    fn test_config_error_span() {
        let ctx = SourceContext::new("schema = \"x.json\"\n[emitters.orm]\n", "cradle.toml");
        let err = ctx.config_error("bad emitter", Some("[emitters.orm]"));
        match *err {
            Error::Config { span, .. } => {
                let span = span.expect("span");
                assert_eq!(span.offset(), 18);
                assert_eq!(span.len(), 14);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
