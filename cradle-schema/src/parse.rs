//! Schema parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Error, Result, Schema, error::SourceContext};

/// On-disk encoding of a schema file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Toml,
}

impl SchemaFormat {
    /// Pick the format from a file extension: `.json` is JSON, anything else TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SchemaFormat::Json,
            _ => SchemaFormat::Toml,
        }
    }
}

impl FromStr for Schema {
    type Err = Box<Error>;

    /// Parse a TOML schema.
    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "schema.toml", SchemaFormat::Toml)
    }
}

impl Schema {
    /// Parse a schema file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_schema(
            &content,
            &path.display().to_string(),
            SchemaFormat::from_path(path),
        )
    }

    /// Parse a JSON schema from a string.
    pub fn from_json(content: &str) -> Result<Self> {
        parse_schema(content, "schema.json", SchemaFormat::Json)
    }
}

fn parse_schema(content: &str, filename: &str, format: SchemaFormat) -> Result<Schema> {
    let source_ctx = SourceContext::new(content, filename);
    match format {
        SchemaFormat::Json => serde_json::from_str(content).map_err(|e| source_ctx.json_error(e)),
        SchemaFormat::Toml => toml::from_str(content).map_err(|e| source_ctx.toml_error(e)),
    }
}
