//! Project configuration (`cradle.toml`).

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result, Schema, error::SourceContext};

/// Output layout of an emitter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputLayout {
    /// All models merged into one document.
    #[default]
    SingleFile,
    /// One document per model.
    OneFilePerModel,
}

impl OutputLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLayout::SingleFile => "singleFile",
            OutputLayout::OneFilePerModel => "oneFilePerModel",
        }
    }
}

impl fmt::Display for OutputLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported emitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EmitterKind {
    /// TypeScript interfaces
    #[serde(rename = "typescript")]
    TypeScript,
    /// Sequelize model classes
    #[serde(rename = "typescript-sequelize")]
    TypeScriptSequelize,
}

impl EmitterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmitterKind::TypeScript => "typescript",
            EmitterKind::TypeScriptSequelize => "typescript-sequelize",
        }
    }
}

impl fmt::Display for EmitterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmitterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Ok(EmitterKind::TypeScript),
            "typescript-sequelize" | "sequelize" => Ok(EmitterKind::TypeScriptSequelize),
            _ => Err(format!(
                "unknown emitter '{}', expected 'typescript' or 'typescript-sequelize'",
                s
            )),
        }
    }
}

/// Configuration of one emitter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmitterConfig {
    pub kind: EmitterKind,
    /// Output file (single-file layout) or directory (one file per model).
    pub output: PathBuf,
    #[serde(default)]
    pub output_type: OutputLayout,
    /// Whether GraphQL resolvers are generated alongside ORM models.
    #[serde(default)]
    pub graphql_resolvers: bool,
    /// Location of shared type definitions.
    #[serde(default)]
    pub types_path: Option<PathBuf>,
}

/// Root of `cradle.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Schema file, relative to the configuration file.
    pub schema: PathBuf,
    /// Emitters in declaration order.
    #[serde(default)]
    pub emitters: IndexMap<String, EmitterConfig>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "cradle.toml")
    }
}

fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?;

    if config.emitters.is_empty() {
        return Err(source_ctx.config_error("no emitters configured", None));
    }
    for (name, emitter) in &config.emitters {
        if emitter.output.as_os_str().is_empty() {
            let header = format!("[emitters.{}]", name);
            return Err(source_ctx.config_error(
                format!("emitter '{}' has an empty output path", name),
                Some(&header),
            ));
        }
    }
    Ok(config)
}

/// A `cradle.toml` file with its location, so relative paths can be resolved.
#[derive(Debug, Clone)]
pub struct CradleToml {
    path: PathBuf,
    config: Config,
}

impl CradleToml {
    /// Open and parse a cradle.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let config = parse_config(&content, &path.display().to_string())?;
        Ok(Self { path, config })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory holding cradle.toml; generated paths are relative to it.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }

    /// Resolve a path relative to the directory holding cradle.toml.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        if relative.is_relative() {
            self.base_dir().join(relative)
        } else {
            relative.to_path_buf()
        }
    }

    /// Absolute-or-relative path of the schema file.
    pub fn schema_path(&self) -> PathBuf {
        self.resolve(&self.config.schema)
    }

    /// Load the schema this configuration points at.
    pub fn load_schema(&self) -> Result<Schema> {
        Schema::from_file(self.schema_path())
    }
}
