use std::path::{Path, PathBuf};

use cradle_schema::{EmitterConfig, OutputLayout};

/// Output options shared by every emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterOptions {
    /// Output file (single-file layout) or directory (one file per model).
    pub output: PathBuf,
    pub layout: OutputLayout,
    /// Extension of per-model documents, without the dot.
    pub extension: &'static str,
    /// Whether GraphQL resolvers are generated alongside ORM models.
    pub graphql_resolvers: bool,
    /// Location of shared type definitions.
    pub types_path: Option<PathBuf>,
}

impl EmitterOptions {
    pub fn new(output: impl Into<PathBuf>, layout: OutputLayout) -> Self {
        Self {
            output: output.into(),
            layout,
            extension: "ts",
            graphql_resolvers: false,
            types_path: None,
        }
    }

    /// Build options from a `[emitters.<name>]` table.
    pub fn from_config(config: &EmitterConfig) -> Self {
        Self {
            output: config.output.clone(),
            layout: config.output_type,
            extension: "ts",
            graphql_resolvers: config.graphql_resolvers,
            types_path: config.types_path.clone(),
        }
    }

    /// Set the extension of per-model documents.
    pub fn with_extension(mut self, extension: &'static str) -> Self {
        self.extension = extension;
        self
    }

    pub fn is_one_file_per_model(&self) -> bool {
        self.layout == OutputLayout::OneFilePerModel
    }

    /// File name (no directory) of the document generated for a model.
    pub fn file_name_for_model(&self, model: &str) -> String {
        format!("{}.{}", model, self.extension)
    }

    /// Path of the document generated for a model in one-file-per-model mode.
    pub fn file_path_for_model(&self, model: &str) -> PathBuf {
        self.output.join(self.file_name_for_model(model))
    }

    /// File name of the merged document in single-file mode.
    pub fn merged_file_name(&self) -> String {
        file_name(&self.output)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cradle_schema::EmitterKind;

    #[test]
    fn test_file_path_for_model() {
        let options = EmitterOptions::new("src/models", OutputLayout::OneFilePerModel);
        assert!(options.is_one_file_per_model());
        assert_eq!(
            options.file_path_for_model("User"),
            PathBuf::from("src/models/User.ts")
        );
        assert_eq!(options.file_name_for_model("User"), "User.ts");
    }

    #[test]
    fn test_merged_file_name() {
        let options = EmitterOptions::new("src/db/models.ts", OutputLayout::SingleFile);
        assert_eq!(options.merged_file_name(), "models.ts");
    }

    #[test]
    fn test_from_config() {
        let config = EmitterConfig {
            kind: EmitterKind::TypeScriptSequelize,
            output: "db.ts".into(),
            output_type: OutputLayout::SingleFile,
            graphql_resolvers: true,
            types_path: Some("src/types".into()),
        };
        let options = EmitterOptions::from_config(&config).with_extension("mts");
        assert!(options.graphql_resolvers);
        assert_eq!(options.types_path, Some(PathBuf::from("src/types")));
        assert_eq!(options.file_name_for_model("User"), "User.mts");
    }
}
