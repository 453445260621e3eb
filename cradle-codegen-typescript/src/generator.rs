//! Emitter assembly by kind.

use cradle_codegen::{ConcatMerge, Emitter, EmitterOptions, Result};
use cradle_schema::{EmitterConfig, EmitterKind};

use crate::{
    TypeScriptTypeMapper,
    emitters::{InterfaceBuilder, SequelizeBuilder, SequelizeMerge},
};

/// Builds TypeScript emitters from configuration.
///
/// # Example
///
/// ```
/// use cradle_codegen::EmitterOptions;
/// use cradle_codegen_typescript::Generator;
/// use cradle_schema::{EmitterKind, Model, OutputLayout, PropertyType, Schema};
///
/// let schema = Schema::new([Model::new("User").property("id", PropertyType::integer())]);
/// let options = EmitterOptions::new("src/models.ts", OutputLayout::SingleFile);
///
/// let mut emitter = Generator::emitter(EmitterKind::TypeScript, options).unwrap();
/// let files = emitter.emit_schema(&schema).unwrap();
/// assert_eq!(files[0].contents, "export interface IUser {\n  id: number;\n}\n");
/// ```
pub struct Generator;

impl Generator {
    /// Assemble the emitter for `kind`.
    ///
    /// Fails when the emitter cannot produce the requested layout.
    pub fn emitter(kind: EmitterKind, options: EmitterOptions) -> Result<Emitter> {
        let options = options.with_extension("ts");
        match kind {
            EmitterKind::TypeScript => Emitter::new(
                options,
                TypeScriptTypeMapper::new(),
                InterfaceBuilder::new(),
                ConcatMerge::new(),
            ),
            EmitterKind::TypeScriptSequelize => Emitter::new(
                options,
                TypeScriptTypeMapper::new(),
                SequelizeBuilder::new(),
                SequelizeMerge,
            ),
        }
    }

    /// Assemble the emitter described by an `[emitters.<name>]` table.
    pub fn from_config(config: &EmitterConfig) -> Result<Emitter> {
        Self::emitter(config.kind, EmitterOptions::from_config(config))
    }
}

#[cfg(test)]
mod tests {
    use cradle_codegen::EmitError;
    use cradle_schema::OutputLayout;

    use super::*;

    #[test]
    fn test_sequelize_rejects_one_file_per_model() {
        let err = Generator::emitter(
            EmitterKind::TypeScriptSequelize,
            EmitterOptions::new("src/models", OutputLayout::OneFilePerModel),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EmitError::UnsupportedLayout {
                emitter: "typescript-sequelize",
                ..
            }
        ));
    }

    #[test]
    fn test_typescript_accepts_both_layouts() {
        for layout in [OutputLayout::SingleFile, OutputLayout::OneFilePerModel] {
            let emitter =
                Generator::emitter(EmitterKind::TypeScript, EmitterOptions::new("out", layout))
                    .unwrap();
            assert_eq!(emitter.name(), "typescript");
        }
    }

    #[test]
    fn test_from_config() {
        let config = EmitterConfig {
            kind: EmitterKind::TypeScriptSequelize,
            output: "db/models.ts".into(),
            output_type: OutputLayout::SingleFile,
            graphql_resolvers: true,
            types_path: None,
        };
        let emitter = Generator::from_config(&config).unwrap();
        assert_eq!(emitter.name(), "typescript-sequelize");
        assert!(emitter.options().graphql_resolvers);
    }
}
