//! Check operation - configuration and schema validation.

use std::path::Path;

use cradle_codegen_typescript::Generator;
use cradle_schema::{Config, Schema};

use crate::reports::{CheckReport, EmitterSummary};

/// Execute the check operation.
///
/// Runs every configured emitter without writing anything and collects
/// the failures, plus schema-level warnings the emitters do not report.
pub fn check(
    config: &Config,
    schema: &Schema,
    config_path: &Path,
    schema_path: &Path,
) -> CheckReport {
    let mut errors = Vec::new();
    let mut emitters = Vec::new();

    for (name, emitter_config) in &config.emitters {
        let result = Generator::from_config(emitter_config)
            .and_then(|mut emitter| emitter.emit_schema(schema));
        match result {
            Ok(files) => emitters.push(EmitterSummary {
                name: name.to_string(),
                kind: emitter_config.kind,
                layout: emitter_config.output_type,
                file_count: files.len(),
            }),
            Err(e) => errors.push(format!("{}: {}", name, e)),
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        schema_path: schema_path.to_path_buf(),
        models: schema.model_names().map(str::to_string).collect(),
        emitters,
        errors,
        warnings: schema_warnings(schema),
    }
}

fn schema_warnings(schema: &Schema) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut seen: Vec<&str> = Vec::new();

    for model in &schema.models {
        if seen.contains(&model.name.as_str()) {
            warnings.push(format!("model '{}' is declared more than once", model.name));
        }
        seen.push(&model.name);

        if model.properties.is_empty() {
            warnings.push(format!("model '{}' has no properties", model.name));
        }

        for target in model.referenced_models() {
            if !schema.has_model(target) {
                warnings.push(format!(
                    "model '{}' references '{}', which is not in the schema",
                    model.name, target
                ));
            }
        }
    }
    warnings
}
