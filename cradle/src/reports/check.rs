//! Check command report data structures.

use std::path::PathBuf;

use cradle_schema::{EmitterKind, OutputLayout};

use super::output::{Output, Report};

/// Report data from configuration and schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Path to the schema file.
    pub schema_path: PathBuf,
    /// Model names in schema order.
    pub models: Vec<String>,
    /// Emitters that ran cleanly.
    pub emitters: Vec<EmitterSummary>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

/// An emitter that produced output during the check.
#[derive(Debug)]
pub struct EmitterSummary {
    pub name: String,
    pub kind: EmitterKind,
    pub layout: OutputLayout,
    /// Number of documents the emitter would write.
    pub file_count: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.section(&format!(
            "{} ({} model{})",
            self.schema_path.display(),
            self.models.len(),
            if self.models.len() == 1 { "" } else { "s" }
        ));
        for model in &self.models {
            out.list_item(model);
        }

        out.newline();
        out.section("Emitters");
        for emitter in &self.emitters {
            out.list_item(&format!(
                "{} ({}, {}): {} file{}",
                emitter.name,
                emitter.kind,
                emitter.layout,
                emitter.file_count,
                if emitter.file_count == 1 { "" } else { "s" }
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn report(errors: Vec<String>) -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("cradle.toml"),
            schema_path: PathBuf::from("schema.json"),
            models: vec!["User".to_string()],
            emitters: vec![EmitterSummary {
                name: "orm".to_string(),
                kind: EmitterKind::TypeScriptSequelize,
                layout: OutputLayout::SingleFile,
                file_count: 1,
            }],
            errors,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_render_valid() {
        let mut out = BufferOutput::default();
        report(Vec::new()).render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "✓ cradle.toml is valid",
                "",
                "schema.json (1 model):",
                "  - User",
                "",
                "Emitters:",
                "  - orm (typescript-sequelize, singleFile): 1 file",
            ]
        );
    }

    #[test]
    fn test_render_errors_only() {
        let mut out = BufferOutput::default();
        let report = report(vec!["interfaces: model 'User' references 'Team'".to_string()]);
        assert!(!report.is_valid());

        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec!["error: interfaces: model 'User' references 'Team'", ""]
        );
    }
}
