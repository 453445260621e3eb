//! Generate operation - code generation from the schema.

use std::path::Path;

use cradle_codegen::OutputFile;
use cradle_codegen_typescript::Generator;
use cradle_core::{GeneratedFile, WriteResult};
use cradle_schema::{Config, Schema};
use eyre::{Context, Result};

use super::select_emitters;
use crate::reports::{EmitterReport, FileReport, FileStatus, GenerateMode, GenerateReport};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Path of cradle.toml, for reporting.
    pub config_path: &'a Path,
    /// Directory output paths are relative to.
    pub base_dir: &'a Path,
    /// Run only the emitter with this name.
    pub emitter: Option<&'a str>,
    pub mode: GenerateMode,
}

/// Execute the generate operation.
///
/// Runs every selected emitter over the schema, then writes, previews or
/// checks the resulting files according to the mode. Emitters run in
/// configuration order; the first failing emitter aborts the operation.
pub fn generate(config: &Config, schema: &Schema, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut emitters = Vec::new();

    for (name, emitter_config) in select_emitters(config, opts.emitter)? {
        let mut emitter = Generator::from_config(emitter_config)
            .wrap_err_with(|| format!("Failed to set up emitter '{}'", name))?;
        tracing::info!(emitter = name, kind = %emitter_config.kind, "running emitter");

        let files = emitter
            .emit_schema(schema)
            .wrap_err_with(|| format!("Emitter '{}' failed", name))?;

        let files = files
            .iter()
            .map(|file| process_file(file, opts.base_dir, opts.mode))
            .collect::<Result<Vec<_>>>()?;

        emitters.push(EmitterReport {
            name: name.to_string(),
            kind: emitter_config.kind,
            layout: emitter_config.output_type,
            files,
        });
    }

    Ok(GenerateReport {
        config_path: opts.config_path.to_path_buf(),
        model_count: schema.len(),
        mode: opts.mode,
        emitters,
    })
}

fn process_file(file: &OutputFile, base_dir: &Path, mode: GenerateMode) -> Result<FileReport> {
    let path = file.path(base_dir);
    let status = match mode {
        GenerateMode::Write => match file
            .write(base_dir)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?
        {
            WriteResult::Written => FileStatus::Written,
            WriteResult::Unchanged => FileStatus::Unchanged,
        },
        GenerateMode::DryRun => FileStatus::Preview(file.render_with_header()),
        GenerateMode::Check => {
            if file.is_stale(base_dir)? {
                tracing::debug!(path = %path.display(), "stale");
                FileStatus::Stale
            } else {
                FileStatus::UpToDate
            }
        }
    };
    Ok(FileReport { path, status })
}
