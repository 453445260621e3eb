//! Generate command report data structures.

use std::path::PathBuf;

use cradle_schema::{EmitterKind, OutputLayout};

use super::output::{Output, Report};

/// What the generate operation does with emitted files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerateMode {
    /// Write files, skipping those whose content is unchanged.
    #[default]
    Write,
    /// Print files without touching the disk.
    DryRun,
    /// Compare files on disk with what would be written.
    Check,
}

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Number of models in the schema.
    pub model_count: usize,
    pub mode: GenerateMode,
    /// One entry per emitter that ran, in configuration order.
    pub emitters: Vec<EmitterReport>,
}

/// Files produced by one emitter.
#[derive(Debug)]
pub struct EmitterReport {
    /// Table name under `[emitters]`.
    pub name: String,
    pub kind: EmitterKind,
    pub layout: OutputLayout,
    pub files: Vec<FileReport>,
}

/// A generated file and what happened to it.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Written to disk.
    Written,
    /// Already had the generated content.
    Unchanged,
    /// Differs from what would be generated.
    Stale,
    /// Matches what would be generated.
    UpToDate,
    /// Dry-run content, header included.
    Preview(String),
}

impl GenerateReport {
    fn files(&self) -> impl Iterator<Item = &FileReport> {
        self.emitters.iter().flat_map(|e| e.files.iter())
    }

    /// Number of files across all emitters.
    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    /// Number of files with the given status.
    pub fn count(&self, status: &FileStatus) -> usize {
        self.files().filter(|f| &f.status == status).count()
    }

    /// Whether a check found files that need regenerating.
    pub fn has_stale_files(&self) -> bool {
        self.count(&FileStatus::Stale) > 0
    }

    fn render_preview(&self, out: &mut dyn Output) {
        for file in self.files() {
            if let FileStatus::Preview(content) = &file.status {
                out.divider(&file.path.display().to_string());
                out.preformatted(content.trim_end());
            }
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated",
            self.file_count()
        ));
    }

    fn render_files(&self, out: &mut dyn Output) {
        for emitter in &self.emitters {
            out.section(&format!(
                "{} ({}, {})",
                emitter.name, emitter.kind, emitter.layout
            ));
            for file in &emitter.files {
                let path = file.path.display().to_string();
                match file.status {
                    FileStatus::Written => out.added_item(&path),
                    FileStatus::Stale => out.changed_item(&path),
                    _ => out.list_item(&path),
                }
            }
        }
        out.newline();
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.mode == GenerateMode::DryRun {
            self.render_preview(out);
            return;
        }

        out.key_value(
            &self.config_path.display().to_string(),
            &format!("{} models", self.model_count),
        );
        self.render_files(out);

        match self.mode {
            GenerateMode::Check if self.has_stale_files() => out.error(&format!(
                "{} of {} generated files are out of date; run `cradle generate`",
                self.count(&FileStatus::Stale),
                self.file_count()
            )),
            GenerateMode::Check => out.preformatted("✓ generated files are up to date"),
            _ => out.preformatted(&format!(
                "Generated {} files ({} unchanged)",
                self.file_count(),
                self.count(&FileStatus::Unchanged)
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn report(mode: GenerateMode, statuses: Vec<FileStatus>) -> GenerateReport {
        let files = statuses
            .into_iter()
            .enumerate()
            .map(|(i, status)| FileReport {
                path: PathBuf::from(format!("src/models/M{}.ts", i)),
                status,
            })
            .collect();
        GenerateReport {
            config_path: PathBuf::from("cradle.toml"),
            model_count: 2,
            mode,
            emitters: vec![EmitterReport {
                name: "interfaces".to_string(),
                kind: EmitterKind::TypeScript,
                layout: OutputLayout::OneFilePerModel,
                files,
            }],
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(
            GenerateMode::Write,
            vec![FileStatus::Written, FileStatus::Unchanged],
        );
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.text(),
            "cradle.toml: 2 models\n\
             interfaces (typescript, oneFilePerModel):\n  \
             + src/models/M0.ts\n  \
             - src/models/M1.ts\n\
             \n\
             Generated 2 files (1 unchanged)"
        );
    }

    #[test]
    fn test_render_check_with_stale_files() {
        let report = report(
            GenerateMode::Check,
            vec![FileStatus::Stale, FileStatus::UpToDate],
        );
        assert!(report.has_stale_files());

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert!(out.lines.contains(&"  ~ src/models/M0.ts".to_string()));
        assert_eq!(
            out.lines.last().unwrap(),
            "error: 1 of 2 generated files are out of date; run `cradle generate`"
        );
    }

    #[test]
    fn test_render_preview() {
        let report = report(
            GenerateMode::DryRun,
            vec![FileStatus::Preview("export interface IM0 {}\n".to_string())],
        );
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "── src/models/M0.ts ──",
                "export interface IM0 {}",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }
}
