use std::path::PathBuf;

use clap::Args;
use cradle_schema::CradleToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{GenerateMode, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to cradle.toml (defaults to ./cradle.toml)
    #[arg(short, long, default_value = "cradle.toml")]
    pub config: PathBuf,

    /// Run only the emitter with this name
    #[arg(short, long)]
    pub emitter: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Exit with an error when generated files are out of date
    #[arg(long)]
    pub check: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let cradle_toml = CradleToml::open(&self.config).unwrap_or_exit();
        let schema = cradle_toml.load_schema().unwrap_or_exit();

        let report = ops::generate(
            cradle_toml.config(),
            &schema,
            GenerateOptions {
                config_path: cradle_toml.path(),
                base_dir: cradle_toml.base_dir(),
                emitter: self.emitter.as_deref(),
                mode: self.mode(),
            },
        )?;

        report.render(&mut TerminalOutput::new());

        if report.has_stale_files() {
            std::process::exit(1);
        }
        Ok(())
    }

    fn mode(&self) -> GenerateMode {
        if self.dry_run {
            GenerateMode::DryRun
        } else if self.check {
            GenerateMode::Check
        } else {
            GenerateMode::Write
        }
    }
}
