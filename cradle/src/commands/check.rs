use std::path::PathBuf;

use clap::Args;
use cradle_schema::CradleToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to cradle.toml (defaults to ./cradle.toml)
    #[arg(short, long, default_value = "cradle.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let cradle_toml = CradleToml::open(&self.config).unwrap_or_exit();
        let schema_path = cradle_toml.schema_path();
        let schema = cradle_toml.load_schema().unwrap_or_exit();

        let report = ops::check(cradle_toml.config(), &schema, &self.config, &schema_path);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
