mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use tracing::Level;

/// Extension trait for exiting on schema and configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cradle_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "cradle")]
#[command(version)]
#[command(about = "Generate TypeScript interfaces and ORM models from a schema")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    /// Log level selected by `-v`/`-q`.
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code for the emitters configured in cradle.toml
    Generate(GenerateCommand),

    /// Validate cradle.toml and the schema without writing files
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_flags() {
        let cli = Cli::try_parse_from(["cradle", "check"]).unwrap();
        assert_eq!(cli.log_level(), Level::WARN);

        let cli = Cli::try_parse_from(["cradle", "generate", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), Level::DEBUG);

        let cli = Cli::try_parse_from(["cradle", "-q", "check"]).unwrap();
        assert_eq!(cli.log_level(), Level::ERROR);

        assert!(Cli::try_parse_from(["cradle", "-q", "-v", "check"]).is_err());
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "cradle",
            "generate",
            "--config",
            "demo/cradle.toml",
            "--emitter",
            "orm",
            "--dry-run",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.config, std::path::PathBuf::from("demo/cradle.toml"));
                assert_eq!(cmd.emitter.as_deref(), Some("orm"));
                assert!(cmd.dry_run);
                assert!(!cmd.check);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_dry_run_conflicts_with_check() {
        assert!(Cli::try_parse_from(["cradle", "generate", "--dry-run", "--check"]).is_err());
    }
}
