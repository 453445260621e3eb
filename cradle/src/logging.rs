//! Diagnostic logging for the cradle CLI.
//!
//! Logs go to stderr so generated previews on stdout stay clean. `RUST_LOG`
//! takes precedence over the level chosen with `-v`/`-q`.

use eyre::{Result, WrapErr};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: [&str; 5] = [
    "cradle",
    "cradle_codegen",
    "cradle_codegen_typescript",
    "cradle_core",
    "cradle_schema",
];

/// Install the global subscriber.
pub fn init(level: Level) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level)))
        .wrap_err("Failed to create log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .wrap_err("Failed to install logger")?;
    Ok(())
}

fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, level))
        .collect::<Vec<_>>()
        .join(",")
}
