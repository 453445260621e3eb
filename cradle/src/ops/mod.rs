//! Core operations.
//!
//! This module contains the business logic for cradle commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::generate;

use cradle_schema::{Config, EmitterConfig};
use eyre::{Result, bail};

/// Emitters to run: all of them, or the one named on the command line.
fn select_emitters<'a>(
    config: &'a Config,
    only: Option<&str>,
) -> Result<Vec<(&'a str, &'a EmitterConfig)>> {
    let selected: Vec<_> = config
        .emitters
        .iter()
        .filter(|(name, _)| only.is_none_or(|only| only == name.as_str()))
        .map(|(name, emitter)| (name.as_str(), emitter))
        .collect();

    if let (Some(only), true) = (only, selected.is_empty()) {
        let available: Vec<&str> = config.emitters.keys().map(String::as_str).collect();
        bail!(
            "no emitter named '{}' in cradle.toml (available: {})",
            only,
            available.join(", ")
        );
    }
    Ok(selected)
}
