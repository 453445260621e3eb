//! Code generation outputs and declaration bookkeeping.
//!
//! This module provides utilities for managing generated output:
//! - [`OutputFile`] - One emitted document and the models it holds
//! - [`ImportCollector`] - Import tracking and deduplication
//! - [`DeclarationRegistry`] - Named declaration handles created ahead of filling

mod imports;
mod output;
mod registry;

pub use imports::ImportCollector;
pub use output::{GENERATED_HEADER, OutputFile};
pub use registry::DeclarationRegistry;
