//! Core utilities for the Cradle code generator.
//!
//! This crate provides the small, dependency-light pieces shared by every
//! other Cradle crate: identifier case conversion, string-literal quoting,
//! and writing generated files to disk.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, WriteResult};
// String utilities
pub use utils::{quote_literal, to_camel_case, to_pascal_case, upper_first, words};
