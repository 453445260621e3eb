//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`TypeMapper`] - Trait for mapping property types to language types
//! - [`TypeForm`] - Which generated name a model reference resolves to
//! - [`NamingConvention`] - Language-specific naming rules

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{TypeForm, TypeMapper};
