//! Schema model, loading and configuration for the Cradle code generator.
//!
//! A [`Schema`] is an ordered list of [`Model`]s; each model maps property
//! names to [`PropertyType`]s and optionally declares [`Operation`]s. Schemas
//! are read from TOML or JSON and are treated as read-only, already-valid input
//! by the generators: this crate reports syntax and shape errors only.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod model;
mod parse;
mod property;

pub use config::{Config, CradleToml, EmitterConfig, EmitterKind, OutputLayout};
pub use error::{Error, Result, SourceContext};
pub use model::{Model, Operation, Schema};
pub use parse::SchemaFormat;
pub use property::{
    ArrayType, DecimalType, DefaultValue, IntegerType, MemberType, ModelRef, PropertyKind,
    PropertyType, StringType,
};
