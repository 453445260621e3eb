//! Shared code generation machinery for the Cradle code generator.
//!
//! This crate provides the language-agnostic half of emission; the
//! language-specific crates (e.g., `cradle-codegen-typescript`) plug
//! declaration builders, type mappers and merge policies into it.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`emitter`] - The emission pipeline (Emitter, EmitterOptions, MergePolicy, etc.)
//! - [`generation`] - Output management (OutputFile, ImportCollector, DeclarationRegistry)
//! - [`language`] - Language-specific abstractions (TypeMapper, NamingConvention)
//! - [`orm`] - ORM column-descriptor synthesis

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
pub mod emitter;
pub mod generation;
pub mod language;
pub mod orm;

mod error;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use emitter::{
    ConcatMerge, DeclarationBuilder, EmitContext, Emitter, EmitterOptions, MergePolicy,
    ModelContents,
};
pub use error::{EmitError, Result};
pub use generation::{DeclarationRegistry, GENERATED_HEADER, ImportCollector, OutputFile};
pub use language::{NamingConvention, TypeForm, TypeMapper};
