//! The emission pipeline.
//!
//! An [`Emitter`] is assembled from three independent strategies:
//! - a [`TypeMapper`](crate::TypeMapper) projecting property types onto type expressions
//! - a [`DeclarationBuilder`] that declares shells for every model and then fills them
//! - a [`MergePolicy`] reducing per-model fragments into one document
//!
//! [`EmitterOptions`] carries the output path and layout.

mod merge;
mod options;
mod pipeline;

pub use merge::{ConcatMerge, MergePolicy, ModelContents};
pub use options::EmitterOptions;
pub use pipeline::{DeclarationBuilder, EmitContext, Emitter};
