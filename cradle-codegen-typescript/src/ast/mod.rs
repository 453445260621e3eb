//! TypeScript AST builders for generating interfaces, classes, imports and constants.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod class;
mod consts;
mod fns;
mod imports;
mod interface;
mod objects;

pub use class::{Class, ClassField, FieldMark, Method};
pub use consts::Const;
pub use fns::{ArrowFn, Param};
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use objects::{JsObject, Property, PropertyValue};
