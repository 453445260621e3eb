//! TypeScript code generator for the Cradle code generator.
//!
//! This crate turns a [`Schema`](cradle_schema::Schema) into TypeScript
//! source: exported interfaces for every model and operation, and Sequelize
//! model classes with a static initializer per model.
//!
//! # Usage
//!
//! ```ignore
//! use cradle_codegen_typescript::Generator;
//! use cradle_schema::CradleToml;
//!
//! let config = CradleToml::open("cradle.toml")?;
//! let schema = config.load_schema()?;
//!
//! for (name, emitter_config) in &config.config().emitters {
//!     let mut emitter = Generator::from_config(emitter_config)?;
//!     for file in emitter.emit_schema(&schema)? {
//!         println!("{}: {}", name, file.path.display());
//!     }
//! }
//! ```
//!
//! # Generated Output
//!
//! - `typescript` - `I<Model>` interfaces plus `<Operation>OperationArgs`
//!   interfaces, either one file per model or merged into one file
//! - `typescript-sequelize` - one `class <Model> extends Model` per model and
//!   an `initialize(sequelize)` helper, always merged into one file

mod generator;
mod naming;
mod project;
mod type_mapper;

pub mod ast;
pub mod emitters;

pub use generator::Generator;
pub use naming::TS_NAMING;
pub use project::{Declaration, Project, SourceFile};
pub use type_mapper::TypeScriptTypeMapper;
