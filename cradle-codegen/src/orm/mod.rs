//! ORM column-descriptor synthesis.
//!
//! Projects property types onto the column conventions of a relational
//! mapping runtime: column type, nullability, primary key, normalized
//! default value and autoincrement. Rendering the descriptors is left to the
//! language crates.

mod column;

pub use column::{ColumnDefault, ColumnDescriptor, ColumnType, columns_for_model};
