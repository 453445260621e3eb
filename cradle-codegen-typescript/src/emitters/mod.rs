//! Declaration builders and merge policies for TypeScript output.

mod interfaces;
mod sequelize;

pub use interfaces::InterfaceBuilder;
pub use sequelize::{SequelizeBuilder, SequelizeMerge};
