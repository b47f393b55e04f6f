//! Core types shared across introspection, workflows, and generation.

mod column;
mod mapping;

pub use column::{Column, ColumnMeta};
pub use mapping::{MappingBundle, RelationshipMapping};
