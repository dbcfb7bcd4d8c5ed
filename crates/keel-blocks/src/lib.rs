//! Block data model and material catalog crate.
#![forbid(unsafe_code)]

pub mod material;
pub mod types;

pub use material::{MaterialCatalog, MaterialProps};
pub use types::{Block, BlockKind, BlockShape, MaterialTier, Orientation, Rgba};
