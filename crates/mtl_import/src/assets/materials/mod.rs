//! Material library import subsystem
//!
//! Bottom-up: [`cursor`] scans bytes, [`values`] coerces tokens, [`model`]
//! owns the records and [`mtl_parser`] drives the directive loop. The loader
//! and cache sit on top for file-based workflows.

pub mod cursor;
pub mod values;
pub mod model;
pub mod mtl_parser;
pub mod material_loader;
pub mod material_cache;

pub use cursor::Cursor;
pub use model::{Material, Model, DEFAULT_MATERIAL_NAME};
pub use mtl_parser::{ColorSlot, Directive, MtlParser};
pub use material_loader::{LoadedLibrary, MaterialLoader};
pub use material_cache::MaterialCache;

#[cfg(test)]
mod test_mtl_properties;
