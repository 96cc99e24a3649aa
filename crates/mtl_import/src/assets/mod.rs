//! Asset import system

pub mod materials;

pub use materials::{
    Cursor,
    Material, Model, DEFAULT_MATERIAL_NAME,
    MtlParser, Directive, ColorSlot,
    MaterialLoader, LoadedLibrary,
    MaterialCache,
};

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found in any search path
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
