//! # MTL Import
//!
//! Wavefront material library (`.mtl`) importer for 3D asset pipelines.
//!
//! ## Features
//!
//! - **Lenient parsing**: unknown directives and malformed numbers never abort a parse
//! - **Ordered registry**: materials keep their declaration order and can be reopened
//! - **Default material**: property lines before the first `newmtl` still land somewhere
//! - **File loading**: search paths, texture path resolution and a reload-aware cache
//!
//! ## Quick Start
//!
//! ```rust
//! use mtl_import::prelude::*;
//!
//! let model = MaterialLoader::parse_str("newmtl Hull\nKd 0.5 0.5 0.5\nillum 2\n");
//! let hull = model.get("Hull").unwrap();
//! assert_eq!(hull.illumination_model, 2);
//! assert_eq!(model.library(), ["Hull"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod config;
pub mod assets;

pub use assets::AssetError;
pub use config::{Config, ConfigError, MaterialImportConfig};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        AssetError,
        assets::{Material, Model, MtlParser, MaterialLoader, LoadedLibrary, MaterialCache, DEFAULT_MATERIAL_NAME},
        config::{Config, ConfigError, MaterialImportConfig},
        foundation::math::Color3,
    };
}
