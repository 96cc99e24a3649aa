//! Material loader with MTL file support
//!
//! Resolves library files through the configured search paths, feeds their
//! bytes to [`MtlParser`] and optionally rewrites texture references so they
//! point next to the library file.

use std::fs;
use std::path::{Path, PathBuf};

use super::model::Model;
use super::mtl_parser::MtlParser;
use crate::assets::AssetError;
use crate::config::MaterialImportConfig;

/// Library loaded from disk with metadata about the source file
#[derive(Debug)]
pub struct LoadedLibrary {
    /// The parsed materials
    pub model: Model,
    /// File the library was read from, after search path resolution
    pub path: PathBuf,
    /// Number of lines read
    pub lines: usize,
}

/// Entry points for turning material library data into a [`Model`]
pub struct MaterialLoader;

impl MaterialLoader {
    /// Parse an in-memory library into a fresh model
    pub fn parse_bytes(data: &[u8]) -> Model {
        let mut model = Model::new();
        Self::parse_into(&mut model, data);
        model
    }

    /// Parse library text into a fresh model
    pub fn parse_str(contents: &str) -> Model {
        Self::parse_bytes(contents.as_bytes())
    }

    /// Parse into an existing model
    ///
    /// Materials accumulate across calls; the default material is only
    /// created the first time. Returns the final line counter.
    pub fn parse_into(model: &mut Model, data: &[u8]) -> usize {
        let lines = MtlParser::parse(data, model);
        log::debug!("Parsed {} line(s), {} material(s) declared", lines, model.len());
        lines
    }

    /// Load a material library from disk
    ///
    /// # Arguments
    /// * `mtl_path` - Path to the .mtl file; relative paths are tried against
    ///   each search path in order before being used as given
    /// * `config` - Import settings
    ///
    /// # Returns
    /// The populated model, or an error if the file cannot be found or read
    pub fn load_file(
        mtl_path: impl AsRef<Path>,
        config: &MaterialImportConfig,
    ) -> Result<Model, AssetError> {
        Self::load_library(mtl_path, config).map(|loaded| loaded.model)
    }

    /// Load a material library from disk, keeping where it was found and
    /// how many lines it had
    pub fn load_library(
        mtl_path: impl AsRef<Path>,
        config: &MaterialImportConfig,
    ) -> Result<LoadedLibrary, AssetError> {
        let mtl_path = mtl_path.as_ref();
        let file_path = Self::resolve(mtl_path, config)
            .ok_or_else(|| AssetError::NotFound(mtl_path.display().to_string()))?;
        Self::load_resolved(file_path, config)
    }

    /// Load a library whose path was already resolved; search paths are not
    /// consulted again
    pub fn load_resolved(
        file_path: PathBuf,
        config: &MaterialImportConfig,
    ) -> Result<LoadedLibrary, AssetError> {
        let bytes = fs::read(&file_path)?;
        let mut model = Model::new();
        let line_counter = Self::parse_into(&mut model, &bytes);

        if config.resolve_texture_paths {
            if let Some(base_dir) = file_path.parent() {
                Self::resolve_texture_paths(&mut model, base_dir);
            }
        }

        log::info!("Loaded {} material(s) from {:?}", model.len(), file_path);
        Ok(LoadedLibrary {
            model,
            path: file_path,
            lines: line_counter.saturating_sub(1),
        })
    }

    /// Find the file a library path refers to
    pub fn resolve(mtl_path: &Path, config: &MaterialImportConfig) -> Option<PathBuf> {
        if mtl_path.is_relative() {
            for search_path in &config.search_paths {
                let candidate = search_path.join(mtl_path);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }

        mtl_path.is_file().then(|| mtl_path.to_path_buf())
    }

    /// Rewrite relative texture references of declared materials against `base_dir`
    fn resolve_texture_paths(model: &mut Model, base_dir: &Path) {
        for material in model.iter_mut() {
            if let Some(texture) = material.texture.as_mut() {
                let path = Path::new(texture.as_str());
                if path.is_relative() {
                    *texture = base_dir.join(path).to_string_lossy().into_owned();
                }
            }
        }
    }
}
