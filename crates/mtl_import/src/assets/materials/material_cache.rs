//! Material library cache
//!
//! Provides a caching layer on top of [`MaterialLoader`] so an import
//! pipeline that references the same `.mtl` file from many meshes parses it
//! once. Entries are reloaded when the file on disk is newer than the copy.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

use super::material_loader::MaterialLoader;
use super::model::Model;
use crate::assets::AssetError;
use crate::config::MaterialImportConfig;

/// Cache entry with the parsed library and metadata
#[derive(Clone)]
struct CacheEntry {
    model: Arc<Model>,
    /// File modification time when loaded
    modified_time: Option<SystemTime>,
}

/// Thread-safe cache of parsed material libraries keyed by file path
pub struct MaterialCache {
    config: MaterialImportConfig,
    cache: RwLock<HashMap<PathBuf, CacheEntry>>,
}

impl MaterialCache {
    /// Create an empty cache that loads with `config`
    pub fn new(config: MaterialImportConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Load a library, reusing the cached copy unless the file changed
    ///
    /// Relative paths go through the configured search paths first; the
    /// cache is keyed on the file actually found.
    pub fn load_or_get(&self, mtl_path: impl AsRef<Path>) -> Result<Arc<Model>, AssetError> {
        let file_path = self.resolve(mtl_path.as_ref())?;

        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(entry) = cache.get(&file_path) {
                if !Self::is_stale(&file_path, entry) {
                    return Ok(Arc::clone(&entry.model));
                }
                log::debug!("Material library {:?} changed on disk, reloading", file_path);
            }
        }

        self.load_fresh(file_path)
    }

    /// Get a cached library without reloading it
    pub fn get_cached(&self, mtl_path: impl AsRef<Path>) -> Option<Arc<Model>> {
        let key = self.cache_key(mtl_path.as_ref());
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache.get(&key).map(|entry| Arc::clone(&entry.model))
    }

    /// Check if a library is cached
    pub fn is_cached(&self, mtl_path: impl AsRef<Path>) -> bool {
        let key = self.cache_key(mtl_path.as_ref());
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache.contains_key(&key)
    }

    /// Force reload a library from disk, bypassing the cache
    pub fn reload(&self, mtl_path: impl AsRef<Path>) -> Result<Arc<Model>, AssetError> {
        let file_path = self.resolve(mtl_path.as_ref())?;
        self.load_fresh(file_path)
    }

    /// Drop every cached library
    pub fn clear(&self) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache.clear();
    }

    /// Number of cached libraries
    pub fn len(&self) -> usize {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reload every cached library whose file was modified
    ///
    /// Returns the number of libraries that were reloaded.
    pub fn check_for_updates(&self) -> usize {
        let stale: Vec<PathBuf> = {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            cache
                .iter()
                .filter(|(path, entry)| Self::is_stale(path, entry))
                .map(|(path, _)| path.clone())
                .collect()
        };

        stale
            .into_iter()
            .filter(|path| match self.load_fresh(path.clone()) {
                Ok(_) => true,
                Err(e) => {
                    log::warn!("Failed to reload material library {:?}: {}", path, e);
                    false
                }
            })
            .count()
    }

    fn resolve(&self, mtl_path: &Path) -> Result<PathBuf, AssetError> {
        MaterialLoader::resolve(mtl_path, &self.config)
            .ok_or_else(|| AssetError::NotFound(mtl_path.display().to_string()))
    }

    /// Key a lookup would use; unresolvable paths are looked up as given
    fn cache_key(&self, mtl_path: &Path) -> PathBuf {
        MaterialLoader::resolve(mtl_path, &self.config).unwrap_or_else(|| mtl_path.to_path_buf())
    }

    /// Parse `file_path` and store it under that exact key
    fn load_fresh(&self, file_path: PathBuf) -> Result<Arc<Model>, AssetError> {
        let modified_time = Self::modified_time(&file_path);
        let loaded = MaterialLoader::load_resolved(file_path, &self.config)?;
        let model = Arc::new(loaded.model);
        let entry = CacheEntry {
            model: Arc::clone(&model),
            modified_time,
        };

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache.insert(loaded.path, entry);
        Ok(model)
    }

    fn is_stale(mtl_path: &Path, entry: &CacheEntry) -> bool {
        match (entry.modified_time, Self::modified_time(mtl_path)) {
            (Some(cached), Some(current)) => current > cached,
            // No timestamp or file gone: keep serving the cached copy
            _ => false,
        }
    }

    fn modified_time(mtl_path: &Path) -> Option<SystemTime> {
        std::fs::metadata(mtl_path).ok().and_then(|m| m.modified().ok())
    }
}

impl Default for MaterialCache {
    fn default() -> Self {
        Self::new(MaterialImportConfig::default())
    }
}
