//! Material records and the registry that owns them
//!
//! A [`Model`] holds every material declared by one or more parses, in
//! declaration order, plus the "current material" handle the directive loop
//! writes into. Records live in a slot-map arena and the current material is
//! tracked by key, so growing the registry never invalidates it.

use std::collections::HashMap;

use crate::foundation::collections::{MaterialArena, MaterialKey};
use crate::foundation::math::{self, Color3};

/// Name given to the fallback material that receives property directives
/// appearing before the first `newmtl`
pub const DEFAULT_MATERIAL_NAME: &str = "default";

/// Parsed material data (Wavefront Phong model)
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name
    pub name: String,
    /// Ambient color (Ka)
    pub ambient: Color3,
    /// Diffuse color (Kd)
    pub diffuse: Color3,
    /// Specular color (Ks)
    pub specular: Color3,
    /// Dissolve/opacity (d)
    pub alpha: f32,
    /// Specular exponent (Ns)
    pub shininess: f32,
    /// Illumination model (illum), interpreted by the renderer
    pub illumination_model: i32,
    /// Texture map path; the last `map_*` directive wins
    pub texture: Option<String>,
}

impl Material {
    /// Create a material with every property zeroed
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ambient: math::black(),
            diffuse: math::black(),
            specular: math::black(),
            alpha: 0.0,
            shininess: 0.0,
            illumination_model: 0,
            texture: None,
        }
    }
}

/// Registry of materials produced by parsing a material library
#[derive(Debug, Default)]
pub struct Model {
    materials: MaterialArena<Material>,
    /// Distinct names in first-declaration order
    library: Vec<String>,
    by_name: HashMap<String, MaterialKey>,
    default_material: Option<MaterialKey>,
    current: Option<MaterialKey>,
}

impl Model {
    /// Create an empty model; the default material is created on first parse
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the default material if this model has none yet and make it
    /// the current material
    pub fn ensure_default(&mut self) -> MaterialKey {
        let key = match self.default_material {
            Some(key) => key,
            None => {
                let key = self.materials.insert(Material::new(DEFAULT_MATERIAL_NAME));
                self.default_material = Some(key);
                key
            }
        };
        self.current = Some(key);
        key
    }

    /// Make `name` the current material, declaring it first if needed
    ///
    /// Re-declaring an existing name reopens it: none of its properties are
    /// reset, so later directives add to what earlier blocks set.
    pub fn create_or_select(&mut self, name: &str) -> MaterialKey {
        let key = match self.by_name.get(name) {
            Some(&key) => {
                log::debug!("Reopening material '{}'", name);
                key
            }
            None => {
                log::debug!("Creating material '{}'", name);
                let key = self.materials.insert(Material::new(name));
                self.library.push(name.to_owned());
                self.by_name.insert(name.to_owned(), key);
                key
            }
        };
        self.current = Some(key);
        key
    }

    /// Material receiving property directives
    ///
    /// Falls back to the default material, creating it if necessary, so a
    /// target always exists.
    pub fn current_material_mut(&mut self) -> &mut Material {
        let key = match self.current {
            Some(key) => key,
            None => self.ensure_default(),
        };
        &mut self.materials[key]
    }

    /// Material receiving property directives, if a parse has started
    pub fn current_material(&self) -> Option<&Material> {
        self.current.map(|key| &self.materials[key])
    }

    /// The fallback material, once a parse has created it
    pub fn default_material(&self) -> Option<&Material> {
        self.default_material.map(|key| &self.materials[key])
    }

    /// Distinct declared material names in library order
    pub fn library(&self) -> &[String] {
        &self.library
    }

    /// Look up a declared material by name
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.by_name.get(name).map(|&key| &self.materials[key])
    }

    /// Mutable lookup of a declared material by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Material> {
        let key = *self.by_name.get(name)?;
        self.materials.get_mut(key)
    }

    /// Check whether `name` was declared
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of declared materials, not counting the default material
    pub fn len(&self) -> usize {
        self.library.len()
    }

    /// True when no material was declared
    pub fn is_empty(&self) -> bool {
        self.library.is_empty()
    }

    /// Declared materials in library order
    pub fn iter(&self) -> impl Iterator<Item = &Material> + '_ {
        self.library.iter().map(move |name| &self.materials[self.by_name[name]])
    }

    /// Declared materials, mutably, in no particular order
    ///
    /// Use [`Model::library`] with [`Model::get_mut`] when order matters.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Material> + '_ {
        let default_material = self.default_material;
        self.materials
            .iter_mut()
            .filter(move |(key, _)| Some(*key) != default_material)
            .map(|(_, material)| material)
    }
}
