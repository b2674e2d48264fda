//! Shared library of composite materials.

use std::{collections::BTreeMap, sync::Arc};

use uom::si::f64::{MassDensity, Pressure, Ratio};

use super::ConfigurationError;

/// Orthotropic material for thin-walled 2D composite laminates.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,

    /// Young's modulus along the fiber direction.
    pub e1: Pressure,

    /// Young's modulus transverse to the fibers.
    pub e2: Pressure,

    /// In-plane shear modulus.
    pub g12: Pressure,

    /// Major Poisson ratio.
    pub nu12: Ratio,

    pub density: MassDensity,
}

/// Immutable materials keyed by name.
///
/// Layers hold shared handles into the library, so a library loaded once can
/// back any number of turbine builds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialLibrary {
    materials: BTreeMap<String, Arc<Material>>,
}

impl MaterialLibrary {
    /// Builds a library from material records.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateMaterial`] if two records share a name.
    pub fn new(materials: impl IntoIterator<Item = Material>) -> Result<Self, ConfigurationError> {
        let mut library = BTreeMap::new();
        for material in materials {
            let name = material.name.clone();
            if library.insert(name.clone(), Arc::new(material)).is_some() {
                return Err(ConfigurationError::DuplicateMaterial(name));
            }
        }
        Ok(Self {
            materials: library,
        })
    }

    /// Looks up a material by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Material>> {
        self.materials.get(name)
    }

    /// Iterates over materials in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Material>> {
        self.materials.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
