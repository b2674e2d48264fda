//! Reference wind turbine definition model.
//!
//! [`ReferenceTurbine`] implements [`twine_core::Model`] by building a
//! [`TurbineDefinition`] for the NREL 5-MW reference turbine from
//! [`TurbineOptions`]. The computation lives in the internal `core` module,
//! whose public items are re-exported here.
//!
//! # Example
//!
//! ```ignore
//! use twine_core::Model;
//! use twine_wind::models::wind::turbine::{ReferenceFiles, ReferenceTurbine, TurbineOptions};
//! use uom::si::{f64::Length, length::meter};
//!
//! // `reader` implements `DescriptorReader` for the PreComp files on disk.
//! let turbine = ReferenceTurbine::new(ReferenceFiles::default(), reader)?;
//!
//! let options = TurbineOptions::new("Offshore".parse()?, Length::new::<meter>(20.0))?;
//! let definition = turbine.call(&options)?;
//! assert!(definition.tower.foundation.monopile().is_some());
//! ```

pub(crate) mod core;

pub use self::core::*;

use std::sync::Arc;

use twine_core::Model;

/// The NREL 5-MW reference turbine as a [`Model`].
///
/// The material library is read once at construction and shared, unmodified,
/// by every call. Each call builds a fresh [`TurbineDefinition`].
#[derive(Debug)]
pub struct ReferenceTurbine<Reader> {
    files: ReferenceFiles,
    materials: Arc<MaterialLibrary>,
    reader: Reader,
}

impl<Reader: DescriptorReader> ReferenceTurbine<Reader> {
    /// Creates the model and loads its material library.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if the material descriptor cannot be read or
    /// defines a material twice.
    pub fn new(files: ReferenceFiles, reader: Reader) -> Result<Self, BuildError> {
        let materials = Arc::new(self::core::load_materials(&files, &reader)?);
        Ok(Self {
            files,
            materials,
            reader,
        })
    }

    /// Returns the shared material library.
    #[must_use]
    pub fn materials(&self) -> &Arc<MaterialLibrary> {
        &self.materials
    }

    /// Returns the descriptor file locations.
    #[must_use]
    pub fn files(&self) -> &ReferenceFiles {
        &self.files
    }
}

impl<Reader: DescriptorReader> Model for ReferenceTurbine<Reader> {
    type Input = TurbineOptions;
    type Output = TurbineDefinition;
    type Error = BuildError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::configure(input, &self.materials, &self.files, &self.reader)
    }
}
