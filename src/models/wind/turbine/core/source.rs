//! External descriptor sources and where to find them.

use std::path::{Path, PathBuf};

use super::{FileFormatError, LayupDescriptor, Material, reference::AIRFOIL_FILES};

/// Reads materialized blade descriptors.
///
/// Implementations own the file syntax; this crate only sees records.
/// Readers must be deterministic and must not depend on call order.
pub trait DescriptorReader {
    /// Reads every material in a material descriptor.
    ///
    /// # Errors
    ///
    /// Returns a [`FileFormatError`] if the descriptor cannot be materialized.
    fn materials(&self, path: &Path) -> Result<Vec<Material>, FileFormatError>;

    /// Reads the layer stacks for one structural station.
    ///
    /// # Errors
    ///
    /// Returns a [`FileFormatError`] if the descriptor cannot be materialized.
    fn layup(&self, path: &Path) -> Result<LayupDescriptor, FileFormatError>;

    /// Reads the ordered airfoil coordinates for one structural station.
    ///
    /// # Errors
    ///
    /// Returns a [`FileFormatError`] if the descriptor cannot be materialized.
    fn shape(&self, path: &Path) -> Result<Vec<[f64; 2]>, FileFormatError>;
}

/// Locations of the reference turbine's external files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceFiles {
    /// Directory containing airfoil polar files.
    pub airfoil_dir: PathBuf,

    /// Directory containing material, layup, and shape descriptors.
    pub blade_dir: PathBuf,
}

impl Default for ReferenceFiles {
    fn default() -> Self {
        let root = Path::new("reference_turbines").join("nrel5mw");
        Self {
            airfoil_dir: root.join("airfoils"),
            blade_dir: root.join("blade"),
        }
    }
}

impl ReferenceFiles {
    /// Returns the material descriptor path.
    #[must_use]
    pub fn materials(&self) -> PathBuf {
        self.blade_dir.join("materials.inp")
    }

    /// Returns the layup descriptor path for a zero-based structural station.
    ///
    /// Descriptor files are numbered from one, so station `i` reads `layup_{i+1}.inp`.
    #[must_use]
    pub fn layup(&self, station: usize) -> PathBuf {
        self.blade_dir.join(format!("layup_{}.inp", station + 1))
    }

    /// Returns the shape descriptor path for a zero-based structural station.
    ///
    /// Descriptor files are numbered from one, so station `i` reads `shape_{i+1}.inp`.
    #[must_use]
    pub fn shape(&self, station: usize) -> PathBuf {
        self.blade_dir.join(format!("shape_{}.inp", station + 1))
    }

    /// Returns the airfoil polar paths in catalog order.
    #[must_use]
    pub fn airfoils(&self) -> Vec<PathBuf> {
        AIRFOIL_FILES
            .iter()
            .map(|file| self.airfoil_dir.join(file))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_numbers_start_at_one() {
        let files = ReferenceFiles {
            airfoil_dir: "af".into(),
            blade_dir: "blade".into(),
        };

        assert_eq!(files.layup(0), Path::new("blade/layup_1.inp"));
        assert_eq!(files.shape(37), Path::new("blade/shape_38.inp"));
        assert_eq!(files.materials(), Path::new("blade/materials.inp"));
    }

    #[test]
    fn airfoil_catalog_order() {
        let airfoils = ReferenceFiles::default().airfoils();

        assert_eq!(airfoils.len(), 8);
        assert!(airfoils[0].ends_with("Cylinder1.dat"));
        assert!(airfoils[7].ends_with("NACA64_A17.dat"));
        assert!(airfoils[2].starts_with("reference_turbines/nrel5mw/airfoils"));
    }
}
