//! Assignment of airfoil polars to aerodynamic stations.

use std::path::{Path, PathBuf};

use super::ConfigurationError;

/// Ordered catalog of airfoil polar files.
///
/// Paths are opaque to this crate and pass through to the aerodynamic solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirfoilCatalog {
    files: Vec<PathBuf>,
}

impl AirfoilCatalog {
    #[must_use]
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// Returns the file at a catalog index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.files.get(index).map(PathBuf::as_path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Airfoil polar used at one aerodynamic station.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilStation {
    /// Radial fraction of the station.
    pub r: f64,

    /// Polar file for the station.
    pub polar: PathBuf,
}

/// Maps each radial station to the catalog airfoil assigned to it.
///
/// No interpolation is done. Adjacent stations may share a catalog entry,
/// which is how transition regions reuse a profile.
///
/// # Errors
///
/// Returns [`ConfigurationError::LengthMismatch`] if `stations` and `indices`
/// differ in length, or [`ConfigurationError::UnknownAirfoil`] if an index is
/// outside the catalog.
pub fn map_airfoils(
    stations: &[f64],
    indices: &[usize],
    catalog: &AirfoilCatalog,
) -> Result<Vec<AirfoilStation>, ConfigurationError> {
    ConfigurationError::check_len("airfoil indices", stations.len(), indices.len())?;

    stations
        .iter()
        .zip(indices)
        .enumerate()
        .map(|(station, (&r, &index))| {
            let polar = catalog
                .get(index)
                .ok_or(ConfigurationError::UnknownAirfoil {
                    station,
                    index,
                    catalog_len: catalog.len(),
                })?;
            Ok(AirfoilStation {
                r,
                polar: polar.to_path_buf(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> AirfoilCatalog {
        AirfoilCatalog::new(vec!["Cylinder1.dat".into(), "DU40_A17.dat".into()])
    }

    #[test]
    fn adjacent_stations_share_catalog_entries() {
        let stations = map_airfoils(&[0.1, 0.2, 0.3], &[0, 0, 1], &catalog()).unwrap();

        assert_eq!(stations.len(), 3);
        assert_eq!(stations[0].polar, Path::new("Cylinder1.dat"));
        assert_eq!(stations[1].polar, stations[0].polar);
        assert_eq!(stations[2].polar, Path::new("DU40_A17.dat"));
        assert_eq!(stations[2].r, 0.3);
    }

    #[test]
    fn length_mismatch_is_a_configuration_error() {
        assert_eq!(
            map_airfoils(&[0.1, 0.2], &[0], &catalog()),
            Err(ConfigurationError::LengthMismatch {
                what: "airfoil indices",
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn index_outside_catalog() {
        assert_eq!(
            map_airfoils(&[0.1, 0.2], &[1, 2], &catalog()),
            Err(ConfigurationError::UnknownAirfoil {
                station: 1,
                index: 2,
                catalog_len: 2,
            })
        );
    }
}
