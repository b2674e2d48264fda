//! Radial discretizations of the blade.

use std::marker::PhantomData;

use crate::support::constraint::{StrictlyIncreasing, UnitInterval};

use super::ConfigurationError;

/// Names a kind of radial grid for error reporting.
pub trait GridKind {
    const NAME: &'static str;
}

/// Marker for the aerodynamic discretization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aerodynamic;

/// Marker for the structural discretization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Structural;

impl GridKind for Aerodynamic {
    const NAME: &'static str = "aerodynamic";
}

impl GridKind for Structural {
    const NAME: &'static str = "structural";
}

/// Strictly increasing radial fractions of the blade radius.
///
/// The `Kind` parameter keeps aerodynamic and structural grids from being
/// mixed up; they usually differ in resolution and station count.
/// Stations before [`idx_cylinder`](Self::idx_cylinder) are cylindrical and
/// share a constant twist.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGrid<Kind> {
    fractions: Vec<f64>,
    idx_cylinder: usize,
    _kind: PhantomData<Kind>,
}

impl<Kind: GridKind> RadialGrid<Kind> {
    /// Constructs a validated radial grid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidGrid`] if the fractions are empty,
    /// outside `[0, 1]`, or not strictly increasing, and
    /// [`ConfigurationError::CylinderIndex`] if `idx_cylinder` is past the end.
    pub fn new(fractions: Vec<f64>, idx_cylinder: usize) -> Result<Self, ConfigurationError> {
        let fractions = unit_fractions(Kind::NAME, fractions)?;

        if idx_cylinder >= fractions.len() {
            return Err(ConfigurationError::CylinderIndex {
                grid: Kind::NAME,
                index: idx_cylinder,
                len: fractions.len(),
            });
        }

        Ok(Self {
            fractions,
            idx_cylinder,
            _kind: PhantomData,
        })
    }

    /// Returns the station fractions, root to tip.
    #[must_use]
    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    /// Returns the index of the first non-cylindrical station.
    #[must_use]
    pub fn idx_cylinder(&self) -> usize {
        self.idx_cylinder
    }

    /// Returns the number of stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    /// Always false; a grid has at least one station.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Checks that a per-station sequence is parallel to this grid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::LengthMismatch`] if `found` differs from the station count.
    pub fn check_parallel(
        &self,
        what: &'static str,
        found: usize,
    ) -> Result<(), ConfigurationError> {
        ConfigurationError::check_len(what, self.len(), found)
    }
}

/// Validates a strictly increasing sequence of fractions in `[0, 1]`.
pub(super) fn unit_fractions(
    grid: &'static str,
    fractions: Vec<f64>,
) -> Result<Vec<f64>, ConfigurationError> {
    let invalid = |source| ConfigurationError::InvalidGrid { grid, source };

    for &r in &fractions {
        UnitInterval::new(r).map_err(invalid)?;
    }

    Ok(StrictlyIncreasing::new(fractions).map_err(invalid)?.into_inner())
}
