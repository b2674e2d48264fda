use std::{fmt, path::PathBuf};

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that abort a turbine build.
///
/// Sub-component errors pass through unchanged; no partial definition is
/// returned alongside them.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Inputs or reference tables are inconsistent.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A layup references a material missing from the library.
    #[error(transparent)]
    MaterialNotFound(#[from] MaterialNotFoundError),

    /// An external descriptor could not be materialized.
    #[error(transparent)]
    FileFormat(#[from] FileFormatError),
}

/// Inconsistent or invalid configuration inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// Two sequences that must be parallel have different lengths.
    #[error("{what}: expected {expected} entries, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A radial grid is not a strictly increasing sequence of unit fractions.
    #[error("invalid {grid} grid")]
    InvalidGrid {
        grid: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A grid's first non-cylindrical index lies outside the grid.
    #[error("{grid} grid cylinder index {index} is outside {len} stations")]
    CylinderIndex {
        grid: &'static str,
        index: usize,
        len: usize,
    },

    /// A station references an airfoil that is not in the catalog.
    #[error("station {station} references airfoil {index}, catalog has {catalog_len}")]
    UnknownAirfoil {
        station: usize,
        index: usize,
        catalog_len: usize,
    },

    /// More web arrays were supplied than a section supports.
    #[error("{count} web arrays supplied, at most {max} are supported")]
    TooManyWebs { count: usize, max: usize },

    /// A present web location is not a chordwise fraction.
    #[error("web {web} at station {station} is not a chordwise fraction")]
    InvalidWebLocation {
        web: usize,
        station: usize,
        #[source]
        source: ConstraintError,
    },

    /// Two materials in the library share a name.
    #[error("material {0:?} is defined more than once")]
    DuplicateMaterial(String),

    /// The wind class is not one of `I`, `III`, or `Offshore`.
    #[error("unknown wind class {0:?}")]
    UnknownWindClass(String),

    /// A gear configuration contains an unknown stage code.
    #[error("unknown gear stage {0:?}")]
    UnknownGearStage(char),

    /// A scalar parameter violates its numeric constraint.
    #[error("invalid {what}")]
    InvalidParameter {
        what: &'static str,
        #[source]
        source: ConstraintError,
    },
}

impl ConfigurationError {
    /// Checks that a sequence parallel to another has the expected length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::LengthMismatch`] if the lengths differ.
    pub(super) fn check_len(
        what: &'static str,
        expected: usize,
        found: usize,
    ) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::LengthMismatch {
                what,
                expected,
                found,
            })
        }
    }

    /// Returns a closure that wraps a [`ConstraintError`] for a named parameter.
    pub(super) fn parameter(what: &'static str) -> impl Fn(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { what, source }
    }
}

/// Blade section surface that a layer stack belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Upper,
    Lower,
    /// Web by position in the station's ordered web list.
    Web(usize),
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upper => f.write_str("upper surface"),
            Self::Lower => f.write_str("lower surface"),
            Self::Web(index) => write!(f, "web {index}"),
        }
    }
}

/// A layup references a material name absent from the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("material {name:?} not found ({surface} of structural station {station})")]
pub struct MaterialNotFoundError {
    /// Unresolved material name.
    pub name: String,

    /// Zero-based structural grid index.
    pub station: usize,

    /// Surface whose layer stack referenced the material.
    pub surface: Surface,
}

/// An external descriptor could not be materialized.
#[derive(Debug, Error)]
#[error("malformed descriptor {}: {reason}", .descriptor.display())]
pub struct FileFormatError {
    /// Path of the offending descriptor.
    pub descriptor: PathBuf,

    /// What is wrong with it.
    pub reason: String,

    /// Underlying reader or validation error, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl FileFormatError {
    /// Creates a file format error without an underlying cause.
    pub fn new(descriptor: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Creates a file format error caused by another error.
    pub fn with_source(
        descriptor: impl Into<PathBuf>,
        reason: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            descriptor: descriptor.into(),
            reason: reason.into(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = MaterialNotFoundError {
            name: "carbon".into(),
            station: 7,
            surface: Surface::Web(1),
        };
        assert_eq!(
            err.to_string(),
            "material \"carbon\" not found (web 1 of structural station 7)"
        );

        let err = FileFormatError::new("blade/layup_8.inp", "missing web stack");
        assert_eq!(
            err.to_string(),
            "malformed descriptor blade/layup_8.inp: missing web stack"
        );
    }

    #[test]
    fn build_error_wraps_without_modification() {
        let inner = ConfigurationError::TooManyWebs { count: 4, max: 3 };
        let err = BuildError::from(inner.clone());
        assert!(matches!(err, BuildError::Configuration(ref e) if *e == inner));
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn check_len() {
        assert!(ConfigurationError::check_len("webs", 3, 3).is_ok());
        assert_eq!(
            ConfigurationError::check_len("webs", 3, 2),
            Err(ConfigurationError::LengthMismatch {
                what: "webs",
                expected: 3,
                found: 2
            })
        );
    }
}
