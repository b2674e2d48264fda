//! Per-station composite sections assembled from layup descriptors.

use std::{path::Path, sync::Arc};

use thiserror::Error;
use uom::si::f64::{Angle, Length};

use crate::support::constraint::{Constrained, NonNegative};

use super::{
    BuildError, FileFormatError, Material, MaterialLibrary, MaterialNotFoundError, RadialGrid,
    ReferenceFiles, Structural, Surface, WebLocation, source::DescriptorReader,
};

/// One layer of a layup descriptor, before material resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub material: String,
    pub thickness: Length,
    pub orientation: Angle,
}

/// Layer stacks read for one structural station.
///
/// `webs` holds one stack per web present at the station, in web order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayupDescriptor {
    pub upper: Vec<LayerSpec>,
    pub lower: Vec<LayerSpec>,
    pub webs: Vec<Vec<LayerSpec>>,
}

/// A resolved composite layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub material: Arc<Material>,
    pub thickness: Constrained<Length, NonNegative>,

    /// Fiber orientation relative to the section's reference direction.
    pub orientation: Angle,
}

/// Ordered stack of resolved layers for one surface of one station.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeSection {
    layers: Vec<Layer>,
}

impl CompositeSection {
    /// Returns the layers, outermost first.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the summed thickness of all layers.
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.layers
            .iter()
            .map(|layer| layer.thickness)
            .sum::<Constrained<Length, NonNegative>>()
            .into_inner()
    }
}

/// Composite section of a shear web at its chordwise position.
#[derive(Debug, Clone, PartialEq)]
pub struct WebSection {
    pub location: WebLocation,
    pub section: CompositeSection,
}

/// Problems with a shape descriptor's coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("profile needs at least 3 points, found {0}")]
    TooFewPoints(usize),
    #[error("coordinate {0} is not finite")]
    NonFinite(usize),
}

/// Airfoil shape at one structural station, as chord-normalized `[x, y]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilProfile {
    coordinates: Vec<[f64; 2]>,
}

impl AirfoilProfile {
    /// Constructs a profile from ordered coordinates.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if fewer than three points are given or any
    /// coordinate is not finite.
    pub fn new(coordinates: Vec<[f64; 2]>) -> Result<Self, ProfileError> {
        if coordinates.len() < 3 {
            return Err(ProfileError::TooFewPoints(coordinates.len()));
        }
        if let Some(index) = coordinates
            .iter()
            .position(|[x, y]| !x.is_finite() || !y.is_finite())
        {
            return Err(ProfileError::NonFinite(index));
        }
        Ok(Self { coordinates })
    }

    #[must_use]
    pub fn coordinates(&self) -> &[[f64; 2]] {
        &self.coordinates
    }
}

/// Sections for every structural station.
///
/// The four sequences are parallel to the structural grid: index `i` of each
/// describes the same station.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BladeSections {
    pub upper: Vec<CompositeSection>,
    pub lower: Vec<CompositeSection>,
    pub webs: Vec<Vec<WebSection>>,
    pub profiles: Vec<AirfoilProfile>,
}

impl BladeSections {
    /// Returns the number of stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.upper.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }
}

/// Builds the composite sections and profile for every structural station.
///
/// Station `i` of the grid reads the one-based descriptors `layup_{i+1}` and
/// `shape_{i+1}` (see [`ReferenceFiles`]). Its web stacks are paired with
/// `webs[i]` in order.
///
/// # Errors
///
/// - [`ConfigurationError`](super::ConfigurationError) if `webs` is not parallel to the grid.
/// - [`MaterialNotFoundError`] if a layer names a material absent from `library`.
/// - [`FileFormatError`] if a descriptor cannot be read, its web stacks do not
///   match the station's webs, a thickness is invalid, or a profile is malformed.
pub fn assemble<R: DescriptorReader + ?Sized>(
    grid: &RadialGrid<Structural>,
    webs: &[Vec<WebLocation>],
    library: &MaterialLibrary,
    files: &ReferenceFiles,
    reader: &R,
) -> Result<BladeSections, BuildError> {
    grid.check_parallel("decoded webs", webs.len())?;

    let mut sections = BladeSections {
        upper: Vec::with_capacity(grid.len()),
        lower: Vec::with_capacity(grid.len()),
        webs: Vec::with_capacity(grid.len()),
        profiles: Vec::with_capacity(grid.len()),
    };

    for (station, locations) in webs.iter().enumerate() {
        let layup_path = files.layup(station);
        let layup = reader.layup(&layup_path)?;

        if layup.webs.len() != locations.len() {
            return Err(FileFormatError::new(
                layup_path,
                format!(
                    "{} web stacks for {} webs at structural station {station}",
                    layup.webs.len(),
                    locations.len()
                ),
            )
            .into());
        }

        let resolve = |stack: &[LayerSpec], surface| {
            resolve_section(stack, library, station, surface, &layup_path)
        };

        sections.upper.push(resolve(&layup.upper, Surface::Upper)?);
        sections.lower.push(resolve(&layup.lower, Surface::Lower)?);
        sections.webs.push(
            locations
                .iter()
                .zip(&layup.webs)
                .enumerate()
                .map(|(web, (&location, stack))| -> Result<_, BuildError> {
                    Ok(WebSection {
                        location,
                        section: resolve(stack, Surface::Web(web))?,
                    })
                })
                .collect::<Result<_, BuildError>>()?,
        );

        let shape_path = files.shape(station);
        let coordinates = reader.shape(&shape_path)?;
        let profile = AirfoilProfile::new(coordinates).map_err(|err| {
            FileFormatError::with_source(&shape_path, "invalid airfoil profile", err)
        })?;
        sections.profiles.push(profile);
    }

    Ok(sections)
}

/// Resolves a layer stack against the material library.
fn resolve_section(
    stack: &[LayerSpec],
    library: &MaterialLibrary,
    station: usize,
    surface: Surface,
    descriptor: &Path,
) -> Result<CompositeSection, BuildError> {
    let layers = stack
        .iter()
        .enumerate()
        .map(|(index, spec)| -> Result<Layer, BuildError> {
            let material = library
                .get(&spec.material)
                .cloned()
                .ok_or_else(|| MaterialNotFoundError {
                    name: spec.material.clone(),
                    station,
                    surface,
                })?;

            let thickness = NonNegative::new(spec.thickness).map_err(|err| {
                FileFormatError::with_source(
                    descriptor,
                    format!("{surface} layer {index} has an invalid thickness"),
                    err,
                )
            })?;

            Ok(Layer {
                material,
                thickness,
                orientation: spec.orientation,
            })
        })
        .collect::<Result<_, BuildError>>()?;

    Ok(CompositeSection { layers })
}
