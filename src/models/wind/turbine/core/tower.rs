//! Tower geometry, foundation, and the per-load-case tower sub-models.

use uom::{
    ConstZero,
    si::{
        acceleration::meter_per_second_squared,
        f64::{Acceleration, Angle, Length, MassDensity, Pressure, Time, Velocity},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        pressure::{gigapascal, megapascal},
        time::{second, year},
    },
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{
    ConfigurationError, FatigueLoadTable, IecClass, LoadCases, Site, fatigue::tower_table,
    grid::unit_fractions,
};

/// Monopile diameter for offshore sites.
const MONOPILE_DIAMETER_M: f64 = 6.0;

/// Monopile diameter-to-wall-thickness ratio.
const MONOPILE_D_TO_T: f64 = 80.0;

const MONOPILE_ELEMENTS: usize = 5;

/// Significant wave height of the design sea state: 8 m scaled by 1.86.
const SIGNIFICANT_WAVE_HEIGHT_M: f64 = 8.0 * 1.86;

const WAVE_PERIOD_S: f64 = 10.0;

/// Which side of the tower the rotor faces the wind from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorPosition {
    Upwind,
    Downwind,
}

/// Tower sections lofted linearly between unit-height stations.
#[derive(Debug, Clone, PartialEq)]
pub struct TowerGeometry {
    stations: Vec<f64>,
    shell_thickness: Vec<Length>,
    elements: Vec<usize>,
    buckling_length: Vec<Length>,
    rotor_position: RotorPosition,
}

impl TowerGeometry {
    /// Validates a tower layout.
    ///
    /// `elements` counts finite elements between consecutive stations, so it
    /// has one entry fewer than `stations`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the stations are not strictly
    /// increasing fractions in `[0, 1]`, or any other sequence has the wrong
    /// length.
    pub fn new(
        stations: Vec<f64>,
        shell_thickness: Vec<Length>,
        elements: Vec<usize>,
        buckling_length: Vec<Length>,
        rotor_position: RotorPosition,
    ) -> Result<Self, ConfigurationError> {
        let stations = unit_fractions("tower", stations)?;

        ConfigurationError::check_len("shell thicknesses", stations.len(), shell_thickness.len())?;
        ConfigurationError::check_len("tower elements", stations.len() - 1, elements.len())?;
        ConfigurationError::check_len("buckling lengths", stations.len(), buckling_length.len())?;

        Ok(Self {
            stations,
            shell_thickness,
            elements,
            buckling_length,
            rotor_position,
        })
    }

    #[must_use]
    pub fn stations(&self) -> &[f64] {
        &self.stations
    }

    #[must_use]
    pub fn shell_thickness(&self) -> &[Length] {
        &self.shell_thickness
    }

    #[must_use]
    pub fn elements(&self) -> &[usize] {
        &self.elements
    }

    #[must_use]
    pub fn buckling_length(&self) -> &[Length] {
        &self.buckling_length
    }

    #[must_use]
    pub fn rotor_position(&self) -> RotorPosition {
        self.rotor_position
    }
}

/// Power-law wind profile parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerWind {
    pub shear_exponent: f64,

    /// Bottom of the profile (ground or sea level).
    pub z0: Length,
}

/// Soil stiffness model, one flag per degree of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TowerSoil {
    pub rigid: [bool; 6],
}

impl TowerSoil {
    #[must_use]
    pub fn rigid() -> Self {
        Self { rigid: [true; 6] }
    }
}

/// Structural solver that evaluates a tower load case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TowerSolver {
    /// Beam finite elements via pBEAM.
    PBeam,
}

/// Linear wave theory parameters for one load case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearWaves {
    pub significant_height: Length,
    pub period: Time,

    /// Sea surface elevation.
    pub z_surface: Length,

    /// Sea floor elevation, negative below the surface.
    pub z_floor: Length,

    pub current_speed: Velocity,
    pub gravity: Acceleration,
    pub heading: Angle,
}

impl LinearWaves {
    fn design_sea_state(sea_depth: Length) -> Self {
        Self {
            significant_height: Length::new::<meter>(SIGNIFICANT_WAVE_HEIGHT_M),
            period: Time::new::<second>(WAVE_PERIOD_S),
            z_surface: Length::ZERO,
            z_floor: -sea_depth,
            current_speed: Velocity::ZERO,
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            heading: Angle::ZERO,
        }
    }
}

/// Offshore monopile below the tower base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monopile {
    pub height: Constrained<Length, StrictlyPositive>,
    pub diameter: Constrained<Length, StrictlyPositive>,
    pub wall_thickness: Constrained<Length, StrictlyPositive>,
    pub elements: usize,
}

impl Monopile {
    /// Sizes a monopile spanning the water column.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidParameter`] if a dimension is not
    /// strictly positive.
    pub fn for_depth(sea_depth: Length) -> Result<Self, ConfigurationError> {
        let positive = |what, value| {
            StrictlyPositive::new(value).map_err(ConfigurationError::parameter(what))
        };

        Ok(Self {
            height: positive("monopile height", sea_depth)?,
            diameter: positive("monopile diameter", Length::new::<meter>(MONOPILE_DIAMETER_M))?,
            wall_thickness: positive(
                "monopile wall thickness",
                Length::new::<meter>(MONOPILE_DIAMETER_M / MONOPILE_D_TO_T),
            )?,
            elements: MONOPILE_ELEMENTS,
        })
    }
}

/// Foundation of the tower, determined by the site.
#[derive(Debug, Clone, PartialEq)]
pub enum Foundation {
    Onshore {
        soil: TowerSoil,
    },
    Offshore {
        soil: TowerSoil,
        monopile: Monopile,
        waves: LoadCases<LinearWaves>,
    },
}

impl Foundation {
    /// Builds the foundation for a site.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the monopile cannot be sized.
    pub fn for_site(site: &Site) -> Result<Self, ConfigurationError> {
        let soil = TowerSoil::rigid();

        Ok(match site {
            Site::Onshore => Self::Onshore { soil },
            Site::Offshore { sea_depth } => {
                let depth = sea_depth.into_inner();
                Self::Offshore {
                    soil,
                    monopile: Monopile::for_depth(depth)?,
                    waves: LoadCases::duplicate(LinearWaves::design_sea_state(depth)),
                }
            }
        })
    }

    #[must_use]
    pub fn soil(&self) -> &TowerSoil {
        match self {
            Self::Onshore { soil } | Self::Offshore { soil, .. } => soil,
        }
    }

    #[must_use]
    pub fn monopile(&self) -> Option<&Monopile> {
        match self {
            Self::Onshore { .. } => None,
            Self::Offshore { monopile, .. } => Some(monopile),
        }
    }

    #[must_use]
    pub fn waves(&self) -> Option<&LoadCases<LinearWaves>> {
        match self {
            Self::Onshore { .. } => None,
            Self::Offshore { waves, .. } => Some(waves),
        }
    }
}

/// Partial safety factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyFactors {
    pub loads: f64,
    pub materials: f64,

    /// Consequence of failure.
    pub consequence: f64,

    pub buckling: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TowerFatigue {
    pub table: FatigueLoadTable,
    pub safety_factor: f64,
    pub life: Time,

    /// Slope of the S-N curve.
    pub sn_slope: f64,

    /// Detail category stress.
    pub detail_category: Pressure,
}

/// Optimization constraints read by the tower sizing model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerConstraints {
    pub min_diameter_to_thickness: f64,

    /// Minimum taper ratio from tower top to tower bottom.
    pub min_taper: f64,
}

/// Isotropic shell material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerMaterial {
    pub yield_stress: Pressure,
    pub density: MassDensity,
    pub youngs_modulus: Pressure,
    pub shear_modulus: Pressure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    pub geometry: TowerGeometry,
    pub wind: LoadCases<PowerWind>,
    pub foundation: Foundation,
    pub structure: LoadCases<TowerSolver>,
    pub safety_factors: SafetyFactors,
    pub fatigue: TowerFatigue,
    pub constraints: TowerConstraints,
    pub material: TowerMaterial,
}

/// Builds the reference tower for a site and class.
pub(super) fn build(site: &Site, class: IecClass) -> Result<Tower, ConfigurationError> {
    let m = Length::new::<meter>;

    let geometry = TowerGeometry::new(
        vec![0.0, 0.5, 1.0],
        vec![m(0.027 * 1.3), m(0.023 * 1.3), m(0.019 * 1.3)],
        vec![10, 10],
        vec![m(30.0); 3],
        RotorPosition::Upwind,
    )?;

    let safety_factors = SafetyFactors {
        loads: 1.35,
        materials: 1.3,
        consequence: 1.0,
        buckling: 1.1,
    };

    Ok(Tower {
        geometry,
        wind: LoadCases::duplicate(PowerWind {
            shear_exponent: 0.2,
            z0: Length::ZERO,
        }),
        foundation: Foundation::for_site(site)?,
        structure: LoadCases::duplicate(TowerSolver::PBeam),
        safety_factors,
        fatigue: TowerFatigue {
            table: tower_table(class)?,
            safety_factor: safety_factors.loads
                * safety_factors.materials
                * safety_factors.consequence,
            life: Time::new::<year>(20.0),
            sn_slope: 4.0,
            detail_category: Pressure::new::<megapascal>(80.0),
        },
        constraints: TowerConstraints {
            min_diameter_to_thickness: 120.0,
            min_taper: 0.4,
        },
        material: TowerMaterial {
            yield_stress: Pressure::new::<megapascal>(450.0),
            density: MassDensity::new::<kilogram_per_cubic_meter>(8500.0),
            youngs_modulus: Pressure::new::<gigapascal>(210.0),
            shear_modulus: Pressure::new::<gigapascal>(80.8),
        },
    })
}
