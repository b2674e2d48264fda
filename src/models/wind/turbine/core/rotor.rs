//! Blade planform, control schedule, structure, and fatigue.

use std::sync::Arc;

use uom::si::{
    angle::degree,
    angular_velocity::revolution_per_minute,
    f64::{Angle, AngularVelocity, Length, Power, Velocity},
    length::meter,
    power::megawatt,
    velocity::meter_per_second,
};

use super::{
    Aerodynamic, AirfoilCatalog, AirfoilStation, BladeRootTables, BladeSections, BuildError,
    ConfigurationError, IecClass, MaterialLibrary, RadialGrid, ReferenceFiles, Structural,
    WebLocation, assemble, decode_webs,
    fatigue::blade_root_tables,
    grid::unit_fractions,
    map_airfoils,
    reference::{
        AERO_GRID, AERO_IDX_CYLINDER, AIRFOIL_INDICES, AIRFOIL_STATIONS, CHORD_CONTROL_M,
        LEADING_EDGE_LOCATION, PRECURVE_CONTROL_M, REFERENCE_CHORD_M, SPAR_CAP_THICKNESS_M,
        STRUCTURAL_GRID, STRUCTURAL_IDX_CYLINDER, TRAILING_EDGE_THICKNESS_M, TWIST_CONTROL_DEG,
        WEB_1, WEB_2, WEB_3,
    },
    source::DescriptorReader,
};

/// PreComp sector holding the spar cap strain gauges.
const SPAR_STRAIN_SECTOR: usize = 2;

/// PreComp sector holding the trailing-edge strain gauges.
const TRAILING_EDGE_STRAIN_SECTOR: usize = 3;

/// Drivetrain layouts recognized by the aerodynamic and cost models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrivetrainType {
    Geared,
    SingleStage,
    MultiDrive,
    PmDirectDrive,
}

/// Parameterized blade planform.
///
/// Chord and twist are control points; the aerodynamic solver splines them
/// over its grid.
#[derive(Debug, Clone, PartialEq)]
pub struct BladeGeometry {
    /// Radial fraction of maximum chord.
    pub r_max_chord: f64,

    pub chord: Vec<Length>,
    pub twist: Vec<Angle>,
    pub precurve: Vec<Length>,

    /// Precurve added by deflection under load.
    pub precurve_adjustment: Vec<Length>,

    pub spar_cap_thickness: Vec<Length>,
    pub trailing_edge_thickness: Vec<Length>,

    /// Length before curvature.
    pub blade_length: Length,
    pub blade_length_adjustment: Length,

    pub precone: Angle,
    pub tilt: Angle,

    /// Yaw error.
    pub yaw: Angle,

    pub blade_count: u32,
}

/// Operating schedule consumed by the aerodynamic solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub cut_in: Velocity,
    pub cut_out: Velocity,
    pub rated_power: Power,
    pub min_rotor_speed: AngularVelocity,
    pub max_rotor_speed: AngularVelocity,

    /// Region 2 tip-speed ratio.
    pub tip_speed_ratio: f64,

    /// Region 2 pitch, and region 3 for fixed-pitch machines.
    pub pitch: Angle,

    /// Worst-case pitch at the survival wind condition.
    pub extreme_pitch: Angle,

    /// Worst-case azimuth at the survival wind condition.
    pub extreme_azimuth: Angle,

    /// Fraction of rated speed whose deflection represents the power curve.
    pub power_curve_speed_factor: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Sectors of the rotor face used for thrust and power.
    pub sectors: usize,
    pub coarse_power_curve_points: usize,
    pub spline_power_curve_points: usize,

    /// Availability and other losses.
    pub aep_loss_factor: f64,

    pub drivetrain: DrivetrainType,
    pub natural_frequencies: usize,
    pub tip_deflection_amplification: f64,
}

/// Composite blade structure on the structural grid.
///
/// Every per-station field is parallel to the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct BladeStructure {
    pub materials: Arc<MaterialLibrary>,
    pub sections: BladeSections,

    /// Leading-edge position from the pitch axis, as a fraction of chord.
    pub leading_edge: Vec<f64>,

    pub spar_strain_sector: Vec<usize>,
    pub trailing_edge_strain_sector: Vec<usize>,

    /// Chord of the section the layup thicknesses are tabulated for.
    pub reference_chord: Vec<Length>,
}

impl BladeStructure {
    /// Bundles per-station data after checking it against the grid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::LengthMismatch`] if any per-station
    /// sequence differs in length from `grid`.
    pub fn new(
        grid: &RadialGrid<Structural>,
        materials: Arc<MaterialLibrary>,
        sections: BladeSections,
        leading_edge: Vec<f64>,
        spar_strain_sector: Vec<usize>,
        trailing_edge_strain_sector: Vec<usize>,
        reference_chord: Vec<Length>,
    ) -> Result<Self, ConfigurationError> {
        grid.check_parallel("composite sections", sections.len())?;
        grid.check_parallel("leading-edge locations", leading_edge.len())?;
        grid.check_parallel("spar strain sectors", spar_strain_sector.len())?;
        grid.check_parallel(
            "trailing-edge strain sectors",
            trailing_edge_strain_sector.len(),
        )?;
        grid.check_parallel("reference chords", reference_chord.len())?;

        Ok(Self {
            materials,
            sections,
            leading_edge,
            spar_strain_sector,
            trailing_edge_strain_sector,
            reference_chord,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BladeFatigue {
    pub tables: BladeRootTables,
    pub ultimate_spar_strain: f64,
    pub ultimate_trailing_edge_strain: f64,
    pub safety_factor: f64,

    /// Slope of the S-N curve.
    pub sn_slope: f64,

    /// Cycles over the design life.
    pub cycles: f64,
}

/// Everything downstream solvers read about the rotor.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotor {
    /// Class used for rotor loads.
    pub turbine_class: IecClass,

    pub aero_grid: RadialGrid<Aerodynamic>,
    pub structural_grid: RadialGrid<Structural>,

    /// Hub radius as a fraction of rotor radius.
    pub hub_fraction: f64,

    pub geometry: BladeGeometry,
    pub airfoils: Vec<AirfoilStation>,
    pub control: Control,
    pub analysis: AnalysisOptions,
    pub structure: BladeStructure,
    pub fatigue: BladeFatigue,
}

/// Maps airfoil stations to catalog files, one per aerodynamic grid station.
fn airfoils_on_grid(
    grid: &RadialGrid<Aerodynamic>,
    stations: &[f64],
    indices: &[usize],
    catalog: &AirfoilCatalog,
) -> Result<Vec<AirfoilStation>, ConfigurationError> {
    let airfoils = map_airfoils(stations, indices, catalog)?;
    grid.check_parallel("airfoil stations", airfoils.len())?;
    Ok(airfoils)
}

/// Builds the reference rotor for a class.
pub(super) fn build<R: DescriptorReader + ?Sized>(
    class: IecClass,
    materials: &Arc<MaterialLibrary>,
    files: &ReferenceFiles,
    reader: &R,
) -> Result<Rotor, BuildError> {
    let aero_grid = RadialGrid::<Aerodynamic>::new(AERO_GRID.to_vec(), AERO_IDX_CYLINDER)?;
    let structural_grid =
        RadialGrid::<Structural>::new(STRUCTURAL_GRID.to_vec(), STRUCTURAL_IDX_CYLINDER)?;

    let catalog = AirfoilCatalog::new(files.airfoils());
    let airfoil_stations = unit_fractions("airfoil", AIRFOIL_STATIONS.to_vec())?;
    let airfoils = airfoils_on_grid(&aero_grid, &airfoil_stations, &AIRFOIL_INDICES, &catalog)?;

    let webs: Vec<Vec<WebLocation>> =
        decode_webs(structural_grid.len(), &[&WEB_1, &WEB_2, &WEB_3])?;
    let sections = assemble(&structural_grid, &webs, materials, files, reader)?;

    let stations = structural_grid.len();
    let structure = BladeStructure::new(
        &structural_grid,
        Arc::clone(materials),
        sections,
        LEADING_EDGE_LOCATION.to_vec(),
        vec![SPAR_STRAIN_SECTOR; stations],
        vec![TRAILING_EDGE_STRAIN_SECTOR; stations],
        meters(&REFERENCE_CHORD_M),
    )?;

    Ok(Rotor {
        turbine_class: class,
        aero_grid,
        structural_grid,
        hub_fraction: 0.025,
        geometry: reference_geometry(),
        airfoils,
        control: reference_control(),
        analysis: AnalysisOptions {
            sectors: 4,
            coarse_power_curve_points: 20,
            spline_power_curve_points: 200,
            aep_loss_factor: 1.0,
            drivetrain: DrivetrainType::Geared,
            natural_frequencies: 5,
            tip_deflection_amplification: 1.35,
        },
        structure,
        fatigue: BladeFatigue {
            tables: blade_root_tables(class)?,
            ultimate_spar_strain: 1.0e-2,
            // Doubled for the damage calculation only.
            ultimate_trailing_edge_strain: 2.0 * 2500.0e-6,
            safety_factor: 1.35 * 1.3 * 1.0,
            sn_slope: 10.0,
            cycles: 365.0 * 24.0 * 3600.0 * 20.0,
        },
    })
}

fn meters(values: &[f64]) -> Vec<Length> {
    values.iter().map(|&x| Length::new::<meter>(x)).collect()
}

fn reference_geometry() -> BladeGeometry {
    BladeGeometry {
        r_max_chord: 0.23577,
        chord: meters(&CHORD_CONTROL_M),
        twist: TWIST_CONTROL_DEG
            .iter()
            .map(|&deg| Angle::new::<degree>(deg))
            .collect(),
        precurve: meters(&PRECURVE_CONTROL_M),
        precurve_adjustment: meters(&PRECURVE_CONTROL_M),
        spar_cap_thickness: meters(&SPAR_CAP_THICKNESS_M),
        trailing_edge_thickness: meters(&TRAILING_EDGE_THICKNESS_M),
        blade_length: Length::new::<meter>(61.5),
        blade_length_adjustment: Length::new::<meter>(0.0),
        precone: Angle::new::<degree>(2.5),
        tilt: Angle::new::<degree>(5.0),
        yaw: Angle::new::<degree>(0.0),
        blade_count: 3,
    }
}

fn reference_control() -> Control {
    Control {
        cut_in: Velocity::new::<meter_per_second>(3.0),
        cut_out: Velocity::new::<meter_per_second>(25.0),
        rated_power: Power::new::<megawatt>(5.0),
        min_rotor_speed: AngularVelocity::new::<revolution_per_minute>(0.0),
        max_rotor_speed: AngularVelocity::new::<revolution_per_minute>(12.0),
        tip_speed_ratio: 7.55,
        pitch: Angle::new::<degree>(0.0),
        extreme_pitch: Angle::new::<degree>(0.0),
        extreme_azimuth: Angle::new::<degree>(0.0),
        power_curve_speed_factor: 0.7,
    }
}
