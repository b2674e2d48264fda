//! Tabulated data for the NREL 5-MW reference turbine.
//!
//! Radial stations are fractions of the blade radius. Heights are meters,
//! chords are meters, and damage-equivalent moments are kN·m.

/// Catalog of airfoil polar files, indexed by [`AIRFOIL_INDICES`].
pub(super) const AIRFOIL_FILES: [&str; 8] = [
    "Cylinder1.dat",
    "Cylinder2.dat",
    "DU40_A17.dat",
    "DU35_A17.dat",
    "DU30_A17.dat",
    "DU25_A17.dat",
    "DU21_A17.dat",
    "NACA64_A17.dat",
];

/// Catalog entry used at each of the [`AIRFOIL_STATIONS`].
pub(super) const AIRFOIL_INDICES: [usize; 17] = [0, 0, 1, 2, 3, 3, 4, 5, 5, 6, 6, 7, 7, 7, 7, 7, 7];

pub(super) const AERO_IDX_CYLINDER: usize = 3;
pub(super) const STRUCTURAL_IDX_CYLINDER: usize = 14;

/// Tower height that normalizes [`TOWER_DAMAGE_HEIGHTS_M`].
pub(super) const TOWER_DAMAGE_REFERENCE_HEIGHT_M: f64 = 87.6;

#[rustfmt::skip]
pub(super) const AERO_GRID: [f64; 17] = [
    0.02222276, 0.06666667, 0.11111057, 0.16666667, 0.23333333, 0.3,
    0.36666667, 0.43333333, 0.5, 0.56666667, 0.63333333, 0.7,
    0.76666667, 0.83333333, 0.88888943, 0.93333333, 0.97777724,
];

#[rustfmt::skip]
pub(super) const STRUCTURAL_GRID: [f64; 38] = [
    0.0, 0.00492790457512, 0.00652942887106, 0.00813095316699, 0.00983257273154, 0.0114340970275,
    0.0130356213234, 0.02222276, 0.024446481932, 0.026048006228, 0.06666667, 0.089508406455,
    0.11111057, 0.146462614229, 0.16666667, 0.195309105255, 0.23333333, 0.276686558545,
    0.3, 0.333640766319, 0.36666667, 0.400404310407, 0.43333333, 0.5,
    0.520818918408, 0.56666667, 0.602196371696, 0.63333333, 0.667358391486, 0.683573824984,
    0.7, 0.73242031601, 0.76666667, 0.83333333, 0.88888943, 0.93333333,
    0.97777724, 1.0,
];

#[rustfmt::skip]
pub(super) const AIRFOIL_STATIONS: [f64; 17] = [
    0.02222276, 0.06666667, 0.11111057, 0.2, 0.23333333, 0.3,
    0.36666667, 0.43333333, 0.5, 0.56666667, 0.63333333, 0.64,
    0.7, 0.83333333, 0.88888943, 0.93333333, 0.97777724,
];

#[rustfmt::skip]
pub(super) const LEADING_EDGE_LOCATION: [f64; 38] = [
    0.5, 0.5, 0.5, 0.5, 0.5, 0.5,
    0.5, 0.5, 0.498, 0.497, 0.465, 0.447,
    0.43, 0.411, 0.4, 0.4, 0.4, 0.4,
    0.4, 0.4, 0.4, 0.4, 0.4, 0.4,
    0.4, 0.4, 0.4, 0.4, 0.4, 0.4,
    0.4, 0.4, 0.4, 0.4, 0.4, 0.4,
    0.4, 0.4,
];

// Chordwise shear web positions, `None` where a web is absent.
#[rustfmt::skip]
pub(super) const WEB_1: [Option<f64>; 38] = [
    None, None, None, None, None, None,
    None, Some(0.4114), Some(0.4102), Some(0.4094), Some(0.3876), Some(0.3755),
    Some(0.3639), Some(0.345), Some(0.3342), Some(0.3313), Some(0.3274), Some(0.323),
    Some(0.3206), Some(0.3172), Some(0.3138), Some(0.3104), Some(0.307), Some(0.3003),
    Some(0.2982), Some(0.2935), Some(0.2899), Some(0.2867), Some(0.2833), Some(0.2817),
    Some(0.2799), Some(0.2767), Some(0.2731), Some(0.2664), Some(0.2607), Some(0.2562),
    Some(0.1886), None,
];

#[rustfmt::skip]
pub(super) const WEB_2: [Option<f64>; 38] = [
    None, None, None, None, None, None,
    None, Some(0.5886), Some(0.5868), Some(0.5854), Some(0.5508), Some(0.5315),
    Some(0.5131), Some(0.4831), Some(0.4658), Some(0.4687), Some(0.4726), Some(0.477),
    Some(0.4794), Some(0.4828), Some(0.4862), Some(0.4896), Some(0.493), Some(0.4997),
    Some(0.5018), Some(0.5065), Some(0.5101), Some(0.5133), Some(0.5167), Some(0.5183),
    Some(0.5201), Some(0.5233), Some(0.5269), Some(0.5336), Some(0.5393), Some(0.5438),
    Some(0.6114), None,
];

#[rustfmt::skip]
pub(super) const WEB_3: [Option<f64>; 38] = [
    None, None, None, None, None, None,
    None, None, None, None, None, None,
    None, None, Some(1.0), Some(1.0), Some(1.0), Some(1.0),
    Some(1.0), Some(1.0), Some(1.0), Some(1.0), Some(1.0), Some(1.0),
    Some(1.0), Some(1.0), Some(1.0), Some(1.0), None, None,
    None, None, None, None, None, None,
    None, None,
];

#[rustfmt::skip]
pub(super) const REFERENCE_CHORD_M: [f64; 38] = [
    3.2612, 3.3100915356, 3.32587052924, 3.34159388653, 3.35823798667, 3.37384375335,
    3.38939112914, 3.4774055542, 3.49839685, 3.51343645709, 3.87017220335, 4.04645623801,
    4.19408216643, 4.47641008477, 4.55844487985, 4.57383098262, 4.57285771934, 4.51914315648,
    4.47677655262, 4.40075650022, 4.31069949379, 4.20483735936, 4.08985563932, 3.82931757126,
    3.74220276467, 3.54415796922, 3.38732428502, 3.24931446473, 3.23421422609, 3.22701537997,
    3.21972125648, 3.08979310611, 2.95152261813, 2.330753331, 2.05553464181, 1.82577817774,
    1.5860853279, 1.4621,
];

#[rustfmt::skip]
pub(super) const BLADE_DAMAGE_STATIONS: [f64; 18] = [
    0.0, 0.022, 0.067, 0.111, 0.167, 0.233,
    0.3, 0.367, 0.433, 0.5, 0.567, 0.633,
    0.7, 0.767, 0.833, 0.889, 0.933, 0.978,
];

#[rustfmt::skip]
pub(super) const MXB_CLASS_I_KNM: [f64; 18] = [
    2374.3, 2083.4, 1810.8, 1570.5, 1310.4, 1048.8,
    823.67, 634.07, 477.27, 348.04, 244.58, 163.39,
    102.52, 57.842, 27.349, 11.262, 3.8549, 0.44738,
];

#[rustfmt::skip]
pub(super) const MYB_CLASS_I_KNM: [f64; 18] = [
    2773.2, 2815.5, 2600.4, 2393.3, 2137.1, 1845.9,
    1558.2, 1289.6, 1042.7, 820.15, 624.49, 452.29,
    306.58, 187.46, 96.475, 42.677, 15.409, 1.8426,
];

// Class III blade tables are tabulated independently of Class I.
#[rustfmt::skip]
pub(super) const MXB_CLASS_III_KNM: [f64; 18] = [
    2361.7, 2075.1, 1805.1, 1563.1, 1299.4, 1038.8,
    813.84, 624.92, 469.16, 340.78, 239.16, 159.16,
    99.752, 56.139, 26.492, 10.886, 3.721, 0.43206,
];

#[rustfmt::skip]
pub(super) const MYB_CLASS_III_KNM: [f64; 18] = [
    2549.2, 2626.1, 2426.5, 2230.8, 1988.2, 1718.4,
    1443.8, 1192.5, 962.51, 755.64, 573.32, 414.35,
    280.36, 171.06, 87.732, 38.678, 13.942, 1.66,
];

#[rustfmt::skip]
pub(super) const TOWER_DAMAGE_HEIGHTS_M: [f64; 35] = [
    0.0, 1.327, 3.982, 6.636, 9.291, 11.945,
    14.6, 17.255, 19.909, 22.564, 25.218, 27.873,
    30.527, 33.182, 35.836, 38.491, 41.145, 43.8,
    46.455, 49.109, 51.764, 54.418, 57.073, 59.727,
    62.382, 65.036, 67.691, 70.345, 73.0, 75.655,
    78.309, 80.964, 83.618, 86.273, 87.6,
];

#[rustfmt::skip]
pub(super) const TOWER_CLASS_I_KNM: [f64; 35] = [
    8294.0, 8151.8, 7883.1, 7609.9, 7335.9, 7057.7,
    6782.1, 6511.9, 6239.1, 5970.7, 5707.0, 5450.0,
    5201.5, 4958.8, 4720.2, 4488.4, 4257.7, 4024.6,
    3794.2, 3566.4, 3340.6, 3118.4, 2897.7, 2681.1,
    2471.9, 2266.3, 2067.3, 1876.9, 1701.7, 1547.9,
    1420.7, 1330.4, 1278.0, 1267.3, 1276.1,
];

// Planform control points. Chord is defined at the hub and then at linearly
// spaced locations from the max-chord station to the tip; twist starts at the
// first non-cylindrical aerodynamic station.
pub(super) const CHORD_CONTROL_M: [f64; 4] = [3.2612, 4.5709, 3.3178, 1.4621];
pub(super) const TWIST_CONTROL_DEG: [f64; 4] = [13.2783, 7.46036, 2.89317, -0.0878099];
pub(super) const PRECURVE_CONTROL_M: [f64; 3] = [0.0, 0.0, 0.0];
pub(super) const SPAR_CAP_THICKNESS_M: [f64; 5] = [0.05, 0.047754, 0.045376, 0.031085, 0.0061398];
pub(super) const TRAILING_EDGE_THICKNESS_M: [f64; 5] = [0.1, 0.09569, 0.06569, 0.02569, 0.00569];
