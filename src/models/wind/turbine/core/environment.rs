//! Site atmosphere and turbulence.

use uom::si::{
    acceleration::meter_per_second_squared,
    dynamic_viscosity::pascal_second,
    f64::{Acceleration, DynamicViscosity, Length, MassDensity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
};

/// IEC turbulence category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurbulenceClass {
    A,
    B,
    C,
}

/// Ambient conditions shared by every sub-model.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub air_density: MassDensity,
    pub air_viscosity: DynamicViscosity,

    /// Power-law exponent of the wind shear profile.
    pub shear_exponent: f64,

    pub hub_height: Length,
    pub turbulence_class: TurbulenceClass,

    /// Height of the reference wind speed used in the IEC speed distribution.
    pub cdf_reference_height: Length,

    pub gravity: Acceleration,
}

impl Environment {
    pub(super) fn reference() -> Self {
        Self {
            air_density: MassDensity::new::<kilogram_per_cubic_meter>(1.225),
            air_viscosity: DynamicViscosity::new::<pascal_second>(1.81206e-5),
            shear_exponent: 0.2,
            hub_height: Length::new::<meter>(90.0),
            turbulence_class: TurbulenceClass::B,
            cdf_reference_height: Length::new::<meter>(90.0),
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
        }
    }
}
