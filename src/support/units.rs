//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (lengths, moduli, loads).
//! This module names quantities that [`uom`] provides under a different label.
//!
//! ## Bending moments
//!
//! [`uom`] has no dedicated bending-moment quantity. A bending moment shares
//! the N·m dimension of a torque, so [`BendingMoment`] aliases
//! [`Torque`](uom::si::f64::Torque):
//!
//! ```
//! use twine_wind::support::units::BendingMoment;
//! use uom::si::torque::newton_meter;
//!
//! let root = BendingMoment::new::<newton_meter>(2.3743e6);
//! assert_eq!(root.get::<newton_meter>(), 2.3743e6);
//! ```

/// Bending moment, N·m in SI.
pub type BendingMoment = uom::si::f64::Torque;

/// Builds bending moments from values given in kN·m.
///
/// Reference load tables are tabulated in kN·m.
#[must_use]
pub fn kilonewton_meters<const N: usize>(values: [f64; N]) -> Vec<BendingMoment> {
    values
        .iter()
        .map(|&kn_m| BendingMoment::new::<uom::si::torque::newton_meter>(kn_m * 1e3))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::torque::newton_meter;

    #[test]
    fn converts_kilonewton_meters() {
        let moments = kilonewton_meters([8294.0, 0.44738]);
        assert_eq!(moments.len(), 2);
        assert_relative_eq!(moments[0].get::<newton_meter>(), 8.294e6, max_relative = 1e-12);
        assert_relative_eq!(moments[1].get::<newton_meter>(), 447.38, max_relative = 1e-12);
    }
}
