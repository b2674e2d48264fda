//! Damage-equivalent moment tables.

use crate::support::units::{BendingMoment, kilonewton_meters};

use super::{
    ConfigurationError, IecClass,
    grid::unit_fractions,
    reference::{
        BLADE_DAMAGE_STATIONS, MXB_CLASS_I_KNM, MXB_CLASS_III_KNM, MYB_CLASS_I_KNM,
        MYB_CLASS_III_KNM, TOWER_CLASS_I_KNM, TOWER_DAMAGE_HEIGHTS_M,
        TOWER_DAMAGE_REFERENCE_HEIGHT_M,
    },
};

/// Scale applied to the Class I tower table to obtain Class III loads.
pub const CLASS_III_TOWER_CALIBRATION: f64 = 1.028713178;

/// Damage-equivalent moments along one load axis.
///
/// Stations are strictly increasing unit fractions (blade radius or tower
/// height), each paired with one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct FatigueLoadTable {
    stations: Vec<f64>,
    moments: Vec<BendingMoment>,
}

impl FatigueLoadTable {
    /// Pairs stations with moments.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the sequences differ in length or
    /// the stations are not strictly increasing fractions in `[0, 1]`.
    pub fn new(
        stations: Vec<f64>,
        moments: Vec<BendingMoment>,
    ) -> Result<Self, ConfigurationError> {
        ConfigurationError::check_len(
            "damage-equivalent moments",
            stations.len(),
            moments.len(),
        )?;
        let stations = unit_fractions("fatigue", stations)?;
        Ok(Self { stations, moments })
    }

    #[must_use]
    pub fn stations(&self) -> &[f64] {
        &self.stations
    }

    #[must_use]
    pub fn moments(&self) -> &[BendingMoment] {
        &self.moments
    }

    /// Iterates over `(station, moment)` pairs in station order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, BendingMoment)> + '_ {
        self.stations.iter().copied().zip(self.moments.iter().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Returns a copy with every moment multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            stations: self.stations.clone(),
            moments: self.moments.iter().map(|&m| m * factor).collect(),
        }
    }
}

/// Blade-root tables about the blade x and y axes.
#[derive(Debug, Clone, PartialEq)]
pub struct BladeRootTables {
    pub mxb: FatigueLoadTable,
    pub myb: FatigueLoadTable,
}

/// Returns the blade-root tables for a class.
///
/// Class III values are tabulated independently, not scaled from Class I.
pub(super) fn blade_root_tables(class: IecClass) -> Result<BladeRootTables, ConfigurationError> {
    let (mxb, myb) = match class {
        IecClass::I => (MXB_CLASS_I_KNM, MYB_CLASS_I_KNM),
        IecClass::III => (MXB_CLASS_III_KNM, MYB_CLASS_III_KNM),
    };

    Ok(BladeRootTables {
        mxb: FatigueLoadTable::new(BLADE_DAMAGE_STATIONS.to_vec(), kilonewton_meters(mxb))?,
        myb: FatigueLoadTable::new(BLADE_DAMAGE_STATIONS.to_vec(), kilonewton_meters(myb))?,
    })
}

/// Returns the tower table for a class.
///
/// Stations are the tabulated heights over the reference tower height.
pub(super) fn tower_table(class: IecClass) -> Result<FatigueLoadTable, ConfigurationError> {
    let stations = TOWER_DAMAGE_HEIGHTS_M
        .iter()
        .map(|z| z / TOWER_DAMAGE_REFERENCE_HEIGHT_M)
        .collect();
    let class_one = FatigueLoadTable::new(stations, kilonewton_meters(TOWER_CLASS_I_KNM))?;

    Ok(match class {
        IecClass::I => class_one,
        IecClass::III => class_one.scaled(CLASS_III_TOWER_CALIBRATION),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::torque::{kilonewton_meter, newton_meter};

    #[test]
    fn class_three_tower_is_scaled_class_one() {
        let class_one = tower_table(IecClass::I).unwrap();
        let class_three = tower_table(IecClass::III).unwrap();

        assert_relative_eq!(
            class_one.moments()[0].get::<kilonewton_meter>(),
            8294.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            class_three.moments()[0].get::<newton_meter>(),
            1.028713178 * 8294.0e3,
            max_relative = 1e-6
        );
        assert_eq!(class_one.stations(), class_three.stations());

        for ((_, one), (_, three)) in class_one.iter().zip(class_three.iter()) {
            assert_relative_eq!(
                three.get::<newton_meter>(),
                one.get::<newton_meter>() * CLASS_III_TOWER_CALIBRATION,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn tower_stations_span_unit_height() {
        let table = tower_table(IecClass::I).unwrap();

        assert_eq!(table.len(), 35);
        assert_eq!(table.stations()[0], 0.0);
        assert_eq!(table.stations()[34], 1.0);
        assert_relative_eq!(table.stations()[1], 1.327 / 87.6, max_relative = 1e-12);
    }

    #[test]
    fn blade_tables_by_class() {
        let class_one = blade_root_tables(IecClass::I).unwrap();
        let class_three = blade_root_tables(IecClass::III).unwrap();

        assert_eq!(class_one.mxb.len(), 18);
        assert_eq!(class_one.myb.len(), 18);
        assert_relative_eq!(
            class_one.mxb.moments()[0].get::<kilonewton_meter>(),
            2374.3,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            class_three.myb.moments()[0].get::<kilonewton_meter>(),
            2549.2,
            max_relative = 1e-12
        );

        // Independent values: the Class III/Class I ratio varies by station.
        let ratio = |i: usize| {
            class_three.mxb.moments()[i].get::<newton_meter>()
                / class_one.mxb.moments()[i].get::<newton_meter>()
        };
        assert!((ratio(0) - ratio(17)).abs() > 1e-6);
    }

    #[test]
    fn rejects_mismatched_table() {
        let err = FatigueLoadTable::new(vec![0.0, 0.5], kilonewton_meters([1.0])).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::LengthMismatch {
                what: "damage-equivalent moments",
                expected: 2,
                found: 1,
            }
        );

        assert!(matches!(
            FatigueLoadTable::new(vec![0.5, 0.2], kilonewton_meters([1.0, 2.0])),
            Err(ConfigurationError::InvalidGrid { grid: "fatigue", .. })
        ));
    }
}
