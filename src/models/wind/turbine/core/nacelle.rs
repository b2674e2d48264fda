//! Drivetrain configuration passed through to the nacelle sizing models.

use uom::si::{
    f64::{Force, Length, Mass},
    force::newton,
    length::meter,
    mass::kilogram,
    torque::newton_meter,
};

use crate::support::units::BendingMoment;

use super::{ConfigurationError, DrivetrainType};

/// Kind of gearbox stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GearStageKind {
    Epicyclic,
    Parallel,
}

impl TryFrom<char> for GearStageKind {
    type Error = ConfigurationError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'e' => Ok(Self::Epicyclic),
            'p' => Ok(Self::Parallel),
            other => Err(ConfigurationError::UnknownGearStage(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GearStage {
    pub kind: GearStageKind,
    pub planets: u32,
}

/// Gearbox stages from input shaft to output shaft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gearbox {
    stages: Vec<GearStage>,
}

impl Gearbox {
    /// Parses a stage code string such as `"eep"` with one planet count per stage.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownGearStage`] for a letter other than
    /// `e` or `p`, and [`ConfigurationError::LengthMismatch`] if `planets` does
    /// not have one entry per stage.
    pub fn parse(configuration: &str, planets: &[u32]) -> Result<Self, ConfigurationError> {
        let kinds = configuration
            .chars()
            .map(GearStageKind::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        ConfigurationError::check_len("planet counts", kinds.len(), planets.len())?;

        Ok(Self {
            stages: kinds
                .into_iter()
                .zip(planets)
                .map(|(kind, &planets)| GearStage { kind, planets })
                .collect(),
        })
    }

    #[must_use]
    pub fn stages(&self) -> &[GearStage] {
        &self.stages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageRatios {
    Optimal,
    Empirical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaftType {
    Normal,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BearingType {
    Carb,
    Trb,
    Srb,
}

/// How the drivetrain sizing checks fatigue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FatigueCheck {
    None,
    Parameterized,
    KnownLoads,
}

/// Scalar drivetrain configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Drivetrain {
    /// Main shaft length downwind of the main bearing.
    pub main_shaft_length: Length,

    /// Main shaft length in the low-speed shaft.
    pub low_speed_shaft_length: Length,

    /// Bedplate I-beam heights.
    pub bedplate_front_height: Length,
    pub bedplate_rear_height: Length,

    pub design: DrivetrainType,
    pub crane: bool,
    pub bevel_stage: bool,
    pub gearbox: Gearbox,
    pub stage_ratios: StageRatios,
    pub shaft_type: ShaftType,

    /// Inner to outer low-speed shaft diameter; zero for a solid shaft.
    pub shaft_ratio: f64,

    pub carrier_mass: Mass,
    pub main_bearings: [BearingType; 2],
    pub yaw_motors: u32,
    pub uptower_transformer: bool,
    pub flange_length: Length,
    pub gearbox_cm: Length,
    pub hss_length: Length,
    pub overhang: Length,
    pub fatigue_check: FatigueCheck,
    pub efficiency: f64,

    /// Rotor moments at the hub about x, y, z.
    pub hub_moments: [BendingMoment; 3],

    /// Rotor forces at the hub along x, y, z.
    pub hub_forces: [Force; 3],
}

impl Drivetrain {
    pub(super) fn reference() -> Result<Self, ConfigurationError> {
        let m = Length::new::<meter>;
        let moment = BendingMoment::new::<newton_meter>;
        let force = Force::new::<newton>;

        Ok(Self {
            main_shaft_length: m(1.0),
            low_speed_shaft_length: m(2.5),
            bedplate_front_height: m(1.7),
            bedplate_rear_height: m(1.35),
            design: DrivetrainType::Geared,
            crane: true,
            bevel_stage: false,
            gearbox: Gearbox::parse("eep", &[3, 3, 1])?,
            stage_ratios: StageRatios::Optimal,
            shaft_type: ShaftType::Normal,
            shaft_ratio: 0.10,
            carrier_mass: Mass::new::<kilogram>(8000.0),
            main_bearings: [BearingType::Carb, BearingType::Srb],
            yaw_motors: 8,
            uptower_transformer: true,
            flange_length: m(0.5),
            gearbox_cm: m(0.1),
            hss_length: m(1.5),
            overhang: m(5.0),
            fatigue_check: FatigueCheck::None,
            efficiency: 0.95,
            hub_moments: [moment(330_770.0), moment(-16_665_000.0), moment(2_896_300.0)],
            hub_forces: [force(599_610.0), force(186_780.0), force(-842_710.0)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn parses_reference_gearbox() {
        let gearbox = Gearbox::parse("eep", &[3, 3, 1]).unwrap();

        let kinds: Vec<_> = gearbox.stages().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [
                GearStageKind::Epicyclic,
                GearStageKind::Epicyclic,
                GearStageKind::Parallel
            ]
        );
        assert_eq!(gearbox.stages()[0].planets, 3);
        assert_eq!(gearbox.stages()[2].planets, 1);
    }

    #[test]
    fn rejects_unknown_stage() {
        assert_eq!(
            Gearbox::parse("epx", &[3, 1, 1]),
            Err(ConfigurationError::UnknownGearStage('x'))
        );
    }

    #[test]
    fn planets_must_match_stages() {
        assert_eq!(
            Gearbox::parse("eep", &[3, 3]),
            Err(ConfigurationError::LengthMismatch {
                what: "planet counts",
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn reference_drivetrain() {
        let drivetrain = Drivetrain::reference().unwrap();

        assert_eq!(drivetrain.gearbox.stages().len(), 3);
        assert_eq!(drivetrain.main_bearings, [BearingType::Carb, BearingType::Srb]);
        assert_relative_eq!(
            drivetrain.hub_moments[1].get::<newton_meter>(),
            -16.665e6,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            drivetrain.hub_forces[2].get::<newton>(),
            -842_710.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(drivetrain.overhang.get::<meter>(), 5.0, max_relative = 1e-12);
    }
}
