//! Parametric assembly of the NREL 5-MW reference turbine.
//!
//! Given a wind class and a sea depth, [`configure`] builds the full turbine
//! definition: rotor planform and composite layup, drivetrain parameters, and
//! the tower with its site-dependent foundation and fatigue tables. External
//! descriptors arrive through a [`DescriptorReader`], so this module never
//! touches file syntax.

mod airfoils;
mod environment;
mod error;
mod fatigue;
mod grid;
mod layup;
mod load_cases;
mod materials;
mod nacelle;
mod reference;
mod rotor;
mod source;
mod tower;
mod variant;
mod webs;

#[cfg(test)]
pub(super) mod test_support;

pub use airfoils::{AirfoilCatalog, AirfoilStation, map_airfoils};
pub use environment::{Environment, TurbulenceClass};
pub use error::{BuildError, ConfigurationError, FileFormatError, MaterialNotFoundError, Surface};
pub use fatigue::{BladeRootTables, CLASS_III_TOWER_CALIBRATION, FatigueLoadTable};
pub use grid::{Aerodynamic, GridKind, RadialGrid, Structural};
pub use layup::{
    AirfoilProfile, BladeSections, CompositeSection, Layer, LayerSpec, LayupDescriptor,
    ProfileError, WebSection, assemble,
};
pub use load_cases::{LoadCase, LoadCases};
pub use materials::{Material, MaterialLibrary};
pub use nacelle::{
    BearingType, Drivetrain, FatigueCheck, GearStage, GearStageKind, Gearbox, ShaftType,
    StageRatios,
};
pub use rotor::{
    AnalysisOptions, BladeFatigue, BladeGeometry, BladeStructure, Control, DrivetrainType, Rotor,
};
pub use source::{DescriptorReader, ReferenceFiles};
pub use tower::{
    Foundation, LinearWaves, Monopile, PowerWind, RotorPosition, SafetyFactors, Tower,
    TowerConstraints, TowerFatigue, TowerGeometry, TowerMaterial, TowerSoil, TowerSolver,
};
pub use variant::{IecClass, Site, TurbineOptions, TurbineVariant, WindClass};
pub use webs::{MAX_WEBS, WebLocation, decode_webs};

use std::sync::Arc;

/// A fully resolved turbine.
///
/// Every field is built fresh by [`configure`] and nothing is mutated
/// afterwards. Only the material library is shared between builds.
#[derive(Debug, Clone, PartialEq)]
pub struct TurbineDefinition {
    pub variant: TurbineVariant,
    pub environment: Environment,
    pub rotor: Rotor,
    pub drivetrain: Drivetrain,
    pub tower: Tower,
}

/// Loads the shared material library.
///
/// # Errors
///
/// Returns a [`FileFormatError`] if the material descriptor cannot be read,
/// or a [`ConfigurationError`] if two materials share a name.
pub fn load_materials<R: DescriptorReader + ?Sized>(
    files: &ReferenceFiles,
    reader: &R,
) -> Result<MaterialLibrary, BuildError> {
    let materials = reader.materials(&files.materials())?;
    Ok(MaterialLibrary::new(materials)?)
}

/// Builds the turbine definition for the selected variant.
///
/// The variant is fixed from `options` before anything else is built.
/// The first error from any sub-component is returned unchanged, and no
/// partial definition is produced.
///
/// # Errors
///
/// Returns a [`BuildError`] if the reference data is inconsistent, a layup
/// names a missing material, or a descriptor cannot be materialized.
pub fn configure<R: DescriptorReader + ?Sized>(
    options: &TurbineOptions,
    materials: &Arc<MaterialLibrary>,
    files: &ReferenceFiles,
    reader: &R,
) -> Result<TurbineDefinition, BuildError> {
    let variant = TurbineVariant::select(options);

    let rotor = rotor::build(variant.class, materials, files, reader)?;
    let drivetrain = Drivetrain::reference()?;
    let tower = tower::build(&variant.site, variant.class)?;

    Ok(TurbineDefinition {
        variant,
        environment: Environment::reference(),
        rotor,
        drivetrain,
        tower,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::meter, torque::newton_meter};

    use super::test_support::{InMemoryReader, reference_library};

    fn build(
        wind_class: WindClass,
        sea_depth: f64,
        reader: &InMemoryReader,
    ) -> Result<TurbineDefinition, BuildError> {
        let options = TurbineOptions::new(wind_class, Length::new::<meter>(sea_depth))?;
        configure(
            &options,
            &Arc::new(reference_library()),
            &ReferenceFiles::default(),
            reader,
        )
    }

    #[test]
    fn offshore_site_installs_monopile_and_waves() {
        let turbine = build(WindClass::I, 20.0, &InMemoryReader::reference()).unwrap();

        assert!(turbine.variant.site.is_offshore());

        let monopile = turbine.tower.foundation.monopile().unwrap();
        assert_relative_eq!(monopile.height.as_ref().get::<meter>(), 20.0, max_relative = 1e-12);
        assert_relative_eq!(monopile.diameter.as_ref().get::<meter>(), 6.0, max_relative = 1e-12);
        assert_relative_eq!(
            monopile.wall_thickness.as_ref().get::<meter>(),
            0.075,
            max_relative = 1e-12
        );

        let waves = turbine.tower.foundation.waves().unwrap();
        assert_relative_eq!(waves.case1.z_floor.get::<meter>(), -20.0, max_relative = 1e-12);
        assert_relative_eq!(waves.case2.z_floor.get::<meter>(), -20.0, max_relative = 1e-12);
        assert_eq!(waves.case1.z_surface.get::<meter>(), 0.0);
        assert_eq!(waves.case2.z_surface.get::<meter>(), 0.0);
    }

    #[test]
    fn onshore_site_has_soil_only() {
        for depth in [0.0, -0.0] {
            let turbine = build(WindClass::I, depth, &InMemoryReader::reference()).unwrap();

            assert_eq!(turbine.variant.site, Site::Onshore);
            assert!(turbine.tower.foundation.monopile().is_none());
            assert!(turbine.tower.foundation.waves().is_none());
            assert_eq!(turbine.tower.foundation.soil(), &TowerSoil::rigid());
        }
    }

    #[test]
    fn class_three_scales_tower_table_only() {
        let class_one = build(WindClass::I, 0.0, &InMemoryReader::reference()).unwrap();
        let class_three = build(WindClass::III, 0.0, &InMemoryReader::reference()).unwrap();

        let tower_one = class_one.tower.fatigue.table.moments()[0];
        let tower_three = class_three.tower.fatigue.table.moments()[0];
        assert_relative_eq!(tower_one.get::<newton_meter>(), 8294.0e3, max_relative = 1e-12);
        assert_relative_eq!(
            tower_three.get::<newton_meter>(),
            1.028713178 * 8294.0e3,
            max_relative = 1e-6
        );

        assert_eq!(class_three.rotor.turbine_class, IecClass::III);
        assert_ne!(
            class_one.rotor.fatigue.tables.mxb,
            class_three.rotor.fatigue.tables.mxb
        );
        assert_eq!(class_one.rotor.structure, class_three.rotor.structure);
        assert_eq!(class_one.drivetrain, class_three.drivetrain);
    }

    #[test]
    fn offshore_class_is_class_one_on_any_site() {
        let class_one = build(WindClass::I, 0.0, &InMemoryReader::reference()).unwrap();
        let onshore = build(WindClass::Offshore, 0.0, &InMemoryReader::reference()).unwrap();
        let offshore = build(WindClass::Offshore, 30.0, &InMemoryReader::reference()).unwrap();

        assert_eq!(onshore, class_one);
        assert_eq!(offshore.rotor, class_one.rotor);
        assert_eq!(offshore.tower.fatigue, class_one.tower.fatigue);
        assert!(offshore.variant.site.is_offshore());
    }

    #[test]
    fn identical_options_give_identical_definitions() {
        let reader = InMemoryReader::reference();

        let first = build(WindClass::III, 25.0, &reader).unwrap();
        let second = build(WindClass::III, 25.0, &reader).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn structural_sequences_match_grid() {
        let turbine = build(WindClass::I, 0.0, &InMemoryReader::reference()).unwrap();
        let rotor = &turbine.rotor;
        let n = rotor.structural_grid.len();

        assert_eq!(n, 38);
        assert_eq!(rotor.structure.sections.upper.len(), n);
        assert_eq!(rotor.structure.sections.lower.len(), n);
        assert_eq!(rotor.structure.sections.webs.len(), n);
        assert_eq!(rotor.structure.sections.profiles.len(), n);
        assert_eq!(rotor.airfoils.len(), rotor.aero_grid.len());

        let reader = InMemoryReader::reference();
        build(WindClass::I, 0.0, &reader).unwrap();
        let requested = reader.requested();
        assert_eq!(requested.len(), 2 * n);
        assert!(requested[0].ends_with("layup_1.inp"));
        assert!(requested[2 * n - 1].ends_with("shape_38.inp"));
    }

    #[test]
    fn unresolved_material_aborts_build() {
        let reader = InMemoryReader::reference().with_web_material(20, "balsa");

        match build(WindClass::I, 0.0, &reader) {
            Err(BuildError::MaterialNotFound(err)) => {
                assert_eq!(err.name, "balsa");
                assert_eq!(err.station, 20);
                assert_eq!(err.surface, Surface::Web(0));
            }
            other => panic!("expected a missing material, got {other:?}"),
        }
    }

    #[test]
    fn malformed_descriptor_aborts_build() {
        let reader = InMemoryReader::reference().with_unreadable_layup(5);

        match build(WindClass::I, 0.0, &reader) {
            Err(BuildError::FileFormat(err)) => {
                assert!(err.descriptor.ends_with("layup_6.inp"));
            }
            other => panic!("expected a file format error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_sea_depth() {
        for depth in [-1.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let err = build(WindClass::I, depth, &InMemoryReader::reference()).unwrap_err();
            assert!(matches!(
                err,
                BuildError::Configuration(ConfigurationError::InvalidParameter {
                    what: "sea depth",
                    ..
                })
            ));
        }
    }

    #[test]
    fn loads_material_library() {
        let reader = InMemoryReader::reference();
        let library = load_materials(&ReferenceFiles::default(), &reader).unwrap();

        assert_eq!(library, reference_library());
        assert_eq!(reader.requested(), [ReferenceFiles::default().materials()]);
    }
}
