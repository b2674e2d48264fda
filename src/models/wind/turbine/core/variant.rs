//! Site and wind-class selection.

use std::{fmt, str::FromStr};

use uom::{ConstZero, si::f64::Length};

use crate::support::constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive};

use super::ConfigurationError;

/// Wind class requested for a project.
///
/// `Offshore` is shorthand for the Class I rotor on an offshore site. Whether
/// the site is actually offshore is decided by the sea depth alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WindClass {
    #[default]
    I,
    III,
    Offshore,
}

impl FromStr for WindClass {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" => Ok(Self::I),
            "III" => Ok(Self::III),
            "Offshore" => Ok(Self::Offshore),
            other => Err(ConfigurationError::UnknownWindClass(other.to_owned())),
        }
    }
}

impl fmt::Display for WindClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::I => "I",
            Self::III => "III",
            Self::Offshore => "Offshore",
        })
    }
}

/// IEC turbine class that selects the fatigue tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IecClass {
    I,
    III,
}

impl From<WindClass> for IecClass {
    fn from(class: WindClass) -> Self {
        match class {
            WindClass::I | WindClass::Offshore => Self::I,
            WindClass::III => Self::III,
        }
    }
}

/// High-level design parameters for a turbine build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineOptions {
    pub wind_class: WindClass,

    /// Water depth at the site; zero means onshore.
    pub sea_depth: Constrained<Length, NonNegative>,
}

impl TurbineOptions {
    /// Validates and bundles the design parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidParameter`] if `sea_depth` is
    /// negative, infinite, or not a number.
    pub fn new(wind_class: WindClass, sea_depth: Length) -> Result<Self, ConfigurationError> {
        let invalid = ConfigurationError::parameter("sea depth");
        let sea_depth = NonNegative::new(sea_depth).map_err(&invalid)?;
        if !sea_depth.as_ref().is_finite() {
            return Err(invalid(ConstraintError::NotFinite));
        }
        Ok(Self {
            wind_class,
            sea_depth,
        })
    }

    /// Options for an onshore site.
    #[must_use]
    pub fn onshore(wind_class: WindClass) -> Self {
        Self {
            wind_class,
            sea_depth: NonNegative::zero(),
        }
    }
}

impl Default for TurbineOptions {
    fn default() -> Self {
        Self::onshore(WindClass::default())
    }
}

/// Where the turbine stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Site {
    Onshore,
    Offshore {
        sea_depth: Constrained<Length, StrictlyPositive>,
    },
}

impl Site {
    /// Classifies a validated sea depth; any nonzero depth is offshore.
    #[must_use]
    pub fn from_depth(sea_depth: Constrained<Length, NonNegative>) -> Self {
        match StrictlyPositive::new(sea_depth.into_inner()) {
            Ok(sea_depth) => Self::Offshore { sea_depth },
            Err(_) => Self::Onshore,
        }
    }

    #[must_use]
    pub fn is_offshore(&self) -> bool {
        matches!(self, Self::Offshore { .. })
    }

    /// Returns the water depth, zero onshore.
    #[must_use]
    pub fn sea_depth(&self) -> Length {
        match self {
            Self::Onshore => Length::ZERO,
            Self::Offshore { sea_depth } => sea_depth.into_inner(),
        }
    }
}

/// The variant selected once per build.
///
/// Site and class are independent axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineVariant {
    pub site: Site,
    pub class: IecClass,
}

impl TurbineVariant {
    #[must_use]
    pub fn select(options: &TurbineOptions) -> Self {
        Self {
            site: Site::from_depth(options.sea_depth),
            class: options.wind_class.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::length::meter;

    fn options(class: WindClass, depth: f64) -> TurbineOptions {
        TurbineOptions::new(class, Length::new::<meter>(depth)).unwrap()
    }

    #[test]
    fn parses_wind_classes() {
        assert_eq!("I".parse(), Ok(WindClass::I));
        assert_eq!("III".parse(), Ok(WindClass::III));
        assert_eq!("Offshore".parse(), Ok(WindClass::Offshore));
        assert_eq!(
            "II".parse::<WindClass>(),
            Err(ConfigurationError::UnknownWindClass("II".into()))
        );

        for class in [WindClass::I, WindClass::III, WindClass::Offshore] {
            assert_eq!(class.to_string().parse(), Ok(class));
        }
    }

    #[test]
    fn depth_selects_site() {
        assert_eq!(TurbineVariant::select(&options(WindClass::I, 0.0)).site, Site::Onshore);
        assert_eq!(TurbineVariant::select(&options(WindClass::I, -0.0)).site, Site::Onshore);

        let site = TurbineVariant::select(&options(WindClass::III, 20.0)).site;
        assert!(site.is_offshore());
        assert_eq!(site.sea_depth().get::<meter>(), 20.0);
    }

    #[test]
    fn offshore_class_uses_class_one_tables() {
        let onshore = TurbineVariant::select(&options(WindClass::Offshore, 0.0));
        assert_eq!(onshore.class, IecClass::I);
        assert_eq!(onshore.site, Site::Onshore);

        let offshore = TurbineVariant::select(&options(WindClass::Offshore, 35.0));
        assert_eq!(offshore.class, IecClass::I);
        assert!(offshore.site.is_offshore());

        assert_eq!(
            TurbineVariant::select(&options(WindClass::III, 35.0)).class,
            IecClass::III
        );
    }

    #[test]
    fn rejects_invalid_depths() {
        assert_eq!(
            TurbineOptions::new(WindClass::I, Length::new::<meter>(-5.0)),
            Err(ConfigurationError::InvalidParameter {
                what: "sea depth",
                source: ConstraintError::Negative,
            })
        );
        assert!(TurbineOptions::new(WindClass::I, Length::new::<meter>(f64::NAN)).is_err());
        assert_eq!(
            TurbineOptions::new(WindClass::I, Length::new::<meter>(f64::INFINITY)),
            Err(ConfigurationError::InvalidParameter {
                what: "sea depth",
                source: ConstraintError::NotFinite,
            })
        );
    }
}
