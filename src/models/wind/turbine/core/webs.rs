//! Decoding of shear web positions.

use crate::support::constraint::{Constrained, UnitInterval};

use super::ConfigurationError;

/// Chordwise position of a shear web as a fraction of chord.
pub type WebLocation = Constrained<f64, UnitInterval>;

/// Maximum number of shear webs in a blade section.
pub const MAX_WEBS: usize = 3;

/// Decodes parallel per-web arrays into per-station web lists.
///
/// Each of `webs` holds one entry per station for a single web, with `None`
/// where that web is absent. The result holds, for every station, the present
/// web positions in web order (web 1 before web 2 before web 3). Structural
/// assembly pairs web layups with positions by this order.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] if more than [`MAX_WEBS`] arrays are given,
/// an array's length differs from `stations`, or a present position lies
/// outside `[0, 1]`.
pub fn decode_webs(
    stations: usize,
    webs: &[&[Option<f64>]],
) -> Result<Vec<Vec<WebLocation>>, ConfigurationError> {
    if webs.len() > MAX_WEBS {
        return Err(ConfigurationError::TooManyWebs {
            count: webs.len(),
            max: MAX_WEBS,
        });
    }

    for web in webs {
        ConfigurationError::check_len("web locations", stations, web.len())?;
    }

    (0..stations)
        .map(|station| {
            webs.iter()
                .enumerate()
                .filter_map(|(web, locations)| locations[station].map(|x| (web, x)))
                .map(|(web, x)| {
                    UnitInterval::new(x).map_err(|source| {
                        ConfigurationError::InvalidWebLocation {
                            web,
                            station,
                            source,
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}
