use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a non-empty sequence strictly increases.
///
/// Every element must compare strictly greater than its predecessor, so
/// repeated values and `NaN` entries are both rejected.
///
/// # Examples
///
/// ```
/// use twine_wind::support::constraint::{ConstraintError, StrictlyIncreasing};
///
/// let grid = StrictlyIncreasing::new(vec![0.0, 0.3, 1.0]).unwrap();
/// assert_eq!(grid.as_ref().len(), 3);
///
/// assert_eq!(
///     StrictlyIncreasing::new(vec![0.0, 0.3, 0.3]),
///     Err(ConstraintError::NotIncreasing { index: 2 }),
/// );
/// assert_eq!(
///     StrictlyIncreasing::new(Vec::<f64>::new()),
///     Err(ConstraintError::Empty),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyIncreasing;

impl StrictlyIncreasing {
    /// Constructs a [`Constrained<Vec<T>, StrictlyIncreasing>`] if the sequence strictly increases.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Empty`] if the sequence has no elements.
    /// - [`ConstraintError::NotANumber`] if a comparison is undefined (e.g., NaN).
    /// - [`ConstraintError::NotIncreasing`] with the index of the first offending element.
    pub fn new<T: PartialOrd>(
        values: Vec<T>,
    ) -> Result<Constrained<Vec<T>, StrictlyIncreasing>, ConstraintError> {
        Constrained::<Vec<T>, StrictlyIncreasing>::new(values)
    }
}

impl<T: PartialOrd> Constraint<Vec<T>> for StrictlyIncreasing {
    fn check(values: &Vec<T>) -> Result<(), ConstraintError> {
        if values.is_empty() {
            return Err(ConstraintError::Empty);
        }

        for (offset, pair) in values.windows(2).enumerate() {
            match pair[1].partial_cmp(&pair[0]) {
                Some(Ordering::Greater) => {}
                Some(_) => return Err(ConstraintError::NotIncreasing { index: offset + 1 }),
                None => return Err(ConstraintError::NotANumber),
            }
        }

        Ok(())
    }
}
