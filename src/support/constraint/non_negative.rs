use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// # Examples
///
/// ```
/// use twine_wind::support::constraint::{Constrained, NonNegative};
/// use uom::si::{f64::Length, length::meter};
///
/// let depth = NonNegative::new(Length::new::<meter>(20.0)).unwrap();
/// assert_eq!(depth.into_inner().get::<meter>(), 20.0);
///
/// let onshore = Constrained::<_, NonNegative>::new(0.0).unwrap();
/// assert_eq!(onshore.into_inner(), 0.0);
///
/// assert!(NonNegative::new(Length::new::<meter>(-1.0)).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::<T, NonNegative>::zero()
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two non-negative values.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly negative.
impl<T> Add for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(value >= T::zero(), "sum of non-negative values is negative");
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

impl<T> Zero for Constrained<T, NonNegative>
where
    T: PartialOrd + Zero,
{
    fn zero() -> Self {
        Self {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    fn is_zero(&self) -> bool {
        self.value == T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::millimeter};

    #[test]
    fn lengths() {
        assert!(NonNegative::new(Length::new::<millimeter>(3.0)).is_ok());
        assert!(NonNegative::new(Length::new::<millimeter>(0.0)).is_ok());
        assert!(NonNegative::new(Length::new::<millimeter>(-0.0)).is_ok());
        assert_eq!(
            NonNegative::new(Length::new::<millimeter>(-2.0)),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            NonNegative::new(Length::new::<millimeter>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn sums_layer_thicknesses() {
        let plies = [1.5, 0.5, 2.0]
            .map(|t| NonNegative::new(Length::new::<millimeter>(t)).unwrap());

        let total: Constrained<Length, NonNegative> = plies.into_iter().sum();
        assert_relative_eq!(total.into_inner().get::<millimeter>(), 4.0, max_relative = 1e-12);

        let empty: Constrained<Length, NonNegative> = std::iter::empty().sum();
        assert!(empty.is_zero());
    }
}
