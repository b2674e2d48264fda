//! Type-level numeric constraints checked once at construction.
//!
//! A [`Constrained<T, C>`] value always satisfies the constraint named by its
//! marker type `C`, so downstream code can rely on the invariant without
//! re-validating.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater (sea depths, layer thicknesses)
//! - [`StrictlyPositive`]: Greater than zero (foundation dimensions)
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1` (radial and chordwise fractions)
//! - [`StrictlyIncreasing`]: Sequences whose elements strictly increase (radial grids)
//!
//! Each marker provides an associated `new()` constructor
//! (e.g., `NonNegative::new(5.0)`) in addition to [`Constrained::new`].
//!
//! # Extending
//!
//! Custom invariants are defined by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod non_negative;
mod strictly_increasing;
mod strictly_positive;
mod unit_interval;

use std::{iter::Sum, marker::PhantomData, ops::Add};

use num_traits::Zero;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_increasing::StrictlyIncreasing;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A trait for enforcing invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is not finite")]
    NotFinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
    #[error("sequence is empty")]
    Empty,
    #[error("sequence does not strictly increase at index {index}")]
    NotIncreasing { index: usize },
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a constraint at construction time.
///
/// # Example
///
/// ```
/// use twine_wind::support::constraint::{Constrained, UnitInterval};
///
/// let r = Constrained::<_, UnitInterval>::new(0.4114).unwrap();
/// assert_eq!(r.into_inner(), 0.4114);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Sums constrained values for constraints preserved under addition.
impl<T, C> Sum for Constrained<T, C>
where
    C: Constraint<T>,
    Constrained<T, C>: Add<Output = Self> + Zero,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |a, b| a + b)
    }
}
