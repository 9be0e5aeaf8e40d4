use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than
/// zero).
///
/// Use this type with [`Constrained<T, StrictlyPositive>`] to encode strict
/// positivity at the type level. A convenience [`StrictlyPositive::new`]
/// associated constructor is also provided.
///
/// # Examples
///
/// ```
/// use piv_setup::support::constraint::{Constrained, StrictlyPositive};
///
/// let diameter_mm = StrictlyPositive::new(11.0).unwrap();
/// assert_eq!(diameter_mm.into_inner(), 11.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.3).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is
    /// strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number
    /// (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
