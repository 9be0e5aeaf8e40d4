use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Use this type with [`Constrained<T, NonNegative>`] to encode
/// non-negativity at the type level. A convenience [`NonNegative::new`]
/// associated constructor is also provided.
///
/// # Examples
///
/// ```
/// use piv_setup::support::constraint::{Constrained, NonNegative};
///
/// // A zero nozzle offset is physically meaningful.
/// let offset_m = NonNegative::new(0.0).unwrap();
/// assert_eq!(offset_m.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-0.1).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is
    /// non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
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

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::centimeter};

    #[test]
    fn floats() {
        assert!(NonNegative::new(2.0).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(-2.0).is_err());
        assert!(NonNegative::new(f64::NAN).is_err());
    }

    #[test]
    fn lengths() {
        assert!(NonNegative::new(Length::new::<centimeter>(10.0)).is_ok());
        assert!(NonNegative::new(Length::new::<centimeter>(0.0)).is_ok());
        assert!(NonNegative::new(Length::new::<centimeter>(-10.0)).is_err());
    }
}
