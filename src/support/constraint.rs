//! Type-level numeric constraints with zero runtime cost.
//!
//! Experiment inputs like nozzle diameters and viscosities carry hard
//! physical invariants (a zero diameter makes every downstream formula
//! meaningless). This module expresses those invariants at the type level:
//! a value is checked once at construction and is then known-good wherever
//! it flows.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero
//! - [`NonNegative`]: Zero or greater
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//!
//! # Extending
//!
//! Custom numeric invariants can be defined by implementing [`Constraint<T>`]
//! for a zero-sized marker type.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for any marker type representing a numeric
/// constraint, such as [`StrictlyPositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the
    /// constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional
/// variants in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// Combine this with one of the provided marker types (such as
/// [`StrictlyPositive`]) or your own [`Constraint<T>`] implementation.
///
/// # Example
///
/// ```
/// use piv_setup::support::constraint::{Constrained, StrictlyPositive};
///
/// let station = Constrained::<_, StrictlyPositive>::new(27.2).unwrap();
/// assert_eq!(station.into_inner(), 27.2);
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

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
