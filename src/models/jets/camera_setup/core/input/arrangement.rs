use uom::si::{f64::Length, length::centimeter};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive};

use super::Jet;

/// The jet configuration under study.
///
/// Dual-jet experiments carry their secondary jet and nozzle geometry in the
/// variant itself, so a dual configuration with missing secondary parameters
/// cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arrangement {
    /// A single round jet.
    Single(Jet),

    /// Two jets with a fixed nozzle geometry between them.
    Dual {
        primary: Jet,
        secondary: Jet,
        geometry: DualJetGeometry,
    },
}

impl Arrangement {
    /// Returns the primary jet of either variant.
    #[must_use]
    pub fn primary(&self) -> &Jet {
        match self {
            Self::Single(jet) | Self::Dual { primary: jet, .. } => jet,
        }
    }

    /// Whether this is a dual-jet configuration.
    #[must_use]
    pub fn is_dual(&self) -> bool {
        matches!(self, Self::Dual { .. })
    }
}

impl Default for Arrangement {
    fn default() -> Self {
        Self::Single(Jet::default())
    }
}

/// Relative placement of the two nozzles in a dual-jet experiment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualJetGeometry {
    spacing: Length,
    offset: Length,
}

impl DualJetGeometry {
    /// Constructs a validated nozzle geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the horizontal spacing is not strictly positive
    /// or the vertical offset is negative. A zero offset (nozzles at the
    /// same height) is allowed.
    pub fn new(spacing: Length, offset: Length) -> ConstraintResult<Self> {
        let spacing = Constrained::<Length, StrictlyPositive>::new(spacing)?;
        let offset = Constrained::<Length, NonNegative>::new(offset)?;
        Ok(Self {
            spacing: spacing.into_inner(),
            offset: offset.into_inner(),
        })
    }

    /// Constructs a nozzle geometry without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the spacing is strictly positive and the
    /// offset is non-negative.
    #[must_use]
    pub fn new_unchecked(spacing: Length, offset: Length) -> Self {
        Self { spacing, offset }
    }

    /// Returns the horizontal nozzle spacing.
    #[must_use]
    pub fn spacing(&self) -> Length {
        self.spacing
    }

    /// Returns the vertical nozzle offset.
    #[must_use]
    pub fn offset(&self) -> Length {
        self.offset
    }
}

/// The lab's reference nozzle placement: 5 cm spacing, 10 cm offset.
impl Default for DualJetGeometry {
    fn default() -> Self {
        Self::new_unchecked(
            Length::new::<centimeter>(5.0),
            Length::new::<centimeter>(10.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_offset_is_allowed() {
        let geometry =
            DualJetGeometry::new(Length::new::<centimeter>(5.0), Length::new::<centimeter>(0.0));
        assert!(geometry.is_ok());
    }

    #[test]
    fn rejects_invalid_geometry() {
        let spacing = Length::new::<centimeter>(5.0);
        let offset = Length::new::<centimeter>(10.0);

        assert!(DualJetGeometry::new(Length::new::<centimeter>(0.0), offset).is_err());
        assert!(DualJetGeometry::new(spacing, Length::new::<centimeter>(-1.0)).is_err());
    }
}
