use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    units::{self, KinematicViscosity},
};

/// The working fluid, characterized by its kinematic viscosity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fluid {
    kinematic_viscosity: KinematicViscosity,
}

impl Fluid {
    /// Constructs a fluid with a validated kinematic viscosity.
    ///
    /// # Errors
    ///
    /// Returns an error if the viscosity is not strictly positive.
    pub fn new(kinematic_viscosity: KinematicViscosity) -> ConstraintResult<Self> {
        let kinematic_viscosity =
            Constrained::<KinematicViscosity, StrictlyPositive>::new(kinematic_viscosity)?;
        Ok(Self {
            kinematic_viscosity: kinematic_viscosity.into_inner(),
        })
    }

    /// Water at room temperature, ν = 1.0×10⁻⁶ m²/s.
    #[must_use]
    pub fn water() -> Self {
        Self {
            kinematic_viscosity: units::kinematic_viscosity(1.0e-6),
        }
    }

    /// Returns the kinematic viscosity.
    #[must_use]
    pub fn kinematic_viscosity(&self) -> KinematicViscosity {
        self.kinematic_viscosity
    }
}

impl Default for Fluid {
    fn default() -> Self {
        Self::water()
    }
}
