use uom::si::{
    f64::{Length, Time, Velocity},
    length::centimeter,
    ratio::ratio,
};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Camera and field-of-view parameters.
///
/// The vertical resolution and the target particle displacement are
/// guaranteed to be strictly positive, so the timing relations below can
/// never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Imaging {
    fov_height: Length,
    vertical_resolution: u32,
    particle_displacement: f64,
}

impl Imaging {
    /// Constructs validated imaging parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertical resolution or the target particle
    /// displacement (in pixels) is not strictly positive.
    pub fn new(
        fov_height: Length,
        vertical_resolution: u32,
        particle_displacement: f64,
    ) -> ConstraintResult<Self> {
        let vertical_resolution =
            Constrained::<u32, StrictlyPositive>::new(vertical_resolution)?.into_inner();
        let particle_displacement =
            Constrained::<f64, StrictlyPositive>::new(particle_displacement)?.into_inner();
        Ok(Self {
            fov_height,
            vertical_resolution,
            particle_displacement,
        })
    }

    /// Constructs imaging parameters without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the resolution and displacement are strictly
    /// positive. Violating this invariant produces zero or infinite timing
    /// values downstream.
    #[must_use]
    pub fn new_unchecked(
        fov_height: Length,
        vertical_resolution: u32,
        particle_displacement: f64,
    ) -> Self {
        Self {
            fov_height,
            vertical_resolution,
            particle_displacement,
        }
    }

    /// Returns the field-of-view height.
    #[must_use]
    pub fn fov_height(&self) -> Length {
        self.fov_height
    }

    /// Returns the vertical sensor resolution, in pixels.
    #[must_use]
    pub fn vertical_resolution(&self) -> u32 {
        self.vertical_resolution
    }

    /// Returns the target particle displacement between frames, in pixels.
    #[must_use]
    pub fn particle_displacement(&self) -> f64 {
        self.particle_displacement
    }

    /// Inter-frame time that moves a particle by the target displacement.
    #[must_use]
    pub fn interframe_time(&self, reference_velocity: Velocity) -> Time {
        self.interframe_time_for(self.particle_displacement, reference_velocity)
    }

    /// Inter-frame time for an arbitrary displacement, `Δt = ds·H / (Ry·U)`.
    #[must_use]
    pub fn interframe_time_for(&self, displacement: f64, reference_velocity: Velocity) -> Time {
        displacement * self.fov_height
            / (f64::from(self.vertical_resolution) * reference_velocity)
    }

    /// Displacement produced by a velocity at a fixed inter-frame time,
    /// `ds = Δt·Ry·U / H`.
    #[must_use]
    pub fn displacement_for(&self, interframe_time: Time, velocity: Velocity) -> f64 {
        (interframe_time * f64::from(self.vertical_resolution) * velocity / self.fov_height)
            .get::<ratio>()
    }
}

/// The lab's reference camera: 11 cm field of view on a 1024 px sensor,
/// targeting 16 px displacements.
impl Default for Imaging {
    fn default() -> Self {
        Self::new_unchecked(Length::new::<centimeter>(11.0), 1024, 16.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{time::second, velocity::meter_per_second};

    #[test]
    fn interframe_time_matches_closed_form() {
        let imaging = Imaging::default();
        let velocity = Velocity::new::<meter_per_second>(0.0629);

        let expected = 16.0 * 0.11 / (1024.0 * 0.0629);
        assert_relative_eq!(
            imaging.interframe_time(velocity).get::<second>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn displacement_inverts_interframe_time() {
        let imaging = Imaging::default();
        let velocity = Velocity::new::<meter_per_second>(0.5);

        let dt = imaging.interframe_time(velocity);
        assert_relative_eq!(
            imaging.displacement_for(dt, velocity),
            16.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_zero_resolution_and_displacement() {
        let h = Length::new::<centimeter>(11.0);

        assert!(Imaging::new(h, 0, 16.0).is_err());
        assert!(Imaging::new(h, 1024, 0.0).is_err());
        assert!(Imaging::new(h, 1024, -1.0).is_err());
    }
}
