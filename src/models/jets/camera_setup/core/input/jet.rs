use std::f64::consts::FRAC_PI_4;

use uom::si::{
    f64::{Length, Velocity, VolumeRate},
    length::millimeter,
    ratio::ratio,
    volume_rate::liter_per_minute,
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    units::KinematicViscosity,
};

/// Centerline decay constant for a turbulent round jet.
///
/// Empirical calibration value for the far-field decay law
/// `U_c(z) = 5.8 · U_exit · D / z`, expressed here with the station already
/// normalized by the nozzle diameter.
const DECAY_CONSTANT: f64 = 5.8;

/// A round jet and the station where the field of view observes it.
///
/// The station is the downstream distance of the field-of-view center along
/// the jet axis, in nozzle diameters (the `z/D₀` or `x/D₁` of the lab
/// notebooks). Both the nozzle diameter and the station are guaranteed to be
/// strictly positive; the flow rate is deliberately unchecked, matching how
/// the lab treats it as a dial rather than an invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jet {
    flow_rate: VolumeRate,
    nozzle_diameter: Length,
    fov_station: f64,
}

impl Jet {
    /// Constructs a validated jet.
    ///
    /// # Errors
    ///
    /// Returns an error if the nozzle diameter or the field-of-view station
    /// is not strictly positive.
    pub fn new(
        flow_rate: VolumeRate,
        nozzle_diameter: Length,
        fov_station: f64,
    ) -> ConstraintResult<Self> {
        let nozzle_diameter = Constrained::<Length, StrictlyPositive>::new(nozzle_diameter)?;
        let fov_station = Constrained::<f64, StrictlyPositive>::new(fov_station)?;
        Ok(Self {
            flow_rate,
            nozzle_diameter: nozzle_diameter.into_inner(),
            fov_station: fov_station.into_inner(),
        })
    }

    /// Constructs a jet without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the nozzle diameter and station are strictly
    /// positive. Violating this invariant produces non-physical results.
    #[must_use]
    pub fn new_unchecked(flow_rate: VolumeRate, nozzle_diameter: Length, fov_station: f64) -> Self {
        Self {
            flow_rate,
            nozzle_diameter,
            fov_station,
        }
    }

    /// Returns the volumetric flow rate through the nozzle.
    #[must_use]
    pub fn flow_rate(&self) -> VolumeRate {
        self.flow_rate
    }

    /// Returns the nozzle diameter.
    #[must_use]
    pub fn nozzle_diameter(&self) -> Length {
        self.nozzle_diameter
    }

    /// Returns the field-of-view station, in nozzle diameters.
    #[must_use]
    pub fn fov_station(&self) -> f64 {
        self.fov_station
    }

    /// Mean exit velocity at the nozzle, `U = Q / (π/4 · D²)`.
    #[must_use]
    pub fn exit_velocity(&self) -> Velocity {
        let cross_section = FRAC_PI_4 * self.nozzle_diameter * self.nozzle_diameter;
        self.flow_rate / cross_section
    }

    /// Centerline velocity at the field-of-view station, `5.8 · U / (z/D)`.
    #[must_use]
    pub fn centerline_velocity(&self) -> Velocity {
        DECAY_CONSTANT * self.exit_velocity() / self.fov_station
    }

    /// Reynolds number based on exit velocity and nozzle diameter.
    #[must_use]
    pub fn reynolds(&self, kinematic_viscosity: KinematicViscosity) -> f64 {
        (self.exit_velocity() * self.nozzle_diameter / kinematic_viscosity).get::<ratio>()
    }
}

/// The lab's reference primary jet: 1.7 L/min through an 11 mm nozzle,
/// observed 27.2 diameters downstream.
impl Default for Jet {
    fn default() -> Self {
        Self::new_unchecked(
            VolumeRate::new::<liter_per_minute>(1.7),
            Length::new::<millimeter>(11.0),
            27.2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::velocity::meter_per_second;

    use crate::support::units;

    #[test]
    fn exit_velocity_matches_closed_form() {
        let jet = Jet::default();

        // 4·Q / (1000·60·π·D²) with Q in L/min and D in m.
        let expected = 4.0 * 1.7 / (1000.0 * 60.0 * std::f64::consts::PI * 0.011_f64.powi(2));
        assert_relative_eq!(
            jet.exit_velocity().get::<meter_per_second>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn centerline_velocity_applies_decay_law() {
        let jet = Jet::default();
        let u0 = jet.exit_velocity().get::<meter_per_second>();

        assert_relative_eq!(
            jet.centerline_velocity().get::<meter_per_second>(),
            5.8 * u0 / 27.2,
            max_relative = 1e-12
        );
    }

    #[test]
    fn reynolds_matches_closed_form() {
        let jet = Jet::default();
        let nu = units::kinematic_viscosity(1.0e-6);
        let u0 = jet.exit_velocity().get::<meter_per_second>();

        assert_relative_eq!(jet.reynolds(nu), u0 * 0.011 / 1.0e-6, max_relative = 1e-12);
    }

    #[test]
    fn rejects_non_positive_diameter_and_station() {
        let q = VolumeRate::new::<liter_per_minute>(1.7);

        assert!(Jet::new(q, Length::new::<millimeter>(0.0), 27.2).is_err());
        assert!(Jet::new(q, Length::new::<millimeter>(-11.0), 27.2).is_err());
        assert!(Jet::new(q, Length::new::<millimeter>(11.0), 0.0).is_err());
        assert!(Jet::new(q, Length::new::<millimeter>(11.0), f64::NAN).is_err());
    }
}
