//! Exploratory parameter sweeps around a solved setup.
//!
//! These datasets back the trade-off plots the front end renders: how the
//! inter-frame time and sampling rate move with the target displacement, and
//! how the displacement moves with velocity at the chosen inter-frame time.
//! Each sweep spans 0.5× to 2.0× the nominal value.

use uom::si::f64::{Frequency, Time, Velocity};

use super::{input::Imaging, results::Results};

const SWEEP_POINTS: usize = 50;
const SWEEP_LO: f64 = 0.5;
const SWEEP_HI: f64 = 2.0;

/// Inter-frame time and sampling rate over a range of target displacements,
/// at the solved reference velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingSweep {
    /// Target particle displacements, in pixels.
    pub displacement: Vec<f64>,

    /// Inter-frame time at each displacement.
    pub interframe_time: Vec<Time>,

    /// Sampling rate at each displacement.
    pub sampling_rate: Vec<Frequency>,
}

/// Particle displacement over a range of flow velocities, at the solved
/// inter-frame time.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocitySweep {
    /// Centerline velocities.
    pub velocity: Vec<Velocity>,

    /// Displacement each velocity produces, in pixels.
    pub displacement: Vec<f64>,
}

impl Results {
    /// Sweeps the target displacement from 0.5× to 2.0× nominal and reports
    /// the resulting camera timing.
    #[must_use]
    pub fn timing_sweep(&self, imaging: &Imaging) -> TimingSweep {
        let nominal = imaging.particle_displacement();
        let displacement: Vec<f64> = span(SWEEP_LO * nominal, SWEEP_HI * nominal).collect();
        let interframe_time: Vec<Time> = displacement
            .iter()
            .map(|&ds| imaging.interframe_time_for(ds, self.reference_velocity))
            .collect();
        let sampling_rate = interframe_time.iter().map(|&dt| 1.0 / dt).collect();

        TimingSweep {
            displacement,
            interframe_time,
            sampling_rate,
        }
    }

    /// Sweeps the velocity from 0.5× to 2.0× the reference and reports the
    /// displacement at the solved inter-frame time.
    #[must_use]
    pub fn velocity_sweep(&self, imaging: &Imaging) -> VelocitySweep {
        let velocity: Vec<Velocity> = span(SWEEP_LO, SWEEP_HI)
            .map(|factor| factor * self.reference_velocity)
            .collect();
        let displacement = velocity
            .iter()
            .map(|&u| imaging.displacement_for(self.interframe_time, u))
            .collect();

        VelocitySweep {
            velocity,
            displacement,
        }
    }
}

fn span(start: f64, end: f64) -> impl Iterator<Item = f64> {
    let step = (end - start) / (SWEEP_POINTS - 1) as f64;
    (0..SWEEP_POINTS).map(move |i| start + step * i as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{frequency::hertz, time::second, velocity::meter_per_second};

    use crate::models::jets::camera_setup::core::{CameraSetup, input::Input};

    #[test]
    fn timing_sweep_spans_half_to_double_displacement() {
        let input = Input::single_jet_reference();
        let sweep = CameraSetup::solve(&input).timing_sweep(&input.imaging);

        assert_eq!(sweep.displacement.len(), SWEEP_POINTS);
        assert_eq!(sweep.interframe_time.len(), SWEEP_POINTS);
        assert_relative_eq!(sweep.displacement[0], 8.0, max_relative = 1e-12);
        assert_relative_eq!(
            sweep.displacement[SWEEP_POINTS - 1],
            32.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn timing_sweep_matches_closed_form() {
        let input = Input::single_jet_reference();
        let results = CameraSetup::solve(&input);
        let sweep = results.timing_sweep(&input.imaging);

        let u_ref = results.reference_velocity.get::<meter_per_second>();
        for (ds, dt) in sweep.displacement.iter().zip(&sweep.interframe_time) {
            assert_relative_eq!(
                dt.get::<second>(),
                ds * 0.11 / (1024.0 * u_ref),
                max_relative = 1e-9
            );
        }
        for (dt, fps) in sweep.interframe_time.iter().zip(&sweep.sampling_rate) {
            assert_relative_eq!(
                fps.get::<hertz>() * dt.get::<second>(),
                1.0,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn velocity_sweep_recovers_nominal_displacement() {
        let input = Input::dual_jet_reference();
        let results = CameraSetup::solve(&input);
        let sweep = results.velocity_sweep(&input.imaging);

        assert_eq!(sweep.velocity.len(), SWEEP_POINTS);
        assert_relative_eq!(
            sweep.velocity[0].get::<meter_per_second>(),
            0.5 * results.reference_velocity.get::<meter_per_second>(),
            max_relative = 1e-12
        );

        // At the reference velocity itself the displacement is the nominal
        // 16 px target; the doubled endpoint lands at 32 px.
        assert_relative_eq!(
            sweep.displacement[SWEEP_POINTS - 1],
            2.0 * input.imaging.particle_displacement(),
            max_relative = 1e-9
        );
    }
}
