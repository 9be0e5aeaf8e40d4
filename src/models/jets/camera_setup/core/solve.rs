use uom::si::ratio::ratio;

use super::{
    input::{Arrangement, Input, Jet},
    results::{DominantJet, JetResults, Ratios, Results, SecondaryJet},
};
use crate::support::units::KinematicViscosity;

/// Evaluates the closed-form camera setup calculation.
pub(super) fn solve(input: &Input) -> Results {
    let nu = input.fluid.kinematic_viscosity();
    let primary = evaluate_jet(input.arrangement.primary(), nu);

    let (secondary, dominant) = match &input.arrangement {
        Arrangement::Single(_) => (None, DominantJet::Primary),
        Arrangement::Dual {
            primary: primary_jet,
            secondary: secondary_jet,
            geometry,
        } => {
            let flow = evaluate_jet(secondary_jet, nu);
            let ratios = Ratios {
                velocity: (flow.exit_velocity / primary.exit_velocity).get::<ratio>(),
                diameter: (primary_jet.nozzle_diameter() / secondary_jet.nozzle_diameter())
                    .get::<ratio>(),
                spacing: (geometry.spacing() / secondary_jet.nozzle_diameter()).get::<ratio>(),
                offset: (geometry.offset() / primary_jet.nozzle_diameter()).get::<ratio>(),
                epsilon: epsilon(primary_jet, secondary_jet, &primary, &flow),
            };

            // The faster centerline wins; an exact tie resolves to Primary.
            let dominant = if flow.centerline_velocity > primary.centerline_velocity {
                DominantJet::Secondary
            } else {
                DominantJet::Primary
            };

            (Some(SecondaryJet { flow, ratios }), dominant)
        }
    };

    let reference_velocity = match dominant {
        DominantJet::Primary => primary.centerline_velocity,
        DominantJet::Secondary => {
            secondary
                .as_ref()
                .map_or(primary.centerline_velocity, |s| s.flow.centerline_velocity)
        }
    };

    let interframe_time = input.imaging.interframe_time(reference_velocity);
    let sampling_rate = 1.0 / interframe_time;

    Results {
        primary,
        secondary,
        dominant,
        reference_velocity,
        interframe_time,
        sampling_rate,
    }
}

fn evaluate_jet(jet: &Jet, nu: KinematicViscosity) -> JetResults {
    JetResults {
        exit_velocity: jet.exit_velocity(),
        centerline_velocity: jet.centerline_velocity(),
        reynolds: jet.reynolds(nu),
    }
}

/// Scale parameter `ε = √(D₁/D₀ · U₀/U₁)` for a dual-jet configuration.
fn epsilon(primary: &Jet, secondary: &Jet, primary_flow: &JetResults, secondary_flow: &JetResults) -> f64 {
    let diameter_ratio = (secondary.nozzle_diameter() / primary.nozzle_diameter()).get::<ratio>();
    let velocity_ratio =
        (primary_flow.exit_velocity / secondary_flow.exit_velocity).get::<ratio>();
    (diameter_ratio * velocity_ratio).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, VolumeRate},
        frequency::hertz,
        length::millimeter,
        time::second,
        velocity::meter_per_second,
        volume_rate::liter_per_minute,
    };

    use crate::models::jets::camera_setup::core::input::DualJetGeometry;

    fn dual_input(secondary: Jet) -> Input {
        Input {
            arrangement: Arrangement::Dual {
                primary: Jet::default(),
                secondary,
                geometry: DualJetGeometry::default(),
            },
            ..Input::single_jet_reference()
        }
    }

    #[test]
    fn single_jet_reference_scenario() {
        let results = solve(&Input::single_jet_reference());

        let u0 = 4.0 * 1.7 / (1000.0 * 60.0 * std::f64::consts::PI * 0.011_f64.powi(2));
        let ucz0 = 5.8 * u0 / 27.2;

        assert_relative_eq!(
            results.primary.exit_velocity.get::<meter_per_second>(),
            u0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            results.primary.centerline_velocity.get::<meter_per_second>(),
            ucz0,
            max_relative = 1e-12
        );
        assert_relative_eq!(results.primary.reynolds, u0 * 0.011 / 1.0e-6, max_relative = 1e-12);

        assert_eq!(results.dominant, DominantJet::Primary);
        assert!(results.secondary.is_none());
        assert_relative_eq!(
            results.interframe_time.get::<second>(),
            16.0 * 0.11 / (1024.0 * ucz0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn dual_jet_reference_scenario() {
        let results = solve(&Input::dual_jet_reference());
        let secondary = results.secondary.expect("dual configuration");

        let u0 = 4.0 * 1.7 / (1000.0 * 60.0 * std::f64::consts::PI * 0.011_f64.powi(2));
        let u1 = 4.0 * 0.55 / (1000.0 * 60.0 * std::f64::consts::PI * 0.0013_f64.powi(2));
        let ucz1 = 5.8 * u1 / 7.5;

        assert_relative_eq!(
            secondary.flow.centerline_velocity.get::<meter_per_second>(),
            ucz1,
            max_relative = 1e-12
        );

        // The small fast nozzle dominates the reference configuration.
        assert_eq!(results.dominant, DominantJet::Secondary);
        assert_relative_eq!(
            results.reference_velocity.get::<meter_per_second>(),
            ucz1,
            max_relative = 1e-12
        );

        assert_relative_eq!(secondary.ratios.velocity, u1 / u0, max_relative = 1e-12);
        assert_relative_eq!(secondary.ratios.diameter, 11.0 / 1.3, max_relative = 1e-12);
        assert_relative_eq!(secondary.ratios.spacing, 0.05 / 0.0013, max_relative = 1e-12);
        assert_relative_eq!(secondary.ratios.offset, 0.10 / 0.011, max_relative = 1e-12);
        assert_relative_eq!(
            secondary.ratios.epsilon,
            (0.0013 / 0.011 * u0 / u1).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn tie_resolves_to_primary() {
        // A secondary jet identical to the primary produces an exact
        // centerline tie.
        let results = solve(&dual_input(Jet::default()));
        assert_eq!(results.dominant, DominantJet::Primary);
    }

    #[test]
    fn slightly_faster_secondary_wins() {
        // Shrinking the station raises the centerline velocity just past
        // the primary's.
        let secondary = Jet::new_unchecked(
            VolumeRate::new::<liter_per_minute>(1.7),
            Length::new::<millimeter>(11.0),
            27.2 * (1.0 - 1e-9),
        );
        let results = solve(&dual_input(secondary));
        assert_eq!(results.dominant, DominantJet::Secondary);
    }

    #[test]
    fn sampling_rate_is_reciprocal_of_interframe_time() {
        for input in [Input::single_jet_reference(), Input::dual_jet_reference()] {
            let results = solve(&input);
            assert_relative_eq!(
                results.sampling_rate.get::<hertz>() * results.interframe_time.get::<second>(),
                1.0,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let input = Input::dual_jet_reference();
        assert_eq!(solve(&input), solve(&input));
    }
}
