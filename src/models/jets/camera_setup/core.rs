//! Camera setup computation for turbulent round-jet PIV.
//!
//! The calculation is closed-form: exit velocities follow from volumetric
//! flow rate and nozzle cross-section, centerline velocities from the
//! round-jet decay law, and the camera timing from the faster jet's
//! centerline velocity at the field of view.

mod input;
mod report;
mod results;
mod solve;
mod sweep;

pub use input::{Arrangement, DualJetGeometry, Fluid, Imaging, Input, Jet};
pub use report::{DEFAULT_OUTPUT_DIR, Report, ReportError};
pub use results::{DominantJet, JetResults, Ratios, Results, SecondaryJet};
pub use sweep::{TimingSweep, VelocitySweep};

use jiff::Zoned;

/// Entry point for PIV camera setup calculations.
///
/// Each call is an independent, single-shot evaluation: [`CameraSetup::solve`]
/// is pure and deterministic, and [`CameraSetup::report`] only adds a
/// wall-clock timestamp to the rendered text, never to the numeric results.
pub struct CameraSetup;

impl CameraSetup {
    /// Computes the derived flow and timing parameters for an experiment.
    ///
    /// Inputs are validated at construction, so the calculation itself
    /// cannot fail.
    #[must_use]
    pub fn solve(input: &Input) -> Results {
        solve::solve(input)
    }

    /// Builds a timestamped summary report for a solved experiment.
    ///
    /// The report can be rendered with [`Report::render`] or persisted with
    /// [`Report::save_to`].
    #[must_use]
    pub fn report(input: &Input, results: &Results) -> Report {
        report::build(input, results, Zoned::now())
    }
}
