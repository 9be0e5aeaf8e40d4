//! PIV camera recording setup for single- and dual-jet experiments.
//!
//! Computes the inter-frame time and sampling rate a high-speed camera needs
//! to keep particle displacements near a target pixel value, together with
//! the nondimensional parameters of the flow. The computational core is in
//! the internal [`core`] module; everything callers need is re-exported here.
//!
//! # Example
//!
//! ```
//! use piv_setup::models::jets::camera_setup::{CameraSetup, Input};
//! use uom::si::time::second;
//!
//! let input = Input::dual_jet_reference();
//! let results = CameraSetup::solve(&input);
//! let report = CameraSetup::report(&input, &results);
//!
//! assert!(results.interframe_time.get::<second>() > 0.0);
//! assert!(report.render().contains("dual_jet_test"));
//! ```

mod core;

pub use self::core::{
    Arrangement, CameraSetup, DEFAULT_OUTPUT_DIR, DominantJet, DualJetGeometry, Fluid, Imaging,
    Input, Jet, JetResults, Ratios, Report, ReportError, Results, SecondaryJet, TimingSweep,
    VelocitySweep,
};
