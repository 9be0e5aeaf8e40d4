//! # PIV Setup
//!
//! Models for planning particle-image-velocimetry (PIV) recordings of
//! single- and dual-jet flows.
//!
//! Given the physical description of an experiment (flow rates, nozzle
//! diameters, field of view, camera resolution, fluid viscosity), the crate
//! derives the recording parameters a high-speed camera needs (inter-frame
//! time and sampling rate) along with the nondimensional numbers that
//! characterize the flow (Reynolds numbers, velocity and length ratios).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific experiment-design models.
//! - [`support`]: Supporting utilities used by models.
//!
//! All dimensional quantities use [`uom`], so callers construct inputs in
//! whatever units are convenient (flow rates in L/min, diameters in mm) and
//! the unit system handles conversion.
//!
//! ## Example
//!
//! ```
//! use piv_setup::models::jets::camera_setup::{CameraSetup, DominantJet, Input};
//! use uom::si::frequency::hertz;
//!
//! let input = Input::single_jet_reference();
//! let results = CameraSetup::solve(&input);
//!
//! assert_eq!(results.dominant, DominantJet::Primary);
//! assert!(results.sampling_rate.get::<hertz>() > 0.0);
//! ```

pub mod models;
pub mod support;
