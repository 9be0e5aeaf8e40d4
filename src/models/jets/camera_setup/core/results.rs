//! Results types for the camera setup calculation.

use std::fmt;

use uom::si::f64::{Frequency, Time, Velocity};

/// Derived flow and timing parameters for one experiment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Results {
    /// Primary jet velocities and Reynolds number.
    pub primary: JetResults,

    /// Secondary jet results, present only for dual-jet configurations.
    pub secondary: Option<SecondaryJet>,

    /// Which jet governs the camera timing.
    pub dominant: DominantJet,

    /// Centerline velocity of the dominant jet at the field of view.
    pub reference_velocity: Velocity,

    /// Time between successive camera exposures.
    pub interframe_time: Time,

    /// Camera sampling rate, the reciprocal of the inter-frame time.
    pub sampling_rate: Frequency,
}

/// Velocities and Reynolds number for one jet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JetResults {
    /// Mean exit velocity at the nozzle.
    pub exit_velocity: Velocity,

    /// Centerline velocity at the field-of-view station.
    pub centerline_velocity: Velocity,

    /// Reynolds number based on exit velocity and nozzle diameter.
    pub reynolds: f64,
}

/// Secondary jet results for a dual-jet configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondaryJet {
    /// Secondary jet velocities and Reynolds number.
    pub flow: JetResults,

    /// Nondimensional ratios between the two jets.
    pub ratios: Ratios,
}

/// Nondimensional ratios characterizing a dual-jet configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    /// Exit velocity ratio, `U₁/U₀`.
    pub velocity: f64,

    /// Nozzle diameter ratio, `D₀/D₁`.
    pub diameter: f64,

    /// Horizontal spacing in secondary diameters, `L_I/D₁`.
    pub spacing: f64,

    /// Vertical offset in primary diameters, `H_I/D₀`.
    pub offset: f64,

    /// Scale parameter `ε = √(D₁/D₀ · U₀/U₁)`.
    pub epsilon: f64,
}

/// Which jet's centerline velocity governs the camera timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantJet {
    Primary,
    Secondary,
}

impl fmt::Display for DominantJet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "Primary"),
            Self::Secondary => write!(f, "Secondary"),
        }
    }
}
