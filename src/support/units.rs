//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (lengths, flow rates,
//! velocities, timing). This module provides quantities that are useful for
//! jet modeling but aren't named in [`uom`].
//!
//! ## Kinematic viscosity
//!
//! [`uom`] has no named kinematic viscosity quantity, so one is defined here
//! from its dimensions (m²/s in SI). Because the alias has no named unit,
//! values are built with the [`kinematic_viscosity`] helper:
//!
//! ```
//! use piv_setup::support::units::kinematic_viscosity;
//!
//! // Water at room temperature.
//! let nu = kinematic_viscosity(1.0e-6);
//! assert_eq!(nu.value, 1.0e-6);
//! ```

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Area, Time},
        area::square_meter,
        time::second,
    },
    typenum::{N1, P2, Z0},
};

/// Kinematic viscosity, m²/s in SI.
pub type KinematicViscosity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Builds a kinematic viscosity from a value in m²/s.
#[must_use]
pub fn kinematic_viscosity(square_meters_per_second: f64) -> KinematicViscosity {
    Area::new::<square_meter>(square_meters_per_second) / Time::new::<second>(1.0)
}
