//! Supporting utilities used by models.
//!
//! These modules are part of the public API because they're useful, but
//! their APIs are not stable. Breaking changes may occur as needed.

pub mod constraint;
pub mod units;
