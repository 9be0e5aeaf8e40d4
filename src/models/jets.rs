//! Jet flow experiment models.
//!
//! This module contains models for turbulent round-jet experiments,
//! including PIV camera setup planning for single- and dual-jet
//! configurations.

pub mod camera_setup;
