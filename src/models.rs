//! Public experiment-design models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently just
//! [`jets`]) based on an opinionated taxonomy. This organization may evolve
//! as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The model
//! module re-exports the types callers need; the `core` layout is an
//! implementation detail.

pub mod jets;
