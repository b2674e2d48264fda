//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by domain. Today that is [`wind`], which builds turbine
//! definitions for downstream aerodynamic, structural, and drivetrain solvers.
//!
//! # Model structure
//!
//! Each model lives in its own module with an internal `core` submodule that
//! holds the domain logic. The `core` module is an implementation detail; the
//! types callers need are re-exported by the model module.
//!
//! The [`twine_core::Model`] implementation is a thin adapter over the core
//! API, so the same core can back more than one adapter.

pub mod wind;
