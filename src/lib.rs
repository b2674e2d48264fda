//! # Twine Wind
//!
//! Wind turbine definition models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The crate turns a handful of design parameters into a fully resolved
//! turbine description: blade grids and airfoils, composite layups, control
//! and drivetrain parameters, the tower, its foundation, and the fatigue load
//! tables that depend on wind class. It does not solve any physics; the output
//! is input for solvers that do.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are public because they are useful on their own, but
//! their APIs are not stable and may change as models need.

pub mod models;
pub mod support;
