//! Supporting utilities shared by models.
//!
//! These modules are public but unstable.
//!
//! - [`constraint`]: Numeric invariants carried in the type system.
//! - [`units`]: Quantity aliases and constructors on top of [`uom`].

pub mod constraint;
pub mod units;
