//! Wind turbine models.
//!
//! - [`turbine`]: Assembly of a complete turbine definition (rotor, drivetrain,
//!   tower, and foundation) from a wind class and sea depth.

pub mod turbine;
