//!
//! Interfaces shared between the operator interface and the drivetrain
//!

#![no_std]

pub mod chassis;
pub use chassis::{ChassisSpeeds, Heading};

pub mod drivetrain;
pub use drivetrain::Drivetrain;
