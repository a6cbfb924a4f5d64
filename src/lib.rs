//!
//! Teleop drive pipeline for a swerve drive robot.
//!
//! Every control cycle the driver's three stick axes are shaped (deadband and
//! response curve), scaled to the drivetrain's limits, framed robot or field
//! relative and handed to the drivetrain:
//!     OperatorInput -> Shaper -> DriveCommand -> Drivetrain::drive
//!

#![no_std]

pub mod config;
pub mod drive_command;
pub mod error;
pub mod operator;
pub mod robot;
pub mod shaping;

pub use common::{ChassisSpeeds, Drivetrain, Heading};
pub use config::DriveConfig;
pub use drive_command::{DriveCommand, FrameMode};
pub use error::{ConfigError, InputError};
pub use operator::OperatorInput;
pub use shaping::{ShapedAxes, Shaper};
