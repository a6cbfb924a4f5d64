//!
//! Robot Constants and Configuration Information
//!

use crate::drive_command::FrameMode;

/// Stick readings at or under this magnitude are treated as zero
pub const DEADBAND: f32 = 0.05;

/// Exponent of the response curve applied after the deadband (2 = squared)
pub const RESPONSE_EXPONENT: f32 = 2.0;

/// The top translational speed of the drivetrain (m/s)
pub const MAX_VELOCITY_METERS_PER_SECOND: f32 = 4.0;

/// The top rotational speed of the drivetrain (rad/s)
pub const MAX_ANGULAR_VELOCITY_RADIANS_PER_SECOND: f32 = 11.5;

/// Number of consecutive control cycles a button has to read pressed before
/// the press counts
pub const DEBOUNCE_SAMPLES: u8 = 3;

/// The frame the drive command starts in
#[cfg(not(feature = "field-relative"))]
pub const DEFAULT_FRAME_MODE: FrameMode = FrameMode::RobotRelative;

/// The frame the drive command starts in
#[cfg(feature = "field-relative")]
pub const DEFAULT_FRAME_MODE: FrameMode = FrameMode::FieldRelative;
