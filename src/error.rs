//!
//! Errors that can occur while setting up or feeding the drive command
//!

use core::fmt::Debug;

/// A configuration value that would break the shaping or scaling math
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Deadband must be finite and in [0, 1)
    InvalidDeadband(f32),
    /// Response exponent must be finite and at least 1
    InvalidExponent(f32),
    /// Velocity limits must be finite and positive
    InvalidMaxVelocity(f32),
}

// generic so the hal's pin error can be passed through untouched
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputError<PinError: Debug> {
    /// Reading a button pin failed
    Pin(PinError),
}
