//!
//! Runtime configuration for the drive command
//!

use crate::drive_command::FrameMode;
use crate::error::ConfigError;
use crate::robot::DEFAULT_FRAME_MODE;
use crate::shaping::Shaper;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DriveConfig {
    /// Deadband and response curve for all three axes
    pub shaper: Shaper,
    /// The frame the command starts in
    pub initial_mode: FrameMode,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            shaper: Shaper::default(),
            initial_mode: DEFAULT_FRAME_MODE,
        }
    }
}

impl DriveConfig {
    /// Create a new configuration with a custom deadband and response exponent
    pub fn new(deadband: f32, exponent: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            shaper: Shaper::new(deadband, exponent)?,
            initial_mode: DEFAULT_FRAME_MODE,
        })
    }

    /// Start in `mode` instead of the compiled default
    pub fn initial_mode(mut self, mode: FrameMode) -> Self {
        self.initial_mode = mode;
        self
    }
}
