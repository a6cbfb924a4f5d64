//!
//! Input shaping for the driver's sticks.
//!
//! A raw stick sample goes through three steps:
//!     1. clamp to [-1, 1] (hardware occasionally reports slightly past full scale)
//!     2. deadband, rescaled so the output starts at 0 just past the band and still
//!        reaches 1 at full deflection
//!     3. a sign preserving power curve, so small deflections give fine control
//!

use libm::{copysignf, fabsf, powf};

use nalgebra::base::*;

use crate::error::ConfigError;
use crate::robot::{DEADBAND, RESPONSE_EXPONENT};

/// Zero out `value` inside `[-deadband, deadband]` and rescale the rest so the
/// response is continuous at the edge of the band
pub fn deadband(value: f32, deadband: f32) -> f32 {
    if fabsf(value) > deadband {
        if value > 0.0 {
            (value - deadband) / (1.0 - deadband)
        } else {
            (value + deadband) / (1.0 - deadband)
        }
    } else {
        0.0
    }
}

/// Bring a raw sample into [-1, 1].  NaN reads as a centered stick.
pub fn clamp_sample(raw: f32) -> f32 {
    if raw.is_nan() {
        log::trace!("NaN axis sample treated as 0");
        return 0.0;
    }

    let clamped = raw.clamp(-1.0, 1.0);
    if clamped != raw {
        log::trace!("Axis sample {} clamped to {}", raw, clamped);
    }
    clamped
}

/// One cycle's worth of shaped stick values, each in [-1, 1]
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ShapedAxes {
    /// Robot (or field) +x
    pub forward: f32,
    /// Robot (or field) +y, to the left
    pub strafe: f32,
    /// Counterclockwise
    pub rotation: f32,
}

impl ShapedAxes {
    pub const fn new(forward: f32, strafe: f32, rotation: f32) -> Self {
        Self {
            forward,
            strafe,
            rotation,
        }
    }
}

impl From<ShapedAxes> for Vector3<f32> {
    fn from(shaped: ShapedAxes) -> Self {
        Vector3::new(shaped.forward, shaped.strafe, shaped.rotation)
    }
}

/// Deadband and response curve settings applied to every axis
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Shaper {
    deadband: f32,
    exponent: f32,
}

impl Default for Shaper {
    fn default() -> Self {
        Self {
            deadband: DEADBAND,
            exponent: RESPONSE_EXPONENT,
        }
    }
}

impl Shaper {
    /// Create a new shaper
    ///
    /// deadband must be in [0, 1) and exponent at least 1 (1 is linear)
    pub fn new(deadband: f32, exponent: f32) -> Result<Self, ConfigError> {
        if !deadband.is_finite() || !(0.0..1.0).contains(&deadband) {
            return Err(ConfigError::InvalidDeadband(deadband));
        }

        if !exponent.is_finite() || exponent < 1.0 {
            return Err(ConfigError::InvalidExponent(exponent));
        }

        Ok(Self { deadband, exponent })
    }

    pub fn deadband(&self) -> f32 {
        self.deadband
    }

    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    /// Shape a single raw sample
    pub fn shape(&self, raw: f32) -> f32 {
        let value = deadband(clamp_sample(raw), self.deadband);
        if self.exponent == 2.0 {
            copysignf(value * value, value)
        } else {
            copysignf(powf(fabsf(value), self.exponent), value)
        }
    }

    /// Shape all three axes for a cycle
    pub fn shape_axes(&self, forward: f32, strafe: f32, rotation: f32) -> ShapedAxes {
        ShapedAxes {
            forward: self.shape(forward),
            strafe: self.shape(strafe),
            rotation: self.shape(rotation),
        }
    }
}
