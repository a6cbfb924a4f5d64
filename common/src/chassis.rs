//!
//! Chassis level velocity commands and the heading they are framed against.
//!
//! Frame convention (shared by everything that builds or consumes a
//! `ChassisSpeeds`):
//!     +x is forward, +y is to the left, +omega is counterclockwise
//!     headings are counterclockwise positive, zero along the field +x axis
//!

use libm::{cosf, fabsf, fmaxf, sinf};

use nalgebra::base::*;

/// An orientation of the robot on the field (radians, counterclockwise positive)
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Heading(f32);

impl Heading {
    /// The heading the field frame is aligned to
    pub const ZERO: Heading = Heading(0.0);

    pub const fn from_radians(radians: f32) -> Self {
        Self(radians)
    }

    pub fn from_degrees(degrees: f32) -> Self {
        Self(degrees.to_radians())
    }

    pub const fn radians(&self) -> f32 {
        self.0
    }

    pub fn degrees(&self) -> f32 {
        self.0.to_degrees()
    }
}

/// A desired planar motion of the robot body, in the robot's own frame
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ChassisSpeeds {
    /// Forward velocity (m/s)
    pub vx: f32,
    /// Leftward velocity (m/s)
    pub vy: f32,
    /// Counterclockwise angular velocity (rad/s)
    pub omega: f32,
}

impl ChassisSpeeds {
    /// Not moving
    pub const ZERO: ChassisSpeeds = ChassisSpeeds {
        vx: 0.0,
        vy: 0.0,
        omega: 0.0,
    };

    pub const fn new(vx: f32, vy: f32, omega: f32) -> Self {
        Self { vx, vy, omega }
    }

    /// Build a robot relative command from velocities given in the field frame.
    ///
    /// The translation is rotated by the negative of the robot's heading so that
    /// +x always points the same way on the field regardless of how the robot is
    /// turned:
    ///     vx' =  vx * cos(t) + vy * sin(t)
    ///     vy' = -vx * sin(t) + vy * cos(t)
    ///
    /// Rotation is the same in both frames and passes through untouched.
    pub fn from_field_relative(vx: f32, vy: f32, omega: f32, heading: Heading) -> Self {
        let theta = heading.radians();
        let (sin, cos) = (sinf(theta), cosf(theta));

        let field_to_robot = Matrix2::new(cos, sin, -sin, cos);
        let translation = field_to_robot * Vector2::new(vx, vy);

        Self {
            vx: translation[0],
            vy: translation[1],
            omega,
        }
    }

    /// Scale the translation down so neither vx nor vy is over `max_linear`,
    /// keeping its direction.  Untouched if both are already within the limit.
    pub fn desaturate(self, max_linear: f32) -> Self {
        let largest = fmaxf(fabsf(self.vx), fabsf(self.vy));
        if largest <= max_linear {
            return self;
        }

        let scale = max_linear / largest;
        Self {
            vx: (self.vx * scale).clamp(-max_linear, max_linear),
            vy: (self.vy * scale).clamp(-max_linear, max_linear),
            omega: self.omega,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<ChassisSpeeds> for Vector3<f32> {
    /// Body velocity in the <x, y, w> layout used by the motion control code
    fn from(speeds: ChassisSpeeds) -> Self {
        Vector3::new(speeds.vx, speeds.vy, speeds.omega)
    }
}

impl From<Vector3<f32>> for ChassisSpeeds {
    fn from(body_velocity: Vector3<f32>) -> Self {
        Self::new(body_velocity[0], body_velocity[1], body_velocity[2])
    }
}
