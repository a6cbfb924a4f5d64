//!
//! The drivetrain as seen from the operator interface.
//!
//! Module kinematics, odometry and motor control all live behind this trait.
//! Faults are the implementor's to report; nothing here returns an error.
//!

use crate::chassis::{ChassisSpeeds, Heading};

pub trait Drivetrain {
    /// Apply `speeds` (robot frame) for roughly one control cycle.  Must be
    /// safe to call every cycle, including with `ChassisSpeeds::ZERO`.
    fn drive(&mut self, speeds: ChassisSpeeds);

    /// The latest known orientation of the robot
    fn current_heading(&self) -> Heading;

    /// Redefine the current physical orientation as `Heading::ZERO`
    fn reset_heading(&mut self);

    /// The fastest the robot can translate (m/s)
    fn max_linear_velocity(&self) -> f32;

    /// The fastest the robot can spin (rad/s)
    fn max_angular_velocity(&self) -> f32;
}

impl<T: Drivetrain + ?Sized> Drivetrain for &mut T {
    fn drive(&mut self, speeds: ChassisSpeeds) {
        (**self).drive(speeds)
    }

    fn current_heading(&self) -> Heading {
        (**self).current_heading()
    }

    fn reset_heading(&mut self) {
        (**self).reset_heading()
    }

    fn max_linear_velocity(&self) -> f32 {
        (**self).max_linear_velocity()
    }

    fn max_angular_velocity(&self) -> f32 {
        (**self).max_angular_velocity()
    }
}
