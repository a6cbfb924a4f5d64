//!
//! The teleop drive command: turns the operator's sticks into a chassis velocity
//! command every control cycle, in either the robot's frame or the field's.
//!

use common::{ChassisSpeeds, Drivetrain};

use nalgebra::base::*;

use crate::config::DriveConfig;
use crate::error::ConfigError;
use crate::operator::OperatorInput;
use crate::shaping::{ShapedAxes, Shaper};

/// The frame the driver's sticks are interpreted in
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FrameMode {
    /// Forward on the stick is the robot's forward
    RobotRelative,
    /// Forward on the stick is a fixed direction on the field
    FieldRelative,
}

impl FrameMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Self::RobotRelative => Self::FieldRelative,
            Self::FieldRelative => Self::RobotRelative,
        }
    }
}

/// The drive command owns the drivetrain while it is the active command source.
///
/// Lifecycle (driven by the scheduler, once per control cycle):
///     initialize() -> execute() ... execute() -> deactivate()
///
/// `deactivate` always leaves a zero command as the last thing sent to the
/// drivetrain; `execute` sends nothing until the command is initialized again.
pub struct DriveCommand<D: Drivetrain> {
    drivetrain: D,
    shaper: Shaper,
    mode: FrameMode,
    // Drivetrain limits, read once at construction (m/s, rad/s)
    max_linear: f32,
    max_angular: f32,
    active: bool,
}

impl<D: Drivetrain> DriveCommand<D> {
    /// Create a new drive command for `drivetrain`
    ///
    /// Fails if the drivetrain reports a velocity limit that is not finite and positive
    pub fn new(drivetrain: D, config: DriveConfig) -> Result<Self, ConfigError> {
        let max_linear = drivetrain.max_linear_velocity();
        if !max_linear.is_finite() || max_linear <= 0.0 {
            return Err(ConfigError::InvalidMaxVelocity(max_linear));
        }

        let max_angular = drivetrain.max_angular_velocity();
        if !max_angular.is_finite() || max_angular <= 0.0 {
            return Err(ConfigError::InvalidMaxVelocity(max_angular));
        }

        Ok(Self {
            drivetrain,
            shaper: config.shaper,
            mode: config.initial_mode,
            max_linear,
            max_angular,
            active: false,
        })
    }

    pub fn mode(&self) -> FrameMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn drivetrain(&self) -> &D {
        &self.drivetrain
    }

    pub fn drivetrain_mut(&mut self) -> &mut D {
        &mut self.drivetrain
    }

    /// Give the drivetrain back
    pub fn into_inner(self) -> D {
        self.drivetrain
    }

    /// Switch between robot and field relative driving.  Takes effect on the next
    /// synthesized command.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        log::info!("Drive Mode: {:?}", self.mode);
    }

    /// Make the robot's current orientation the field's forward
    pub fn zero_heading(&mut self) {
        self.drivetrain.reset_heading();
        log::info!("Heading Zeroed!");
    }

    /// Scale the shaped axes to velocities, frame them and send them to the
    /// drivetrain
    ///
    /// Parameters:
    ///     shaped: (forward, strafe, rotation) each in [-1, 1]
    ///     max_linear: velocity at full translation (m/s)
    ///     max_angular: velocity at full rotation (rad/s)
    ///
    /// Returns:
    ///     The command that was sent (robot frame)
    ///
    /// Field relative translations are scaled back (direction kept) if rotating
    /// them pushed vx or vy past `max_linear`, e.g. a full diagonal at 45 degrees.
    pub fn synthesize(
        &mut self,
        shaped: ShapedAxes,
        max_linear: f32,
        max_angular: f32,
    ) -> ChassisSpeeds {
        // <v_x, v_y, w> in whichever frame the driver is using
        let velocity = Vector3::<f32>::from(shaped)
            .component_mul(&Vector3::new(max_linear, max_linear, max_angular));

        let speeds = match self.mode {
            FrameMode::RobotRelative => ChassisSpeeds::from(velocity),
            FrameMode::FieldRelative => ChassisSpeeds::from_field_relative(
                velocity[0],
                velocity[1],
                velocity[2],
                self.drivetrain.current_heading(),
            )
            .desaturate(max_linear),
        };

        log::trace!("Drive: {:?} ({:?})", speeds, self.mode);
        self.drivetrain.drive(speeds);
        speeds
    }

    /// Start hook, called when this command becomes the active command source
    pub fn initialize(&mut self) {
        self.active = true;
        log::info!("Drive Command Started ({:?})", self.mode);
    }

    /// Run one control cycle
    ///
    /// Button events are handled first (heading reset, then frame toggle) so they
    /// apply to this cycle's command.
    ///
    /// Returns the command sent, or None if the command is not active
    pub fn execute(&mut self, input: &OperatorInput) -> Option<ChassisSpeeds> {
        if !self.active {
            log::debug!("Drive Command not active, ignoring input");
            return None;
        }

        if input.reset_heading {
            self.zero_heading();
        }

        if input.toggle_frame {
            self.toggle_mode();
        }

        let shaped = self.shaper.shape_axes(input.forward, input.strafe, input.rotation);
        Some(self.synthesize(shaped, self.max_linear, self.max_angular))
    }

    /// Stop hook: stop the drivetrain so it doesn't keep running the last command
    pub fn deactivate(&mut self) -> ChassisSpeeds {
        self.drivetrain.drive(ChassisSpeeds::ZERO);
        self.active = false;
        log::info!("Drive Command Stopped");
        ChassisSpeeds::ZERO
    }
}
