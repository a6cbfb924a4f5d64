//!
//! Operator input: the driver's sticks and the two drive buttons, turned into
//! one `OperatorInput` per control cycle.
//!
//! Buttons are reported as events (a press fires exactly once) rather than as
//! levels, so holding a button down does not keep toggling the frame.
//!

use core::fmt::Debug;

use embedded_hal::digital::v2::InputPin;

use crate::error::InputError;
use crate::robot::DEBOUNCE_SAMPLES;

/// Everything the drive command needs from the operator for one cycle
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct OperatorInput {
    /// Raw forward sample [-1, 1]
    pub forward: f32,
    /// Raw leftward sample [-1, 1]
    pub strafe: f32,
    /// Raw counterclockwise sample [-1, 1]
    pub rotation: f32,
    /// The reset heading button was pressed this cycle
    pub reset_heading: bool,
    /// The toggle frame button was pressed this cycle
    pub toggle_frame: bool,
}

impl OperatorInput {
    /// Stick samples with no button events
    pub const fn sticks(forward: f32, strafe: f32, rotation: f32) -> Self {
        Self {
            forward,
            strafe,
            rotation,
            reset_heading: false,
            toggle_frame: false,
        }
    }

    /// Build the cycle's input from controller sticks and button events
    pub fn from_controller(mapping: &AxisMapping, sticks: Sticks, events: ButtonEvents) -> Self {
        let (forward, strafe, rotation) = mapping.map(sticks);
        Self {
            forward,
            strafe,
            rotation,
            reset_heading: events.reset_heading,
            toggle_frame: events.toggle_frame,
        }
    }
}

/// Stick readings as the gamepad reports them, each in [-1, 1]
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Sticks {
    /// Left stick, positive right
    pub left_x: f32,
    /// Left stick, positive down
    pub left_y: f32,
    /// Right stick, positive right
    pub right_x: f32,
}

/// Which stick drives which robot axis, and whether the axis is flipped
///
/// Left stick translates, right stick x rotates.  By default every axis is
/// inverted: the gamepad reports stick up as -y and right as +x, while the robot
/// wants forward as +x, left as +y and counterclockwise as +omega.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AxisMapping {
    pub invert_forward: bool,
    pub invert_strafe: bool,
    pub invert_rotation: bool,
}

impl Default for AxisMapping {
    fn default() -> Self {
        Self {
            invert_forward: true,
            invert_strafe: true,
            invert_rotation: true,
        }
    }
}

impl AxisMapping {
    /// Map gamepad sticks to (forward, strafe, rotation)
    pub fn map(&self, sticks: Sticks) -> (f32, f32, f32) {
        (
            flip(sticks.left_y, self.invert_forward),
            flip(sticks.left_x, self.invert_strafe),
            flip(sticks.right_x, self.invert_rotation),
        )
    }
}

#[inline]
fn flip(value: f32, invert: bool) -> f32 {
    if invert { -value } else { value }
}

/// Bit positions of the drive buttons in a packed button byte
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Button {
    ResetHeading = 0,
    ToggleFrame = 1,
}

/// Pack the button levels, one bit per `Button`
pub fn encode_btn_state(reset_heading: bool, toggle_frame: bool) -> u8 {
    let mut btn = 0u8;
    if reset_heading {
        btn |= 1 << Button::ResetHeading as u8;
    }
    if toggle_frame {
        btn |= 1 << Button::ToggleFrame as u8;
    }
    btn
}

/// True when `button` went from released in `old_state` to pressed in `new_state`
pub fn button_rising(old_state: u8, new_state: u8, button: Button) -> bool {
    let mask = 1 << button as u8;
    (old_state & mask) == 0 && (new_state & mask) != 0
}

/// The button presses that happened this cycle
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ButtonEvents {
    pub reset_heading: bool,
    pub toggle_frame: bool,
}

/// Turns packed button levels (already debounced, e.g. from a remote
/// controller packet) into press events
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ButtonPanel {
    btn_last: u8,
}

impl ButtonPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this cycle's button levels
    pub fn update(&mut self, buttons: u8) -> ButtonEvents {
        let old_state = self.btn_last;
        self.btn_last = buttons;

        ButtonEvents {
            reset_heading: button_rising(old_state, buttons, Button::ResetHeading),
            toggle_frame: button_rising(old_state, buttons, Button::ToggleFrame),
        }
    }
}

/// A push button wired straight to a pin, sampled once per control cycle
pub struct DebouncedButton<P> {
    pin: P,
    /// Whether a high reading means pressed
    active_high: bool,
    /// Consecutive matching samples required to accept a new level
    samples: u8,
    /// The accepted level
    pressed: bool,
    /// The level currently being counted
    candidate: bool,
    /// How many samples in a row have read `candidate`
    count: u8,
}

impl<P, E> DebouncedButton<P>
where
    P: InputPin<Error = E>,
    E: Debug,
{
    /// Create a new debounced button using `DEBOUNCE_SAMPLES`
    pub fn new(pin: P, active_high: bool) -> Self {
        Self::with_samples(pin, active_high, DEBOUNCE_SAMPLES)
    }

    /// Create a new debounced button needing `samples` stable reads (at least 1)
    pub fn with_samples(pin: P, active_high: bool, samples: u8) -> Self {
        Self {
            pin,
            active_high,
            samples: samples.max(1),
            pressed: false,
            candidate: false,
            count: 0,
        }
    }

    /// Sample the pin.  Returns true on the cycle a press is accepted.
    pub fn update(&mut self) -> Result<bool, InputError<E>> {
        let high = self.pin.is_high().map_err(InputError::Pin)?;
        let level = high == self.active_high;

        if level == self.candidate {
            self.count = self.count.saturating_add(1);
        } else {
            self.candidate = level;
            self.count = 1;
        }

        if self.count >= self.samples && self.candidate != self.pressed {
            self.pressed = self.candidate;
            return Ok(self.pressed);
        }

        Ok(false)
    }

    /// The accepted (debounced) level
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::convert::Infallible;

    use super::*;

    struct FakePin {
        high: bool,
    }

    impl InputPin for FakePin {
        type Error = Infallible;

        fn is_high(&self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_low(&self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    struct BrokenPin;

    impl InputPin for BrokenPin {
        type Error = u8;

        fn is_high(&self) -> Result<bool, Self::Error> {
            Err(7)
        }

        fn is_low(&self) -> Result<bool, Self::Error> {
            Err(7)
        }
    }

    /// Feed `levels` to the button and collect what update returned
    fn run(button: &mut DebouncedButton<FakePin>, levels: &[bool]) -> std::vec::Vec<bool> {
        levels
            .iter()
            .map(|level| {
                button.pin_mut().high = *level;
                button.update().unwrap()
            })
            .collect()
    }

    #[test]
    fn test_button_rising() {
        let pressed = encode_btn_state(true, false);
        assert!(button_rising(0, pressed, Button::ResetHeading));
        assert!(!button_rising(pressed, pressed, Button::ResetHeading));
        assert!(!button_rising(pressed, 0, Button::ResetHeading));
        assert!(!button_rising(0, pressed, Button::ToggleFrame));
    }

    #[test]
    fn test_encode_btn_state() {
        assert_eq!(encode_btn_state(false, false), 0b00);
        assert_eq!(encode_btn_state(true, false), 0b01);
        assert_eq!(encode_btn_state(false, true), 0b10);
        assert_eq!(encode_btn_state(true, true), 0b11);
    }

    #[test]
    fn test_panel_fires_once_per_press() {
        let mut panel = ButtonPanel::new();
        let toggle = encode_btn_state(false, true);
        let toggle_pressed = ButtonEvents {
            reset_heading: false,
            toggle_frame: true,
        };

        assert_eq!(panel.update(toggle), toggle_pressed);
        // Held
        assert_eq!(panel.update(toggle), ButtonEvents::default());
        assert_eq!(panel.update(toggle), ButtonEvents::default());
        // Released then pressed again
        assert_eq!(panel.update(0), ButtonEvents::default());
        assert_eq!(panel.update(toggle), toggle_pressed);
    }

    #[test]
    fn test_panel_both_buttons() {
        let mut panel = ButtonPanel::new();
        assert_eq!(
            panel.update(encode_btn_state(true, true)),
            ButtonEvents {
                reset_heading: true,
                toggle_frame: true,
            }
        );
    }

    #[test]
    fn test_debounce_accepts_stable_press() {
        let mut button = DebouncedButton::with_samples(FakePin { high: false }, true, 3);
        let fired = run(&mut button, &[false, true, true, true, true, true]);
        assert_eq!(fired, [false, false, false, true, false, false]);
        assert!(button.is_pressed());
    }

    #[test]
    fn test_debounce_rejects_bounce() {
        let mut button = DebouncedButton::with_samples(FakePin { high: false }, true, 3);
        let fired = run(&mut button, &[true, false, true, true, false, true, false]);
        assert!(fired.iter().all(|fired| !fired));
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_debounce_one_event_per_press() {
        let mut button = DebouncedButton::with_samples(FakePin { high: false }, true, 2);
        let fired = run(
            &mut button,
            &[true, true, true, true, false, false, true, true, true],
        );
        assert_eq!(fired.iter().filter(|fired| **fired).count(), 2);
    }

    #[test]
    fn test_debounce_active_low() {
        let mut button = DebouncedButton::with_samples(FakePin { high: true }, false, 1);
        let fired = run(&mut button, &[true, false, false, true]);
        assert_eq!(fired, [false, true, false, false]);
    }

    #[test]
    fn test_zero_samples_acts_as_one() {
        let mut button = DebouncedButton::with_samples(FakePin { high: false }, true, 0);
        let fired = run(&mut button, &[true]);
        assert_eq!(fired, [true]);
    }

    #[test]
    fn test_pin_error() {
        let mut button = DebouncedButton::new(BrokenPin, true);
        assert_eq!(button.update(), Err(InputError::Pin(7)));
    }

    #[test]
    fn test_default_mapping_inverts() {
        let sticks = Sticks {
            left_x: 0.25,
            left_y: -0.5,
            right_x: 0.75,
        };
        assert_eq!(AxisMapping::default().map(sticks), (0.5, -0.25, -0.75));
    }

    #[test]
    fn test_straight_mapping() {
        let mapping = AxisMapping {
            invert_forward: false,
            invert_strafe: false,
            invert_rotation: false,
        };
        let sticks = Sticks {
            left_x: 0.25,
            left_y: -0.5,
            right_x: 0.75,
        };
        assert_eq!(mapping.map(sticks), (-0.5, 0.25, 0.75));
    }

    #[test]
    fn test_from_controller() {
        let input = OperatorInput::from_controller(
            &AxisMapping::default(),
            Sticks {
                left_x: 0.0,
                left_y: -1.0,
                right_x: 0.0,
            },
            ButtonEvents {
                reset_heading: true,
                toggle_frame: false,
            },
        );
        assert_eq!(input.forward, 1.0);
        assert!(input.reset_heading);
        assert!(!input.toggle_frame);
    }
}
