//! Input Module
//!
//! Keyboard and touch state for the course, reduced once per frame into a
//! [`FrameInput`]. This module does not talk to any windowing system; the host
//! forwards key names and touch coordinates.
//!
//! # Example
//!
//! ```
//! use obby_engine::input::{ControlTuning, InputState};
//!
//! let tuning = ControlTuning::default();
//! let mut input = InputState::new();
//!
//! input.keyboard.handle_key_name("d", true);
//! input.keyboard.handle_key_name(" ", true);
//!
//! let frame = input.take_frame_input(&tuning);
//! assert!(frame.displacement.x > 0.0);
//! assert!(frame.jump_held);
//! ```

pub mod keyboard;
pub mod touch;

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub use keyboard::{KeyCode, KeyboardState, MovementKeys};
pub use touch::{JumpButton, TouchJoystick, TouchPoint};

/// Control feel parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlTuning {
    /// Keyboard movement per frame per held direction
    pub move_speed: f32,
    /// Joystick drag below this many pixels on an axis is ignored
    pub joystick_dead_zone: f32,
    /// World units per pixel of joystick drag, per move event
    pub joystick_sensitivity: f32,
    /// When false the touch jump button launches even in mid-air
    pub touch_jump_requires_ground: bool,
}

impl Default for ControlTuning {
    fn default() -> Self {
        Self {
            move_speed: 0.05,
            joystick_dead_zone: 10.0,
            joystick_sensitivity: 0.002,
            touch_jump_requires_ground: false,
        }
    }
}

/// Everything the course needs from input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Horizontal displacement to apply this frame (Y is always zero)
    pub displacement: Vec3,
    /// Jump key held: launches on any grounded frame
    pub jump_held: bool,
    /// Touch jump pressed since the last frame: a one-shot launch
    pub jump_impulse: bool,
}

impl FrameInput {
    /// No movement, no jump.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(displacement: Vec3) -> Self {
        Self {
            displacement,
            ..Self::default()
        }
    }

    pub fn jumping() -> Self {
        Self {
            jump_held: true,
            ..Self::default()
        }
    }
}

/// Combined keyboard and touch state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub joystick: TouchJoystick,
    pub jump_button: JumpButton,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a joystick move using the configured dead zone and sensitivity.
    pub fn joystick_move(&mut self, x: f32, y: f32, tuning: &ControlTuning) -> Vec3 {
        self.joystick
            .touch_move(x, y, tuning.joystick_dead_zone, tuning.joystick_sensitivity)
    }

    /// Reduce the current state to one frame of input.
    ///
    /// Held keys are sampled; queued joystick displacement and jump presses
    /// are drained so they apply exactly once.
    pub fn take_frame_input(&mut self, tuning: &ControlTuning) -> FrameInput {
        FrameInput {
            displacement: self.keyboard.displacement(tuning.move_speed) + self.joystick.drain(),
            jump_held: self.keyboard.jump_held(),
            jump_impulse: self.jump_button.take(),
        }
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.joystick.reset();
        self.jump_button.reset();
    }

    /// Check if any input would move or launch the player.
    pub fn is_active(&self) -> bool {
        self.keyboard.movement.any_pressed() || self.joystick.is_active()
    }
}
