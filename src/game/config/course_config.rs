//! Course Configuration
//!
//! Every tuning number the course loop reads, grouped by concern. `Default`
//! reproduces the hand-tuned values the game shipped with. All rates are per
//! frame.
//!
//! Any field may be omitted from a JSON file; missing fields take their
//! default.
//!
//! ```json
//! { "physics": { "gravity": 0.03 }, "spinner": { "push": 0.1 } }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraTuning;
use crate::game::error::{CourseError, CourseResult, read_to_string, write_string};
use crate::input::ControlTuning;
use crate::player::PLAYER_SIZE;

/// Vertical motion and out-of-bounds parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Vertical velocity set by a jump
    pub jump_impulse: f32,
    /// Falling below this Y counts as a death
    pub fall_threshold: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 0.02,
            jump_impulse: 0.4,
            fall_threshold: -10.0,
        }
    }
}

/// Spinner behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinnerTuning {
    /// Yaw added to every spinner each frame (radians)
    pub angular_speed: f32,
    /// Magnitude of the per-frame carry while touching a spinner
    pub push: f32,
}

impl Default for SpinnerTuning {
    fn default() -> Self {
        Self {
            angular_speed: 0.05,
            push: 0.05,
        }
    }
}

/// Player box parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Full extents of the player box
    pub size: Vec3,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self { size: PLAYER_SIZE }
    }
}

/// Central configuration for a course run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    pub physics: PhysicsTuning,
    pub controls: ControlTuning,
    pub spinner: SpinnerTuning,
    pub camera: CameraTuning,
    pub player: PlayerTuning,
}

impl CourseConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json_str(s: &str) -> CourseResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> CourseResult<Self> {
        Self::from_json_str(&read_to_string(path)?)
    }

    /// Write this config as pretty JSON.
    pub fn save(&self, path: &Path) -> CourseResult<()> {
        write_string(path, &serde_json::to_string_pretty(self)?)
    }

    /// Reject values the course loop cannot work with.
    ///
    /// Gravity and jump impulse must be positive so a jump always comes back
    /// down; the player box must have positive extents; every number must be
    /// finite.
    pub fn validate(&self) -> CourseResult<()> {
        let finite = [
            ("physics.gravity", self.physics.gravity),
            ("physics.jump_impulse", self.physics.jump_impulse),
            ("physics.fall_threshold", self.physics.fall_threshold),
            ("controls.move_speed", self.controls.move_speed),
            ("controls.joystick_dead_zone", self.controls.joystick_dead_zone),
            ("controls.joystick_sensitivity", self.controls.joystick_sensitivity),
            ("spinner.angular_speed", self.spinner.angular_speed),
            ("spinner.push", self.spinner.push),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CourseError::InvalidConfig(format!("{name} must be finite, got {value}")));
        }

        if self.physics.gravity <= 0.0 {
            return Err(CourseError::InvalidConfig(format!(
                "physics.gravity must be positive, got {}",
                self.physics.gravity
            )));
        }
        if self.physics.jump_impulse <= 0.0 {
            return Err(CourseError::InvalidConfig(format!(
                "physics.jump_impulse must be positive, got {}",
                self.physics.jump_impulse
            )));
        }
        if self.controls.move_speed < 0.0 || self.controls.joystick_dead_zone < 0.0 {
            return Err(CourseError::InvalidConfig(
                "controls.move_speed and controls.joystick_dead_zone must not be negative".into(),
            ));
        }
        if !self.camera.offset.is_finite() {
            return Err(CourseError::InvalidConfig("camera.offset must be finite".into()));
        }
        if !self.player.size.is_finite() || !self.player.size.cmpgt(Vec3::ZERO).all() {
            return Err(CourseError::InvalidConfig(format!(
                "player.size must be positive on every axis, got {}",
                self.player.size
            )));
        }
        Ok(())
    }

    /// Frames for a spinner to complete one full turn.
    pub fn spinner_period_frames(&self) -> f32 {
        std::f32::consts::TAU / self.spinner.angular_speed.abs()
    }
}
