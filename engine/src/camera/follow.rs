//! Follow Camera Module
//!
//! A camera slaved to the player with a fixed world-space offset. There is no
//! smoothing or interpolation: after [`FollowCamera::follow`] the camera sits
//! exactly at `player + offset` and looks straight at the player.
//! Window-system agnostic - only camera state and transforms.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Default offset: above and behind the player along +Z
pub const DEFAULT_FOLLOW_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 10.0);

/// Camera placement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Camera position relative to the player
    pub offset: Vec3,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            offset: DEFAULT_FOLLOW_OFFSET,
        }
    }
}

/// Fixed-offset chase camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    /// Camera position in world space
    pub position: Vec3,
    /// Look-at point (the player's center)
    pub target: Vec3,
    /// Camera position relative to the target
    pub offset: Vec3,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::with_offset(DEFAULT_FOLLOW_OFFSET)
    }
}

impl FollowCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera at the origin target with the given offset.
    pub fn with_offset(offset: Vec3) -> Self {
        Self {
            position: offset,
            target: Vec3::ZERO,
            offset,
        }
    }

    /// Snap to `player + offset`, looking at `player`.
    pub fn follow(&mut self, player: Vec3) {
        self.target = player;
        self.position = player + self.offset;
    }

    /// Unit vector from the camera toward its target.
    pub fn get_forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Right-handed view matrix with +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}
