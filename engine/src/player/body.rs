//! Player Body
//!
//! The player's physical state on the course: a box with a vertical velocity
//! and a grounded flag. Horizontal motion has no velocity; input moves the box
//! directly each frame.
//!
//! # Usage
//!
//! ```
//! use obby_engine::player::PlayerBody;
//! use glam::Vec3;
//!
//! let mut body = PlayerBody::new(Vec3::new(0.0, 5.0, 0.0));
//! body.apply_gravity(0.02);
//! assert!(body.position.y < 5.0);
//!
//! body.rest_on(0.5);
//! assert!(body.grounded);
//! assert_eq!(body.bottom(), 0.5);
//! ```

use glam::Vec3;

use crate::physics::{Aabb, euler_step};

/// Default player box extents
pub const PLAYER_SIZE: Vec3 = Vec3::ONE;

/// Default spawn position when a course does not provide one
pub const DEFAULT_SPAWN: Vec3 = Vec3::new(0.0, 5.0, 0.0);

/// Physical state of the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerBody {
    /// Center of the player box in world space
    pub position: Vec3,
    /// Vertical velocity in units per frame (positive = upward)
    pub vertical_velocity: f32,
    /// Whether a platform supported the player this frame
    pub grounded: bool,
    /// Full box extents
    pub size: Vec3,
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self::new(DEFAULT_SPAWN)
    }
}

impl PlayerBody {
    /// Create a body of the default size at `position`, at rest and airborne.
    pub fn new(position: Vec3) -> Self {
        Self::with_size(position, PLAYER_SIZE)
    }

    pub fn with_size(position: Vec3, size: Vec3) -> Self {
        Self {
            position,
            vertical_velocity: 0.0,
            grounded: false,
            size,
        }
    }

    /// Half of the box height.
    pub fn half_height(&self) -> f32 {
        self.size.y * 0.5
    }

    /// Current world-space box.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size)
    }

    /// Y of the bottom face.
    pub fn bottom(&self) -> f32 {
        self.position.y - self.half_height()
    }

    /// Move the box without touching velocity.
    pub fn displace(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Apply one frame of gravity: velocity first, then position.
    pub fn apply_gravity(&mut self, gravity: f32) {
        let (y, velocity) = euler_step(self.position.y, self.vertical_velocity, gravity);
        self.position.y = y;
        self.vertical_velocity = velocity;
    }

    /// Snap the box so its bottom sits on `top`, stop vertical motion and
    /// mark the body grounded.
    pub fn rest_on(&mut self, top: f32) {
        self.position.y = top + self.half_height();
        self.vertical_velocity = 0.0;
        self.grounded = true;
    }

    /// Set vertical velocity to `impulse`.
    pub fn launch(&mut self, impulse: f32) {
        self.vertical_velocity = impulse;
    }

    /// Move to `point` and stop vertical motion.
    pub fn teleport(&mut self, point: Vec3) {
        self.position = point;
        self.vertical_velocity = 0.0;
    }
}
