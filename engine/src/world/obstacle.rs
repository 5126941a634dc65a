//! Course Obstacles
//!
//! Every element of a course is a box with a kind tag. The kind decides what
//! happens when the player's box overlaps it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::{Aabb, wrap_angle};

/// Behaviour tag for a course element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleKind {
    /// Solid ground the player can land on
    Platform,
    /// Kill brick: touching it sends the player back to the respawn point
    Hazard,
    /// Rotating bar that carries the player sideways
    Spinner,
    /// Marker that moves the respawn point to its own position
    Checkpoint,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Platform,
        ObstacleKind::Hazard,
        ObstacleKind::Spinner,
        ObstacleKind::Checkpoint,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ObstacleKind::Platform => "platform",
            ObstacleKind::Hazard => "hazard",
            ObstacleKind::Spinner => "spinner",
            ObstacleKind::Checkpoint => "checkpoint",
        }
    }
}

/// A single course element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Box center in world space
    pub position: Vec3,
    /// Full box extents before rotation
    pub size: Vec3,
    /// Accumulated rotation about +Y in radians, never wrapped. Only spinners
    /// change it at runtime.
    #[serde(default)]
    pub rotation_y: f64,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, position: Vec3, size: Vec3) -> Self {
        Self {
            kind,
            position,
            size,
            rotation_y: 0.0,
        }
    }

    /// Current yaw reduced to `[0, 2pi)`.
    pub fn yaw(&self) -> f32 {
        wrap_angle(self.rotation_y)
    }

    /// World bounds, accounting for the current yaw.
    pub fn aabb(&self) -> Aabb {
        if self.rotation_y == 0.0 {
            Aabb::from_center_size(self.position, self.size)
        } else {
            Aabb::from_yawed_box(self.position, self.size, self.yaw())
        }
    }

    pub fn is(&self, kind: ObstacleKind) -> bool {
        self.kind == kind
    }

    /// Finite position, yaw, and strictly positive finite extents.
    pub fn is_well_formed(&self) -> bool {
        self.position.is_finite()
            && self.size.is_finite()
            && self.size.cmpgt(Vec3::ZERO).all()
            && self.rotation_y.is_finite()
    }
}
