//! Course Layout
//!
//! The static description of a course: a spawn point and an ordered list of
//! obstacles. Order matters at runtime because contacts are resolved in list
//! order (for example, the last overlapping checkpoint wins).
//!
//! Layouts serialize to JSON so courses can be authored, generated and shared
//! as files.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::game::error::{CourseError, CourseResult, read_to_string, write_string};
use crate::player::DEFAULT_SPAWN;
use crate::world::{Obstacle, ObstacleKind};

// ============================================================================
// ELEMENT DIMENSIONS
// ============================================================================

/// Default platform footprint (width along X, depth along Z)
pub const PLATFORM_FOOTPRINT: (f32, f32) = (5.0, 5.0);
/// Platform thickness
pub const PLATFORM_HEIGHT: f32 = 1.0;

/// Default kill brick footprint
pub const KILL_BRICK_FOOTPRINT: (f32, f32) = (3.0, 3.0);
/// Kill brick thickness
pub const KILL_BRICK_HEIGHT: f32 = 0.5;

/// Spinner bar extents
pub const SPINNER_SIZE: Vec3 = Vec3::new(8.0, 0.5, 0.5);

/// Checkpoint marker extents
pub const CHECKPOINT_MARKER_SIZE: Vec3 = Vec3::new(3.0, 1.0, 3.0);
/// Height of the marker center above its base platform center
pub const CHECKPOINT_MARKER_LIFT: f32 = 1.5;

// ============================================================================
// LAYOUT
// ============================================================================

/// A complete course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseLayout {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Where the player starts, and respawns until a checkpoint is touched
    #[serde(default = "default_spawn")]
    pub spawn: Vec3,
    /// Obstacles in resolution order
    pub obstacles: Vec<Obstacle>,
}

fn default_spawn() -> Vec3 {
    DEFAULT_SPAWN
}

impl Default for CourseLayout {
    fn default() -> Self {
        Self::new("untitled")
    }
}

impl CourseLayout {
    /// Empty course spawning at the default spawn point.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spawn: DEFAULT_SPAWN,
            obstacles: Vec::new(),
        }
    }

    pub fn with_spawn(mut self, spawn: Vec3) -> Self {
        self.spawn = spawn;
        self
    }

    /// Append an arbitrary obstacle. Returns its index.
    pub fn push(&mut self, obstacle: Obstacle) -> usize {
        self.obstacles.push(obstacle);
        self.obstacles.len() - 1
    }

    /// Add a `width x 1 x depth` platform centered on `position`.
    pub fn add_platform(&mut self, position: Vec3, width: f32, depth: f32) -> usize {
        self.push(Obstacle::new(
            ObstacleKind::Platform,
            position,
            Vec3::new(width, PLATFORM_HEIGHT, depth),
        ))
    }

    /// Add a platform with the default 5 x 5 footprint.
    pub fn add_default_platform(&mut self, position: Vec3) -> usize {
        let (w, d) = PLATFORM_FOOTPRINT;
        self.add_platform(position, w, d)
    }

    /// Add a `width x 0.5 x depth` kill brick centered on `position`.
    pub fn add_kill_brick(&mut self, position: Vec3, width: f32, depth: f32) -> usize {
        self.push(Obstacle::new(
            ObstacleKind::Hazard,
            position,
            Vec3::new(width, KILL_BRICK_HEIGHT, depth),
        ))
    }

    /// Add a kill brick with the default 3 x 3 footprint.
    pub fn add_default_kill_brick(&mut self, position: Vec3) -> usize {
        let (w, d) = KILL_BRICK_FOOTPRINT;
        self.add_kill_brick(position, w, d)
    }

    /// Add an 8 x 0.5 x 0.5 spinner bar, initially unrotated.
    pub fn add_spinner(&mut self, position: Vec3) -> usize {
        self.push(Obstacle::new(ObstacleKind::Spinner, position, SPINNER_SIZE))
    }

    /// Add a checkpoint: a default platform at `position` and a marker
    /// hovering 1.5 above it. The marker position becomes the respawn point
    /// when touched.
    ///
    /// Returns the index of the marker.
    pub fn add_checkpoint(&mut self, position: Vec3) -> usize {
        self.add_default_platform(position);
        self.push(Obstacle::new(
            ObstacleKind::Checkpoint,
            position + Vec3::Y * CHECKPOINT_MARKER_LIFT,
            CHECKPOINT_MARKER_SIZE,
        ))
    }

    /// The hand-built course: a rising run along +X with four kill bricks,
    /// two spinners and two checkpoints.
    pub fn classic() -> Self {
        let mut course = Self::new("classic");

        course.add_default_platform(Vec3::new(0.0, 0.0, 0.0));
        course.add_default_platform(Vec3::new(6.0, 2.0, -3.0));
        course.add_default_kill_brick(Vec3::new(12.0, 1.0, 0.0));
        course.add_default_platform(Vec3::new(12.0, 4.0, 0.0));
        course.add_default_platform(Vec3::new(18.0, 6.0, -3.0));
        course.add_spinner(Vec3::new(20.0, 8.0, 0.0));
        course.add_default_platform(Vec3::new(24.0, 10.0, 0.0));
        course.add_default_kill_brick(Vec3::new(30.0, 9.0, 0.0));
        course.add_default_platform(Vec3::new(30.0, 12.0, 0.0));
        course.add_checkpoint(Vec3::new(36.0, 14.0, -3.0));
        course.add_default_platform(Vec3::new(42.0, 16.0, 0.0));
        course.add_default_kill_brick(Vec3::new(48.0, 15.0, 0.0));
        course.add_default_platform(Vec3::new(54.0, 17.0, 0.0));
        course.add_spinner(Vec3::new(60.0, 18.0, 0.0));
        course.add_default_platform(Vec3::new(66.0, 20.0, 0.0));
        course.add_default_kill_brick(Vec3::new(72.0, 18.0, 0.0));
        course.add_default_platform(Vec3::new(78.0, 22.0, -3.0));
        course.add_checkpoint(Vec3::new(84.0, 24.0, 0.0));
        course.add_default_platform(Vec3::new(90.0, 26.0, 0.0));

        course
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Number of obstacles of `kind`.
    pub fn count(&self, kind: ObstacleKind) -> usize {
        self.obstacles.iter().filter(|o| o.is(kind)).count()
    }

    /// Indexed obstacles of `kind`, in resolution order.
    pub fn of_kind(&self, kind: ObstacleKind) -> impl Iterator<Item = (usize, &Obstacle)> {
        self.obstacles.iter().enumerate().filter(move |(_, o)| o.is(kind))
    }

    /// Respawn points the course offers, in order.
    pub fn checkpoint_positions(&self) -> Vec<Vec3> {
        self.of_kind(ObstacleKind::Checkpoint).map(|(_, o)| o.position).collect()
    }

    /// Highest platform top, if any platform exists.
    pub fn highest_platform_top(&self) -> Option<f32> {
        self.of_kind(ObstacleKind::Platform)
            .map(|(_, o)| o.aabb().top())
            .reduce(f32::max)
    }

    /// Check the layout can be simulated.
    ///
    /// An empty course, a non-finite spawn, or any malformed obstacle is an
    /// error. A course without checkpoints is allowed but logged.
    pub fn validate(&self) -> CourseResult<()> {
        if self.obstacles.is_empty() {
            return Err(CourseError::InvalidLayout(format!("course '{}' has no obstacles", self.name)));
        }
        if !self.spawn.is_finite() {
            return Err(CourseError::InvalidLayout(format!("spawn {} is not finite", self.spawn)));
        }
        if let Some((index, obstacle)) = self.obstacles.iter().enumerate().find(|(_, o)| !o.is_well_formed()) {
            return Err(CourseError::InvalidLayout(format!(
                "{} #{index} is malformed: position {}, size {}",
                obstacle.kind.name(),
                obstacle.position,
                obstacle.size
            )));
        }
        if self.count(ObstacleKind::Checkpoint) == 0 {
            warn!(course = %self.name, "course has no checkpoints; every death returns to spawn");
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------------

    pub fn to_json(&self) -> CourseResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a layout from JSON.
    pub fn from_json_str(s: &str) -> CourseResult<Self> {
        let layout: Self = serde_json::from_str(s)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn save(&self, path: &Path) -> CourseResult<()> {
        write_string(path, &self.to_json()?)
    }

    pub fn load(path: &Path) -> CourseResult<Self> {
        Self::from_json_str(&read_to_string(path)?)
    }
}
