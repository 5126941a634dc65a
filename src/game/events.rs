//! Course Events
//!
//! What happened during one frame, for hosts that play sounds, flash the
//! screen, or keep score. Events are listed in the order the frame produced
//! them.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Why the player was sent back to the respawn point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeathCause {
    /// Touched the hazard at this obstacle index
    Hazard { index: usize },
    /// Dropped below the fall threshold
    Fell,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CourseEvent {
    /// Airborne last frame, supported this frame
    Landed { platform: usize },
    /// Vertical velocity set to the jump impulse
    Jumped,
    Died { cause: DeathCause },
    /// Teleported to the respawn point after a death
    Respawned { at: Vec3 },
    /// The respawn point moved to this marker
    CheckpointCaptured { index: usize, respawn_point: Vec3 },
    /// A spinner carried the player
    SpinnerPushed { index: usize, delta: Vec3 },
}

/// Result of one simulated frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Frame number, starting at 1 for the first step
    pub frame: u64,
    pub events: Vec<CourseEvent>,
}

impl FrameReport {
    pub fn new(frame: u64) -> Self {
        Self {
            frame,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: CourseEvent) {
        self.events.push(event);
    }

    pub fn died(&self) -> bool {
        self.events.iter().any(|e| matches!(e, CourseEvent::Died { .. }))
    }

    pub fn landed(&self) -> bool {
        self.events.iter().any(|e| matches!(e, CourseEvent::Landed { .. }))
    }

    pub fn jumped(&self) -> bool {
        self.events.contains(&CourseEvent::Jumped)
    }

    /// Index of the last checkpoint captured this frame.
    pub fn captured_checkpoint(&self) -> Option<usize> {
        self.events.iter().rev().find_map(|e| match e {
            CourseEvent::CheckpointCaptured { index, .. } => Some(*index),
            _ => None,
        })
    }
}
