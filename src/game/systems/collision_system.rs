//! Collision system - player contact against every course element.
//!
//! Each pass walks the whole obstacle list in order and tests the player's
//! current box, so a snap or teleport made for one obstacle is visible to the
//! next test in the same pass. Pure game logic, no rendering.

use glam::Vec3;

use crate::player::PlayerBody;
use crate::world::{Obstacle, ObstacleKind};

/// Stateless collision passes over a course's obstacles.
pub struct CollisionSystem;

impl CollisionSystem {
    /// Land the player on every platform it overlaps.
    ///
    /// A platform supports the player when the boxes intersect and the
    /// player's bottom is at or below the platform's top; the player is
    /// snapped onto the top with zero vertical velocity. Only the vertical
    /// relationship is considered: touching a platform's side or underside
    /// also lifts the player onto it.
    ///
    /// Clears `grounded` first. Returns the index of the last supporting
    /// platform, if any.
    pub fn land_on_platforms(body: &mut PlayerBody, obstacles: &[Obstacle]) -> Option<usize> {
        body.grounded = false;
        let mut support = None;

        for (index, platform) in obstacles.iter().enumerate() {
            if !platform.is(ObstacleKind::Platform) {
                continue;
            }

            let platform_box = platform.aabb();
            if body.aabb().intersects(&platform_box) && body.bottom() <= platform_box.top() {
                body.rest_on(platform_box.top());
                support = Some(index);
            }
        }

        support
    }

    /// Send the player to `respawn_point` for every hazard it overlaps.
    ///
    /// After a teleport the remaining hazards are tested at the new position.
    /// Returns the indices of hazards that triggered, in order.
    pub fn resolve_hazards(body: &mut PlayerBody, obstacles: &[Obstacle], respawn_point: Vec3) -> Vec<usize> {
        let mut hits = Vec::new();

        for (index, hazard) in obstacles.iter().enumerate() {
            if hazard.is(ObstacleKind::Hazard) && body.aabb().intersects(&hazard.aabb()) {
                body.teleport(respawn_point);
                hits.push(index);
            }
        }

        hits
    }

    /// Move `respawn_point` to every checkpoint marker the player overlaps.
    ///
    /// With several overlapping markers the last one in course order wins.
    /// Returns the index of that marker, if any.
    pub fn capture_checkpoints(body: &PlayerBody, obstacles: &[Obstacle], respawn_point: &mut Vec3) -> Option<usize> {
        let player_box = body.aabb();
        let mut captured = None;

        for (index, marker) in obstacles.iter().enumerate() {
            if marker.is(ObstacleKind::Checkpoint) && player_box.intersects(&marker.aabb()) {
                *respawn_point = marker.position;
                captured = Some(index);
            }
        }

        captured
    }

    /// Whether the player has dropped out of the course.
    pub fn below_fall_threshold(body: &PlayerBody, fall_threshold: f32) -> bool {
        body.position.y < fall_threshold
    }
}
