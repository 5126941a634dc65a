//! Collision detection module
//!
//! Axis-aligned bounding boxes for every course element and the player.
//! All contact tests in the course are brute-force box overlaps; there is no
//! broad phase and no swept test.
//!
//! # Rotated Boxes
//!
//! Spinners rotate about +Y. Their collision volume is the world-space AABB
//! that encloses the rotated box, so it grows and shrinks as the spinner turns.
//!
//! # Example
//!
//! ```
//! use obby_engine::physics::collision::Aabb;
//! use glam::Vec3;
//!
//! let player = Aabb::from_center_size(Vec3::new(0.0, 1.0, 0.0), Vec3::ONE);
//! let floor = Aabb::from_center_size(Vec3::ZERO, Vec3::new(5.0, 1.0, 5.0));
//!
//! // Faces touching at y = 0.5 still count as contact
//! assert!(player.intersects(&floor));
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` with full extents `size`.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// World bounds of a box of extents `size` centered on `center` and
    /// rotated by `yaw` radians about +Y.
    ///
    /// Projects the rotated half-extents back onto the X and Z axes:
    ///
    /// ```text
    /// half_x = |cos(yaw)| * hx + |sin(yaw)| * hz
    /// half_z = |sin(yaw)| * hx + |cos(yaw)| * hz
    /// ```
    pub fn from_yawed_box(center: Vec3, size: Vec3, yaw: f32) -> Self {
        let half = size * 0.5;
        let (sin, cos) = yaw.sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());

        let extent = Vec3::new(
            cos * half.x + sin * half.z,
            half.y,
            sin * half.x + cos * half.z,
        );

        Self {
            min: center - extent,
            max: center + extent,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Y of the top face.
    pub fn top(&self) -> f32 {
        self.max.y
    }

    /// Y of the bottom face.
    pub fn bottom(&self) -> f32 {
        self.min.y
    }

    /// Inclusive overlap test on all three axes.
    ///
    /// Boxes that only share a face are considered intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPS: f32 = 1e-5;

    #[test]
    fn test_from_center_size() {
        let aabb = Aabb::from_center_size(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.size(), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_size(Vec3::new(0.5, 0.5, 0.5), Vec3::ONE);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_touching_faces() {
        let a = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_size(Vec3::new(1.0, 0.0, 0.0), Vec3::ONE);
        assert!(a.intersects(&b), "shared face must count as contact");
    }

    #[test]
    fn test_intersects_separated_on_one_axis() {
        let a = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_size(Vec3::new(0.0, 0.0, 1.01), Vec3::ONE);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_yawed_box_unrotated_matches_plain() {
        let size = Vec3::new(8.0, 0.5, 0.5);
        let plain = Aabb::from_center_size(Vec3::ZERO, size);
        let yawed = Aabb::from_yawed_box(Vec3::ZERO, size, 0.0);
        assert!((plain.min - yawed.min).length() < EPS);
        assert!((plain.max - yawed.max).length() < EPS);
    }

    #[test]
    fn test_yawed_box_quarter_turn_swaps_extents() {
        let yawed = Aabb::from_yawed_box(Vec3::ZERO, Vec3::new(8.0, 0.5, 0.5), FRAC_PI_2);
        let size = yawed.size();
        assert!((size.x - 0.5).abs() < EPS, "x extent {}", size.x);
        assert!((size.z - 8.0).abs() < EPS, "z extent {}", size.z);
        assert!((size.y - 0.5).abs() < EPS);
    }

    #[test]
    fn test_yawed_box_diagonal_grows() {
        let yawed = Aabb::from_yawed_box(Vec3::ZERO, Vec3::new(8.0, 0.5, 0.5), FRAC_PI_4);
        let expected = (4.0 + 0.25) * FRAC_PI_4.cos() * 2.0;
        assert!((yawed.size().x - expected).abs() < 1e-4);
        assert!((yawed.size().z - expected).abs() < 1e-4);
    }
}
