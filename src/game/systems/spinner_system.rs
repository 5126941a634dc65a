//! Spinner system - rotating bars that carry the player.
//!
//! Every spinner turns by a fixed yaw per frame whether or not the player is
//! near it. The angle is left unbounded; the push direction cycles through
//! `sin`/`cos`. Overlap is tested against the bar's yawed bounds after the
//! frame's rotation has been applied.

use glam::Vec3;

use crate::game::config::SpinnerTuning;
use crate::physics::{advance_angle, spinner_push};
use crate::player::PlayerBody;
use crate::world::{Obstacle, ObstacleKind};

/// One spinner contact during a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerContact {
    pub index: usize,
    pub delta: Vec3,
}

pub struct SpinnerSystem;

impl SpinnerSystem {
    /// Turn every spinner and push the player off each one it touches.
    ///
    /// Pushes accumulate in course order and each overlap test sees the
    /// position left by earlier pushes.
    pub fn update(body: &mut PlayerBody, obstacles: &mut [Obstacle], tuning: &SpinnerTuning) -> Vec<SpinnerContact> {
        let mut contacts = Vec::new();

        for (index, spinner) in obstacles.iter_mut().enumerate() {
            if !spinner.is(ObstacleKind::Spinner) {
                continue;
            }

            spinner.rotation_y = advance_angle(spinner.rotation_y, tuning.angular_speed);

            if body.aabb().intersects(&spinner.aabb()) {
                let delta = spinner_push(spinner.rotation_y, tuning.push);
                body.displace(delta);
                contacts.push(SpinnerContact { index, delta });
            }
        }

        contacts
    }

    /// Accumulated yaw of every spinner, in course order.
    pub fn angles(obstacles: &[Obstacle]) -> Vec<f64> {
        obstacles
            .iter()
            .filter(|o| o.is(ObstacleKind::Spinner))
            .map(|o| o.rotation_y)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spinner_at(position: Vec3) -> Obstacle {
        Obstacle::new(ObstacleKind::Spinner, position, Vec3::new(8.0, 0.5, 0.5))
    }

    #[test]
    fn test_all_spinners_turn_every_frame() {
        let mut obstacles = vec![
            spinner_at(Vec3::new(100.0, 0.0, 0.0)),
            Obstacle::new(ObstacleKind::Platform, Vec3::ZERO, Vec3::ONE),
            spinner_at(Vec3::new(-100.0, 0.0, 0.0)),
        ];
        let mut body = PlayerBody::new(Vec3::ZERO);
        let tuning = SpinnerTuning::default();

        for _ in 0..10 {
            SpinnerSystem::update(&mut body, &mut obstacles, &tuning);
        }

        let angles = SpinnerSystem::angles(&obstacles);
        assert_eq!(angles.len(), 2);
        for angle in angles {
            assert!((angle - 0.5).abs() < 1e-5);
        }
        assert_eq!(obstacles[1].rotation_y, 0.0);
    }

    #[test]
    fn test_touching_spinner_pushes_player() {
        let mut obstacles = vec![spinner_at(Vec3::ZERO)];
        let mut body = PlayerBody::new(Vec3::new(0.0, 0.5, 0.0));
        let tuning = SpinnerTuning::default();

        let contacts = SpinnerSystem::update(&mut body, &mut obstacles, &tuning);
        assert_eq!(contacts.len(), 1);

        let expected = Vec3::new(0.05 * 0.05f32.sin(), 0.0, 0.05 * 0.05f32.cos());
        assert!((contacts[0].delta - expected).length() < 1e-6);
        assert!((body.position - (Vec3::new(0.0, 0.5, 0.0) + expected)).length() < 1e-6);
    }

    #[test]
    fn test_distant_spinner_does_not_push() {
        let mut obstacles = vec![spinner_at(Vec3::new(0.0, 20.0, 0.0))];
        let mut body = PlayerBody::new(Vec3::ZERO);
        let contacts = SpinnerSystem::update(&mut body, &mut obstacles, &SpinnerTuning::default());
        assert!(contacts.is_empty());
        assert_eq!(body.position, Vec3::ZERO);
    }

    #[test]
    fn test_angle_is_not_wrapped() {
        let mut obstacles = vec![spinner_at(Vec3::new(0.0, 50.0, 0.0))];
        let mut body = PlayerBody::new(Vec3::ZERO);
        let tuning = SpinnerTuning {
            angular_speed: 1.0,
            push: 0.05,
        };
        for _ in 0..10 {
            SpinnerSystem::update(&mut body, &mut obstacles, &tuning);
        }
        assert!((obstacles[0].rotation_y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_push_direction_is_periodic() {
        let tuning = SpinnerTuning::default();
        let period = std::f32::consts::TAU / tuning.angular_speed;
        let a = spinner_push(0.3, tuning.push);
        let b = spinner_push(0.3 + f64::from(tuning.angular_speed * period), tuning.push);
        assert!((a - b).length() < 1e-5);
    }

    #[test]
    fn test_spin_rate_holds_for_an_hour() {
        let mut obstacles = vec![spinner_at(Vec3::new(0.0, 50.0, 0.0))];
        let mut body = PlayerBody::new(Vec3::ZERO);
        let tuning = SpinnerTuning::default();
        let frames = 216_000u32;

        for _ in 0..frames {
            SpinnerSystem::update(&mut body, &mut obstacles, &tuning);
        }

        let expected = f64::from(frames) * f64::from(tuning.angular_speed);
        let angle = obstacles[0].rotation_y;
        assert!((angle - expected).abs() < 1e-6, "angle {angle} drifted from {expected}");

        // Push direction after an hour matches the equivalent early phase
        let late = spinner_push(angle, tuning.push);
        let early = spinner_push(expected.rem_euclid(std::f64::consts::TAU), tuning.push);
        assert!((late - early).length() < 1e-5);
    }
}
