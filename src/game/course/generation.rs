//! Procedural Course Generation
//!
//! A short loop that walks forward along +X, climbing a fixed amount per
//! segment, and picks a random lateral lane and a random segment type each
//! step. Checkpoints are dropped at a fixed cadence and the course ends on a
//! wide goal platform.
//!
//! Generated courses are not checked for completability. A gap, spinner or
//! brick placement can make a segment impossible; that is accepted.

use glam::Vec3;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::layout::CourseLayout;
use crate::game::error::{CourseError, CourseResult};
use crate::world::ObstacleKind;

/// Width and depth of the final goal platform
pub const GOAL_FOOTPRINT: (f32, f32) = (8.0, 8.0);

/// Knobs for [`generate_course`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    /// Number of segments after the starting platform (goal excluded)
    pub segments: u32,
    /// Forward distance between consecutive platform centers
    pub step: f32,
    /// Height gained per segment
    pub rise: f32,
    /// Candidate Z lanes; one is picked per segment
    pub lateral_offsets: Vec<f32>,
    /// Probability that a segment has a kill brick in its gap
    pub hazard_chance: f64,
    /// Probability that a segment has a spinner in its gap
    pub spinner_chance: f64,
    /// Every Nth segment is a checkpoint (0 disables)
    pub checkpoint_every: u32,
    /// Fixed seed for a reproducible course; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            segments: 16,
            step: 6.0,
            rise: 2.0,
            lateral_offsets: vec![-3.0, 0.0, 3.0],
            hazard_chance: 0.3,
            spinner_chance: 0.15,
            checkpoint_every: 6,
            seed: None,
        }
    }
}

impl GeneratorParams {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Reject knobs that would produce a malformed course.
    ///
    /// Chances must lie in `[0, 1]`; step, rise and lanes must be finite.
    /// [`generate_course`] still tolerates bad chances by treating them as 0.
    pub fn validate(&self) -> CourseResult<()> {
        for (name, chance) in [("hazard_chance", self.hazard_chance), ("spinner_chance", self.spinner_chance)] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(CourseError::InvalidConfig(format!("{name} must be within [0, 1], got {chance}")));
            }
        }
        for (name, value) in [("step", self.step), ("rise", self.rise)] {
            if !value.is_finite() {
                return Err(CourseError::InvalidConfig(format!("{name} must be finite, got {value}")));
            }
        }
        if self.lateral_offsets.iter().any(|z| !z.is_finite()) {
            return Err(CourseError::InvalidConfig("lateral_offsets must all be finite".into()));
        }
        Ok(())
    }
}

/// Clamp a probability to `[0, 1]`; NaN and infinities count as 0.
fn chance(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 }
}

/// Segment type picked for one step of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Plain,
    Hazard,
    Spinner,
    Checkpoint,
}

/// Build a random course.
///
/// The layout name records the seed that was used, so an unseeded course can
/// be regenerated later with `GeneratorParams::seeded`.
pub fn generate_course(params: &GeneratorParams) -> CourseLayout {
    let seed = params.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut course = CourseLayout::new(format!("generated-{seed}"));
    let mut previous = Vec3::ZERO;
    course.add_default_platform(previous);

    for index in 1..=params.segments {
        let lane = pick_lane(&mut rng, &params.lateral_offsets);
        let current = Vec3::new(previous.x + params.step, previous.y + params.rise, lane);
        let gap = (previous + current) * 0.5;

        match pick_segment(&mut rng, params, index) {
            Segment::Checkpoint => {
                course.add_checkpoint(current);
            }
            Segment::Hazard => {
                // Below the jump arc, in the gap
                course.add_default_kill_brick(Vec3::new(gap.x, previous.y - 1.0, gap.z));
                course.add_default_platform(current);
            }
            Segment::Spinner => {
                course.add_spinner(Vec3::new(gap.x, previous.y + params.rise, gap.z));
                course.add_default_platform(current);
            }
            Segment::Plain => {
                course.add_default_platform(current);
            }
        }

        previous = current;
    }

    let (w, d) = GOAL_FOOTPRINT;
    course.add_platform(
        Vec3::new(previous.x + params.step, previous.y + params.rise, 0.0),
        w,
        d,
    );

    info!(
        course = %course.name,
        obstacles = course.len(),
        hazards = course.count(ObstacleKind::Hazard),
        spinners = course.count(ObstacleKind::Spinner),
        checkpoints = course.count(ObstacleKind::Checkpoint),
        "generated course"
    );

    course
}

fn pick_lane(rng: &mut StdRng, lanes: &[f32]) -> f32 {
    if lanes.is_empty() {
        0.0
    } else {
        lanes[rng.gen_range(0..lanes.len())]
    }
}

fn pick_segment(rng: &mut StdRng, params: &GeneratorParams, index: u32) -> Segment {
    if params.checkpoint_every > 0 && index % params.checkpoint_every == 0 {
        return Segment::Checkpoint;
    }

    let hazard = chance(params.hazard_chance);
    let spinner = chance(params.spinner_chance).min(1.0 - hazard);
    let roll: f64 = rng.gen_range(0.0..1.0);

    if roll < hazard {
        Segment::Hazard
    } else if roll < hazard + spinner {
        Segment::Spinner
    } else {
        Segment::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_course() {
        let a = generate_course(&GeneratorParams::seeded(7));
        let b = generate_course(&GeneratorParams::seeded(7));
        assert_eq!(a, b);
        assert_eq!(a.name, "generated-7");
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_course(&GeneratorParams::seeded(1));
        let b = generate_course(&GeneratorParams::seeded(2));
        assert_ne!(a.obstacles, b.obstacles);
    }

    #[test]
    fn test_checkpoint_cadence() {
        let params = GeneratorParams {
            segments: 12,
            checkpoint_every: 4,
            ..GeneratorParams::seeded(3)
        };
        let course = generate_course(&params);
        assert_eq!(course.count(ObstacleKind::Checkpoint), 3);
    }

    #[test]
    fn test_no_checkpoints_when_disabled() {
        let params = GeneratorParams {
            checkpoint_every: 0,
            ..GeneratorParams::seeded(3)
        };
        assert_eq!(generate_course(&params).count(ObstacleKind::Checkpoint), 0);
    }

    #[test]
    fn test_platform_per_segment_plus_start_and_goal() {
        let params = GeneratorParams {
            segments: 10,
            ..GeneratorParams::seeded(11)
        };
        let course = generate_course(&params);
        // Every segment, checkpoints included, contributes exactly one platform
        assert_eq!(course.count(ObstacleKind::Platform), 12);
        assert!(course.validate().is_ok());
    }

    #[test]
    fn test_course_climbs() {
        let params = GeneratorParams {
            segments: 5,
            rise: 2.0,
            ..GeneratorParams::seeded(5)
        };
        let course = generate_course(&params);
        // Goal sits one rise above the fifth segment
        assert_eq!(course.highest_platform_top(), Some(12.0 + 0.5));
    }

    #[test]
    fn test_all_plain_when_chances_zero() {
        let params = GeneratorParams {
            hazard_chance: 0.0,
            spinner_chance: 0.0,
            checkpoint_every: 0,
            ..GeneratorParams::seeded(9)
        };
        let course = generate_course(&params);
        assert_eq!(course.count(ObstacleKind::Hazard), 0);
        assert_eq!(course.count(ObstacleKind::Spinner), 0);
        assert_eq!(course.len(), params.segments as usize + 2);
    }

    #[test]
    fn test_unseeded_records_seed() {
        let course = generate_course(&GeneratorParams::default());
        let seed: u64 = course.name.trim_start_matches("generated-").parse().unwrap();
        let again = generate_course(&GeneratorParams::seeded(seed));
        assert_eq!(course, again);
    }

    #[test]
    fn test_nan_chances_generate_plain_course() {
        let params = GeneratorParams {
            hazard_chance: f64::NAN,
            spinner_chance: f64::NAN,
            checkpoint_every: 0,
            ..GeneratorParams::seeded(13)
        };
        let course = generate_course(&params);
        assert_eq!(course.count(ObstacleKind::Hazard), 0);
        assert_eq!(course.count(ObstacleKind::Spinner), 0);
        assert!(course.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_chances_are_clamped() {
        let params = GeneratorParams {
            hazard_chance: 2.0,
            spinner_chance: f64::INFINITY,
            checkpoint_every: 0,
            ..GeneratorParams::seeded(13)
        };
        let course = generate_course(&params);
        assert_eq!(course.count(ObstacleKind::Hazard), params.segments as usize);
        assert_eq!(course.count(ObstacleKind::Spinner), 0);
    }

    #[test]
    fn test_validate_rejects_bad_params() {
        assert!(GeneratorParams::default().validate().is_ok());

        let bad = [
            GeneratorParams {
                hazard_chance: f64::NAN,
                ..GeneratorParams::default()
            },
            GeneratorParams {
                spinner_chance: -0.1,
                ..GeneratorParams::default()
            },
            GeneratorParams {
                hazard_chance: 1.5,
                ..GeneratorParams::default()
            },
            GeneratorParams {
                step: f32::NAN,
                ..GeneratorParams::default()
            },
            GeneratorParams {
                rise: f32::INFINITY,
                ..GeneratorParams::default()
            },
            GeneratorParams {
                lateral_offsets: vec![0.0, f32::NAN],
                ..GeneratorParams::default()
            },
        ];
        for params in bad {
            let err = params.validate().unwrap_err();
            assert!(matches!(err, CourseError::InvalidConfig(_)), "{params:?}");
        }
    }
}
