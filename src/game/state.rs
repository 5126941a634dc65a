//! Course State
//!
//! Central state struct that owns one play-through of a course: the player,
//! the live obstacle list (spinners turn), the respawn point and the camera.
//! [`CourseState::step`] advances everything by exactly one frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::camera::FollowCamera;
use crate::game::config::CourseConfig;
use crate::game::course::CourseLayout;
use crate::game::error::CourseResult;
use crate::game::events::{CourseEvent, DeathCause, FrameReport};
use crate::game::systems::{CollisionSystem, SpinnerSystem};
use crate::input::FrameInput;
use crate::player::PlayerBody;
use crate::world::Obstacle;

/// Running totals since creation or the last [`CourseState::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub frames: u64,
    /// Hazard contacts and falls
    pub deaths: u32,
    /// Deaths caused by dropping below the fall threshold
    pub falls: u32,
    pub checkpoints_captured: u32,
    pub jumps: u32,
}

/// One play-through of a course.
pub struct CourseState {
    // === Course ===
    /// Layout as loaded; never mutated
    layout: CourseLayout,
    /// Working copy of the obstacles; spinner yaw changes each frame
    obstacles: Vec<Obstacle>,
    config: CourseConfig,

    // === Player ===
    body: PlayerBody,
    respawn_point: Vec3,

    // === View ===
    camera: FollowCamera,

    // === Bookkeeping ===
    stats: RunStats,
}

impl CourseState {
    /// Place the player at the layout's spawn with the camera already
    /// following it. Neither argument is validated here; see [`Self::validated`].
    pub fn new(layout: CourseLayout, config: CourseConfig) -> Self {
        let obstacles = layout.obstacles.clone();
        let body = PlayerBody::with_size(layout.spawn, config.player.size);
        let mut camera = FollowCamera::with_offset(config.camera.offset);
        camera.follow(body.position);

        info!(
            course = %layout.name,
            obstacles = obstacles.len(),
            spawn = ?layout.spawn,
            "course ready"
        );

        Self {
            respawn_point: layout.spawn,
            layout,
            obstacles,
            config,
            body,
            camera,
            stats: RunStats::default(),
        }
    }

    /// Validate both inputs, then build the state.
    pub fn validated(layout: CourseLayout, config: CourseConfig) -> CourseResult<Self> {
        config.validate()?;
        layout.validate()?;
        Ok(Self::new(layout, config))
    }

    /// Advance the course by one frame.
    pub fn step(&mut self, input: &FrameInput) -> FrameReport {
        self.stats.frames += 1;
        let mut report = FrameReport::new(self.stats.frames);
        let was_grounded = self.body.grounded;

        // 1. Horizontal input, unclamped
        self.body.displace(input.displacement);

        // 2. Gravity
        self.body.apply_gravity(self.config.physics.gravity);

        // 3. Platforms
        let support = CollisionSystem::land_on_platforms(&mut self.body, &self.obstacles);
        if let Some(platform) = support {
            if !was_grounded {
                debug!(frame = self.stats.frames, platform, "landed");
                report.push(CourseEvent::Landed { platform });
            }
        }

        // 4. Jump
        if self.wants_jump(input) {
            self.body.launch(self.config.physics.jump_impulse);
            self.stats.jumps += 1;
            report.push(CourseEvent::Jumped);
        }

        // 5. Hazards
        let hits = CollisionSystem::resolve_hazards(&mut self.body, &self.obstacles, self.respawn_point);
        for index in hits {
            self.record_death(&mut report, DeathCause::Hazard { index });
        }

        // 6. Spinners
        let contacts = SpinnerSystem::update(&mut self.body, &mut self.obstacles, &self.config.spinner);
        for contact in contacts {
            report.push(CourseEvent::SpinnerPushed {
                index: contact.index,
                delta: contact.delta,
            });
        }

        // 7. Checkpoints
        let previous = self.respawn_point;
        let captured = CollisionSystem::capture_checkpoints(&self.body, &self.obstacles, &mut self.respawn_point);
        if let Some(index) = captured {
            if self.respawn_point != previous {
                self.stats.checkpoints_captured += 1;
                info!(frame = self.stats.frames, index, respawn = ?self.respawn_point, "checkpoint captured");
                report.push(CourseEvent::CheckpointCaptured {
                    index,
                    respawn_point: self.respawn_point,
                });
            }
        }

        // 8. Out of bounds
        if CollisionSystem::below_fall_threshold(&self.body, self.config.physics.fall_threshold) {
            self.body.teleport(self.respawn_point);
            self.stats.falls += 1;
            self.record_death(&mut report, DeathCause::Fell);
        }

        // 9. Camera
        self.camera.follow(self.body.position);

        report
    }

    fn wants_jump(&self, input: &FrameInput) -> bool {
        let held = input.jump_held && self.body.grounded;
        let touch = input.jump_impulse && (self.body.grounded || !self.config.controls.touch_jump_requires_ground);
        held || touch
    }

    /// Book a death whose teleport has already happened.
    fn record_death(&mut self, report: &mut FrameReport, cause: DeathCause) {
        self.stats.deaths += 1;
        debug!(frame = self.stats.frames, ?cause, respawn = ?self.respawn_point, "player died");
        report.push(CourseEvent::Died { cause });
        report.push(CourseEvent::Respawned { at: self.respawn_point });
    }

    /// Back to the layout's spawn: respawn point, spinner angles and stats
    /// are all restored.
    pub fn reset(&mut self) {
        self.obstacles.clone_from(&self.layout.obstacles);
        self.body = PlayerBody::with_size(self.layout.spawn, self.config.player.size);
        self.respawn_point = self.layout.spawn;
        self.camera.follow(self.body.position);
        self.stats = RunStats::default();
        debug!(course = %self.layout.name, "course reset");
    }

    pub fn respawn_point(&self) -> Vec3 {
        self.respawn_point
    }

    pub fn player(&self) -> &PlayerBody {
        &self.body
    }

    /// Mutable player access for hosts that place the player directly.
    pub fn player_mut(&mut self) -> &mut PlayerBody {
        &mut self.body
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    /// Live obstacles, spinners at their current yaw.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn spinner_angles(&self) -> Vec<f64> {
        SpinnerSystem::angles(&self.obstacles)
    }

    pub fn layout(&self) -> &CourseLayout {
        &self.layout
    }

    pub fn config(&self) -> &CourseConfig {
        &self.config
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::ObstacleKind;

    /// One 5x5 platform centered at the origin (top at y = 0.5).
    fn single_platform() -> CourseLayout {
        let mut layout = CourseLayout::new("single").with_spawn(Vec3::new(0.0, 5.0, 0.0));
        layout.add_default_platform(Vec3::ZERO);
        layout
    }

    fn settle(state: &mut CourseState) {
        for _ in 0..200 {
            state.step(&FrameInput::idle());
        }
    }

    #[test]
    fn test_new_places_player_and_camera() {
        let state = CourseState::new(single_platform(), CourseConfig::default());
        assert_eq!(state.player().position, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(state.respawn_point(), Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(state.camera().position, Vec3::new(0.0, 10.0, 10.0));
        assert_eq!(state.stats(), RunStats::default());
    }

    #[test]
    fn test_falls_and_lands_once() {
        let mut state = CourseState::new(single_platform(), CourseConfig::default());
        let mut landings = 0;
        for _ in 0..200 {
            if state.step(&FrameInput::idle()).landed() {
                landings += 1;
            }
        }
        assert_eq!(landings, 1);
        assert!(state.player().grounded);
        assert!((state.player().bottom() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_held_jump_only_when_grounded() {
        let mut state = CourseState::new(single_platform(), CourseConfig::default());
        // Airborne at spawn
        assert!(!state.step(&FrameInput::jumping()).jumped());

        settle(&mut state);
        let report = state.step(&FrameInput::jumping());
        assert!(report.jumped());
        assert_eq!(state.player().vertical_velocity, 0.4);
        assert_eq!(state.stats().jumps, 1);
    }

    #[test]
    fn test_touch_jump_ignores_ground_by_default() {
        let mut state = CourseState::new(single_platform(), CourseConfig::default());
        let input = FrameInput {
            jump_impulse: true,
            ..FrameInput::idle()
        };
        assert!(state.step(&input).jumped());
    }

    #[test]
    fn test_touch_jump_can_require_ground() {
        let mut config = CourseConfig::default();
        config.controls.touch_jump_requires_ground = true;
        let mut state = CourseState::new(single_platform(), config);
        let input = FrameInput {
            jump_impulse: true,
            ..FrameInput::idle()
        };
        assert!(!state.step(&input).jumped());
        settle(&mut state);
        assert!(state.step(&input).jumped());
    }

    #[test]
    fn test_fall_respawns_and_counts() {
        let layout = CourseLayout::new("void").with_spawn(Vec3::new(0.0, 5.0, 0.0));
        let mut state = CourseState::new(layout, CourseConfig::default());

        let mut fell_on = None;
        for _ in 0..200 {
            let report = state.step(&FrameInput::idle());
            if report.died() {
                fell_on = Some(report);
                break;
            }
        }

        let report = fell_on.expect("player should fall out of an empty course");
        assert!(report.events.contains(&CourseEvent::Died { cause: DeathCause::Fell }));
        assert_eq!(state.player().position, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(state.player().vertical_velocity, 0.0);
        assert_eq!(state.stats().falls, 1);
        assert_eq!(state.stats().deaths, 1);
    }

    #[test]
    fn test_checkpoint_event_only_on_change() {
        let mut layout = single_platform();
        let marker = layout.add_checkpoint(Vec3::new(20.0, 0.0, 0.0));
        let marker_position = layout.obstacles[marker].position;
        let mut state = CourseState::new(layout, CourseConfig::default());

        state.player_mut().teleport(marker_position);
        let first = state.step(&FrameInput::idle());
        assert_eq!(first.captured_checkpoint(), Some(marker));
        assert_eq!(state.respawn_point(), marker_position);

        let second = state.step(&FrameInput::idle());
        assert_eq!(second.captured_checkpoint(), None);
        assert_eq!(state.stats().checkpoints_captured, 1);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut layout = single_platform();
        layout.add_spinner(Vec3::new(0.0, 30.0, 0.0));
        let mut state = CourseState::new(layout, CourseConfig::default());

        for _ in 0..50 {
            state.step(&FrameInput::moving(Vec3::new(0.1, 0.0, 0.0)));
        }
        state.reset();

        assert_eq!(state.player().position, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(state.spinner_angles(), vec![0.0]);
        assert_eq!(state.stats().frames, 0);
        assert_eq!(state.obstacles()[1].kind, ObstacleKind::Spinner);
    }

    #[test]
    fn test_validated_rejects_bad_config() {
        let mut config = CourseConfig::default();
        config.physics.gravity = -1.0;
        assert!(CourseState::validated(single_platform(), config).is_err());
        assert!(CourseState::validated(single_platform(), CourseConfig::default()).is_ok());
    }
}
