//! Layout Tests - Persistence, Generation and Scripted Runs
//!
//! Round-trips layouts, configs and scripts through files and runs generated
//! courses headlessly.

use std::path::PathBuf;

use glam::Vec3;
use obby_engine::game::{
    CourseConfig, CourseError, CourseEvent, CourseLayout, CourseState, DeathCause, GeneratorParams,
    InputScript, generate_course, run_script,
};
use obby_engine::world::ObstacleKind;

/// Per-test scratch directory, removed on drop.
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(test: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("obby_layout_tests_{}_{test}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        Self(dir)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_layout_file_round_trip() {
    let scratch = ScratchDir::new("layout_round_trip");
    let path = scratch.path("classic.json");
    let course = CourseLayout::classic();

    course.save(&path).unwrap();
    let loaded = CourseLayout::load(&path).unwrap();
    assert_eq!(loaded, course);
}

#[test]
fn test_config_file_round_trip() {
    let scratch = ScratchDir::new("config_round_trip");
    let path = scratch.path("config.json");
    let mut config = CourseConfig::default();
    config.physics.gravity = 0.03;
    config.controls.touch_jump_requires_ground = true;

    config.save(&path).unwrap();
    assert_eq!(CourseConfig::load(&path).unwrap(), config);
}

#[test]
fn test_missing_file_reports_path() {
    let scratch = ScratchDir::new("missing_file");
    let path = scratch.path("does_not_exist.json");
    let err = CourseLayout::load(&path).unwrap_err();
    match &err {
        CourseError::Io { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(err.to_string().contains("does_not_exist.json"));
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = CourseConfig::from_json_str(r#"{ "physics": { "gravity": 0.05 } }"#).unwrap();
    assert_eq!(config.physics.gravity, 0.05);
    assert_eq!(config.physics.jump_impulse, 0.4);
    assert_eq!(config.spinner.push, 0.05);
    assert_eq!(config.camera.offset, Vec3::new(0.0, 5.0, 10.0));
}

#[test]
fn test_invalid_config_rejected() {
    let err = CourseConfig::from_json_str(r#"{ "physics": { "jump_impulse": 0.0 } }"#).unwrap_err();
    assert!(matches!(err, CourseError::InvalidConfig(_)));
}

#[test]
fn test_malformed_json_is_json_error() {
    let err = CourseLayout::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, CourseError::Json(_)));
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_event_json_shape() {
    let died = serde_json::to_value(CourseEvent::Died {
        cause: DeathCause::Hazard { index: 4 },
    })
    .unwrap();
    assert_eq!(
        died,
        serde_json::json!({ "event": "died", "cause": { "kind": "hazard", "index": 4 } })
    );

    let fell = serde_json::to_value(CourseEvent::Died { cause: DeathCause::Fell }).unwrap();
    assert_eq!(fell["cause"]["kind"], "fell");

    let jumped = serde_json::to_value(CourseEvent::Jumped).unwrap();
    assert_eq!(jumped, serde_json::json!({ "event": "jumped" }));
}

// ============================================================================
// Generated courses
// ============================================================================

#[test]
fn test_generated_course_loads_and_runs() {
    let layout = generate_course(&GeneratorParams::seeded(42));
    assert!(layout.count(ObstacleKind::Checkpoint) > 0);

    let mut state = CourseState::validated(layout, CourseConfig::default()).unwrap();
    let summary = run_script(&mut state, &InputScript::idle(300));

    assert_eq!(summary.course, "generated-42");
    assert_eq!(summary.stats.frames, 300);
    // Spawn is above the start platform
    assert_eq!(summary.stats.deaths, 0);
}

#[test]
fn test_generated_layout_survives_file() {
    let scratch = ScratchDir::new("generated");
    let path = scratch.path("generated.json");
    let layout = generate_course(&GeneratorParams {
        segments: 30,
        ..GeneratorParams::seeded(99)
    });

    layout.save(&path).unwrap();
    assert_eq!(CourseLayout::load(&path).unwrap(), layout);
}

#[test]
fn test_scratch_dir_is_removed() {
    let dir = {
        let scratch = ScratchDir::new("cleanup");
        CourseLayout::classic().save(&scratch.path("classic.json")).unwrap();
        assert!(scratch.0.exists());
        scratch.0.clone()
    };
    assert!(!dir.exists());
}

// ============================================================================
// Scripted runs
// ============================================================================

#[test]
fn test_script_from_json_drives_classic() {
    let script = InputScript::from_json_str(
        r#"{ "steps": [
            { "frames": 60 },
            { "frames": 1, "jump": true },
            { "frames": 60 }
        ] }"#,
    )
    .unwrap();

    let mut state = CourseState::new(CourseLayout::classic(), CourseConfig::default());
    let summary = run_script(&mut state, &script);

    assert_eq!(summary.stats.frames, 121);
    assert_eq!(summary.stats.jumps, 1);
    assert_eq!(summary.stats.deaths, 0);
    assert!(summary.checkpoints.is_empty());
    assert_eq!(summary.respawn_point, Vec3::new(0.0, 5.0, 0.0));
    assert!((summary.final_position.y - 1.0).abs() < 1e-5);
}
