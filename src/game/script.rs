//! Input Scripts
//!
//! Headless driving of a course. A script is a list of steps, each holding a
//! set of keys (and optionally a joystick drag) for a number of frames. Keys
//! go through [`InputState`] exactly as live input does, so a script exercises
//! the same path as a player at the keyboard.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game::error::{CourseResult, read_to_string};
use crate::game::state::{CourseState, RunStats};
use crate::input::{InputState, KeyCode};

/// Keys held for a run of frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptStep {
    pub frames: u32,
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Joystick drag `[dx, dy]` from the touch anchor, re-sent every frame
    pub drag: Option<[f32; 2]>,
}

impl ScriptStep {
    pub fn idle(frames: u32) -> Self {
        Self {
            frames,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    /// A script that stands still for `frames` frames.
    pub fn idle(frames: u32) -> Self {
        Self {
            steps: vec![ScriptStep::idle(frames)],
        }
    }

    pub fn total_frames(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.frames)).sum()
    }

    pub fn from_json_str(s: &str) -> CourseResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> CourseResult<Self> {
        Self::from_json_str(&read_to_string(path)?)
    }
}

/// Outcome of a scripted run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub course: String,
    pub stats: RunStats,
    pub final_position: Vec3,
    pub respawn_point: Vec3,
    /// Every checkpoint marker index captured, in order
    pub checkpoints: Vec<usize>,
    /// Highest player center reached
    pub max_height: f32,
}

/// Play `script` on `state` from its current position.
pub fn run_script(state: &mut CourseState, script: &InputScript) -> RunSummary {
    let tuning = state.config().controls;
    let mut input = InputState::new();
    let mut checkpoints = Vec::new();
    let mut max_height = state.player().position.y;

    for (step_index, step) in script.steps.iter().enumerate() {
        debug!(step = step_index, frames = step.frames, "script step");
        hold_keys(&mut input, step);

        if step.drag.is_some() {
            input.joystick.touch_start(0.0, 0.0);
        }

        for _ in 0..step.frames {
            if let Some([dx, dy]) = step.drag {
                input.joystick_move(dx, dy, &tuning);
            }

            let frame = input.take_frame_input(&tuning);
            let report = state.step(&frame);

            if let Some(index) = report.captured_checkpoint() {
                checkpoints.push(index);
            }
            max_height = max_height.max(state.player().position.y);
        }

        input.joystick.touch_end();
    }

    RunSummary {
        course: state.layout().name.clone(),
        stats: state.stats(),
        final_position: state.player().position,
        respawn_point: state.respawn_point(),
        checkpoints,
        max_height,
    }
}

fn hold_keys(input: &mut InputState, step: &ScriptStep) {
    input.keyboard.handle_key(KeyCode::W, step.forward);
    input.keyboard.handle_key(KeyCode::S, step.backward);
    input.keyboard.handle_key(KeyCode::A, step.left);
    input.keyboard.handle_key(KeyCode::D, step.right);
    input.keyboard.handle_key(KeyCode::Space, step.jump);
}
