//! Browser Binding
//!
//! Wraps a [`CourseState`] and its [`InputState`] for a JavaScript renderer.
//! The page forwards `KeyboardEvent.key` names and touch coordinates, calls
//! [`WebCourse::step`] once per animation frame, and reads back flat arrays to
//! position its meshes.

use wasm_bindgen::prelude::*;

use crate::game::{CourseConfig, CourseLayout, CourseState, GeneratorParams, generate_course};
use crate::input::InputState;
use crate::world::ObstacleKind;

/// Floats per obstacle in [`WebCourse::obstacle_transforms`]:
/// kind, position xyz, size xyz, yaw in `[0, 2pi)`
pub const OBSTACLE_STRIDE: usize = 8;

#[wasm_bindgen]
pub struct WebCourse {
    state: CourseState,
    input: InputState,
}

#[wasm_bindgen]
impl WebCourse {
    /// A generated course. Without a seed one is drawn from browser entropy.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> WebCourse {
        console_error_panic_hook::set_once();
        let params = GeneratorParams {
            seed,
            ..GeneratorParams::default()
        };
        Self::with_layout(generate_course(&params))
    }

    /// The hand-built course.
    pub fn classic() -> WebCourse {
        console_error_panic_hook::set_once();
        Self::with_layout(CourseLayout::classic())
    }

    /// Name of the loaded course (`generated-<seed>` for generated ones).
    pub fn name(&self) -> String {
        self.state.layout().name.clone()
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.keyboard.handle_key_name(key, true)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.keyboard.handle_key_name(key, false)
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.input.joystick.touch_start(x, y);
    }

    pub fn touch_move(&mut self, x: f32, y: f32) {
        let tuning = self.state.config().controls;
        self.input.joystick_move(x, y, &tuning);
    }

    pub fn touch_end(&mut self) {
        self.input.joystick.touch_end();
    }

    /// Queue a one-shot jump from the on-screen button.
    pub fn press_jump(&mut self) {
        self.input.jump_button.press();
    }

    /// Advance one frame. Returns the frame's events as a JSON array.
    pub fn step(&mut self) -> Result<String, JsValue> {
        let frame = self.input.take_frame_input(&self.state.config().controls);
        let report = self.state.step(&frame);
        serde_json::to_string(&report.events).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.input.reset();
    }

    pub fn player_position(&self) -> Vec<f32> {
        self.state.player().position.to_array().to_vec()
    }

    pub fn camera_position(&self) -> Vec<f32> {
        self.state.camera().position.to_array().to_vec()
    }

    /// Unit vector from the camera toward the player.
    pub fn camera_forward(&self) -> Vec<f32> {
        self.state.camera().get_forward().to_array().to_vec()
    }

    /// Column-major view matrix for the renderer's camera.
    pub fn camera_view(&self) -> Vec<f32> {
        self.state.camera().view_matrix().to_cols_array().to_vec()
    }

    /// True while a movement key is held or the joystick is dragged.
    pub fn input_active(&self) -> bool {
        self.input.is_active()
    }

    pub fn respawn_point(&self) -> Vec<f32> {
        self.state.respawn_point().to_array().to_vec()
    }

    /// Every obstacle flattened to [`OBSTACLE_STRIDE`] floats. Kind is the
    /// index into `Platform, Hazard, Spinner, Checkpoint`.
    pub fn obstacle_transforms(&self) -> Vec<f32> {
        let obstacles = self.state.obstacles();
        let mut out = Vec::with_capacity(obstacles.len() * OBSTACLE_STRIDE);
        for obstacle in obstacles {
            let kind = ObstacleKind::ALL
                .iter()
                .position(|k| *k == obstacle.kind)
                .unwrap_or_default();
            out.push(kind as f32);
            out.extend_from_slice(&obstacle.position.to_array());
            out.extend_from_slice(&obstacle.size.to_array());
            out.push(obstacle.yaw());
        }
        out
    }
}

impl WebCourse {
    fn with_layout(layout: CourseLayout) -> WebCourse {
        WebCourse {
            state: CourseState::new(layout, CourseConfig::default()),
            input: InputState::new(),
        }
    }
}
