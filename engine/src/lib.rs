//! Obby Engine Library
//!
//! Frame-stepped physics and collision for a 3D obstacle course: a player box
//! that falls, lands, jumps and respawns among platforms, kill bricks,
//! spinning bars and checkpoints. Rendering is left to the host; this crate
//! only owns state.
//!
//! # Modules
//!
//! - [`physics`] - AABBs and per-frame integration
//! - [`player`] - The player's box, velocity and grounded flag
//! - [`world`] - Course elements
//! - [`input`] - Keyboard and touch input reduced to one [`input::FrameInput`] per frame
//! - [`camera`] - Fixed-offset follow camera
//! - [`game`] - Layouts, config, the per-frame update and scripting
//!
//! # Example
//!
//! ```
//! use obby_engine::game::{CourseConfig, CourseLayout, CourseState};
//! use obby_engine::input::{InputState, KeyCode};
//!
//! let config = CourseConfig::default();
//! let mut course = CourseState::new(CourseLayout::classic(), config.clone());
//! let mut input = InputState::new();
//!
//! input.keyboard.handle_key(KeyCode::D, true);
//! for _ in 0..60 {
//!     let frame = input.take_frame_input(&config.controls);
//!     course.step(&frame);
//! }
//! assert!(course.player().position.x > 0.0);
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use camera::FollowCamera;
pub use input::{FrameInput, InputState, KeyCode, KeyboardState};
pub use physics::{Aabb, Vec3};
pub use player::PlayerBody;
pub use world::{Obstacle, ObstacleKind};
