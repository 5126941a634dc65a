//! Course Module
//!
//! Static course descriptions: hand-built layouts, JSON persistence and the
//! procedural generator.

pub mod generation;
pub mod layout;

pub use generation::{GOAL_FOOTPRINT, GeneratorParams, generate_course};
pub use layout::{
    CHECKPOINT_MARKER_LIFT, CHECKPOINT_MARKER_SIZE, CourseLayout, KILL_BRICK_FOOTPRINT,
    KILL_BRICK_HEIGHT, PLATFORM_FOOTPRINT, PLATFORM_HEIGHT, SPINNER_SIZE,
};
