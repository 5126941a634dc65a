//! Config Module
//!
//! Centralized tuning for the course loop.

pub mod course_config;

pub use course_config::{CourseConfig, PhysicsTuning, PlayerTuning, SpinnerTuning};
