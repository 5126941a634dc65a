//! Physics module for the obstacle course
//!
//! Box collision and the frame-stepped integration used by the course loop.
//! Built without an external physics library.
//!
//! # Unit System
//!
//! Time is measured in **frames**, not seconds. Every rate in the course
//! (gravity, jump impulse, move speed, spinner spin) is a per-frame amount,
//! and the simulation advances exactly once per rendered frame.
//!
//! - Distances in course units (the player is 1 x 1 x 1)
//! - Velocities in units per frame
//! - Gravity in units per frame per frame
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`collision`] - Axis-aligned boxes, including yaw-rotated bounds
//! - [`integration`] - Per-frame Euler steps for vertical motion and spin

pub mod collision;
pub mod integration;
pub mod types;

pub use collision::Aabb;
pub use integration::{advance_angle, euler_step, spinner_push, wrap_angle};
pub use types::{Mat4, Vec3};
