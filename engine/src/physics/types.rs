//! Physics type re-exports from glam
//!
//! The course uses a Y-up, right-handed frame. One unit is one player width.

pub use glam::{Mat4, Vec3};
