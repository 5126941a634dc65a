//! Player Module
//!
//! Physical player state for the obstacle course.
//!
//! # Components
//!
//! - [`PlayerBody`] - Box, vertical velocity and grounded flag
//!   - Gravity step, landing snap, jump launch and respawn teleport

pub mod body;

pub use body::{DEFAULT_SPAWN, PLAYER_SIZE, PlayerBody};
