//! World Module
//!
//! Course elements as tagged boxes.

pub mod obstacle;

pub use obstacle::{Obstacle, ObstacleKind};
