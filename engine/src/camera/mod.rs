//! Camera Module
//!
//! Chase camera for the course. Window-system agnostic - it only deals with
//! camera state and math.

pub mod follow;

pub use follow::{CameraTuning, DEFAULT_FOLLOW_OFFSET, FollowCamera};
