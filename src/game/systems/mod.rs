//! Game systems - stateless passes over the player and the course.

pub mod collision_system;
pub mod spinner_system;

pub use collision_system::CollisionSystem;
pub use spinner_system::{SpinnerContact, SpinnerSystem};
