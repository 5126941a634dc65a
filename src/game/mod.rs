//! Game Module
//!
//! Course-specific logic built on top of the engine: layouts, tuning, the
//! per-frame state machine and headless scripting.

pub mod config;
pub mod course;
pub mod error;
pub mod events;
pub mod script;
pub mod state;
pub mod systems;

pub use config::{CourseConfig, PhysicsTuning, PlayerTuning, SpinnerTuning};
pub use course::{CourseLayout, GeneratorParams, generate_course};
pub use error::{CourseError, CourseResult};
pub use events::{CourseEvent, DeathCause, FrameReport};
pub use script::{InputScript, RunSummary, ScriptStep, run_script};
pub use state::{CourseState, RunStats};
pub use systems::{CollisionSystem, SpinnerContact, SpinnerSystem};
