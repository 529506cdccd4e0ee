//! Core simulation logic, free of any I/O or rendering dependencies.
//!
//! The step controller and grid state here can be driven headlessly for
//! training or wrapped in the interactive terminal loop.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

// Re-export commonly used types
pub use action::{ControlSignal, Direction, DirectionKeys, Turn, TurnSignal};
pub use config::GameConfig;
pub use engine::{StepController, StepOutcome};
pub use error::GameError;
pub use state::{GridState, Point, INITIAL_LENGTH};
