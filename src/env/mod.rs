//! Environment facade for driving the simulation from a training harness.
//!
//! No pacing, no rendering, no policy: the agent decides, this module steps.

pub mod environment;

pub use environment::SnakeEnv;
