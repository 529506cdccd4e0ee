//! gridsnake - a discrete-time grid-snake simulation engine
//!
//! This library provides:
//! - Core step-simulation and collision logic (game module)
//! - An unpaced environment facade for training harnesses (env module)
//! - TUI rendering (render module)
//! - Keyboard input mapping (input module)
//! - Session metrics (metrics module)
//! - Interactive and headless execution modes (modes module)

pub mod env;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
