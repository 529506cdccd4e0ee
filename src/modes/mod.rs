pub mod agent;
pub mod human;

pub use agent::{AgentConfig, AgentMode};
pub use human::HumanMode;
