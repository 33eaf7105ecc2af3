//! Multi-agent environment surface.
//!
//! - `MindSession`: the state machine (`initialize`, `reset`, `step`, `describe`)
//! - `StepResult` and friends: the per-turn data contract
//! - `ActionInput`: framework payload normalization

pub mod adapter;
pub mod session;
pub mod step;

pub use adapter::ActionInput;
pub use session::MindSession;
pub use step::{AgentFlags, AgentObservation, StepInfo, StepResult, ALL_AGENTS};
