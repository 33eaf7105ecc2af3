//! # the-mind
//!
//! The cooperative card game "The Mind" as a turn-based multi-agent
//! environment for reinforcement learning.
//!
//! ## Rules
//!
//! Each player holds cards from `[0, 100)`. On its turn a player may reveal
//! its lowest card onto a shared pile and broadcast a continuous intention
//! signal. The table wins together when every hand (but at most one) is
//! empty; it loses the moment a card is played while a lower one is still
//! held, or after too many consecutive turns without a play.
//!
//! ## Design Principles
//!
//! 1. **One owned session**: all match state lives in `MindSession`; there is
//!    no global state, so independent sessions can run side by side.
//!
//! 2. **N-Player First**: players are a dense index range with modular
//!    rotation. Labels like `"player1"` are derived, never separate paths.
//!
//! 3. **Deterministic**: all randomness flows through an injectable
//!    `DeckSource`; the same seed deals the same hands.
//!
//! ## Modules
//!
//! - `core`: players, cards, RNG, configuration, actions, match state, errors
//! - `rules`: violation, cooperative win and stall termination policy
//! - `nn`: observation assembly and fixed-width encoding
//! - `env`: the session (`initialize`, `reset`, `step`, `describe`)
//! - `training`: baseline policies, trajectories and episode runner

pub mod core;
pub mod rules;
pub mod nn;
pub mod env;
pub mod training;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Card, ConfigError, DeckSource, FixedDeck, GameRng, MindAction, MindConfig, MindError, MindState,
    PlayerId, PlayerMap,
};

pub use crate::rules::{DoneRule, Outcome, ViolationRule};

pub use crate::nn::{EncodedState, Observation, ObservationEncoder};

pub use crate::env::{ActionInput, AgentFlags, AgentObservation, MindSession, StepInfo, StepResult};

pub use crate::training::{EpisodeRunner, EpisodeStats, Policy, Trajectory};
