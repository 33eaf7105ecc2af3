//! Episode recordings and aggregate statistics.
//!
//! A trajectory records one match driven to its aggregate termination:
//! - Encoded observations at each decision point
//! - Actions taken and rewards received
//! - Final outcome, for the win metric

use serde::{Deserialize, Serialize};

use crate::core::{MindAction, PlayerId};
use crate::nn::EncodedState;
use crate::rules::Outcome;

/// A single decision point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// The player who acted.
    pub player: PlayerId,

    /// What the player saw before acting.
    pub observation: EncodedState,

    pub action: MindAction,

    /// Reward the acting player received for this step.
    pub reward: f32,

    /// Whether the acting player was flagged terminated by this step.
    pub terminated: bool,
}

/// A complete match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub transitions: Vec<Transition>,

    /// How the match ended; `None` if the step cap was hit first.
    pub outcome: Option<Outcome>,

    /// Cards credited to the pile at the end.
    pub pile_size: usize,

    /// Seed passed to `reset`, if any.
    pub seed: Option<u64>,
}

impl Trajectory {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            transitions: Vec::new(),
            outcome: None,
            pile_size: 0,
            seed,
        }
    }

    pub fn push(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn won(&self) -> bool {
        self.outcome.is_some_and(|outcome| outcome.is_win())
    }

    /// Sum of rewards over all players.
    pub fn total_reward(&self) -> f32 {
        self.transitions.iter().map(|t| t.reward).sum()
    }

    /// Transitions where `player` acted.
    pub fn player_transitions(&self, player: PlayerId) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(move |t| t.player == player)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Running totals over many episodes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    pub episodes: usize,
    pub wins: usize,
    pub total_reward: f64,
    pub total_steps: usize,
}

impl EpisodeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, trajectory: &Trajectory) {
        self.episodes += 1;
        if trajectory.won() {
            self.wins += 1;
        }
        self.total_reward += f64::from(trajectory.total_reward());
        self.total_steps += trajectory.len();
    }

    pub fn win_rate(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.wins as f64 / self.episodes as f64
    }

    pub fn mean_reward(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_reward / self.episodes as f64
    }

    pub fn mean_length(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_steps as f64 / self.episodes as f64
    }
}
