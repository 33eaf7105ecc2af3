//! Per-turn data returned by `reset` and `step`.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use crate::nn::Observation;

/// Key used by multi-agent frameworks for the aggregate flag.
pub const ALL_AGENTS: &str = "__all__";

/// An observation addressed to the player about to act.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentObservation {
    pub player: PlayerId,
    pub observation: Observation,
}

/// Side-channel info for the player about to act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    pub player: PlayerId,
    /// True only once the match has ended in a cooperative win.
    pub won: bool,
}

/// One boolean per player plus the aggregate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentFlags {
    pub players: PlayerMap<bool>,
    pub all: bool,
}

impl AgentFlags {
    /// All flags cleared.
    #[must_use]
    pub fn cleared(player_count: usize) -> Self {
        Self {
            players: PlayerMap::with_value(player_count, false),
            all: false,
        }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> bool {
        self.players[player]
    }

    /// Flags keyed by agent label, with the aggregate under [`ALL_AGENTS`] last.
    #[must_use]
    pub fn labelled(&self) -> Vec<(String, bool)> {
        self.players
            .iter()
            .map(|(player, &flag)| (player.label(), flag))
            .chain(std::iter::once((ALL_AGENTS.to_string(), self.all)))
            .collect()
    }
}

/// Everything `step` hands back to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Observation for the next player.
    pub observation: AgentObservation,

    /// The player who just acted and receives `reward`.
    pub acting: PlayerId,

    /// `pile_size / (hand_size * players)` on the finishing step, else 0.
    pub reward: f32,

    pub terminated: AgentFlags,

    /// Always cleared: matches have no time limit.
    pub truncated: AgentFlags,

    /// Info for the next player.
    pub info: StepInfo,
}
