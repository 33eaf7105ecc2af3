//! Boundary normalization of framework action payloads.
//!
//! Frameworks send either one flat vector for the acting player or a map
//! keyed by agent label. The session itself only ever sees a single
//! validated [`MindAction`].

use rustc_hash::FxHashMap;

use crate::core::{MindAction, MindError, PlayerId};

/// Raw action payload as received from a training framework.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionInput {
    /// `[play, intention...]` for whoever holds the turn.
    Flat(Vec<f32>),
    /// Vectors keyed by agent label (`"player1"`, ...).
    PerAgent(FxHashMap<String, Vec<f32>>),
}

impl ActionInput {
    /// Extract and decode the action for `current`.
    ///
    /// Entries for players other than `current` are ignored.
    pub fn resolve(&self, current: PlayerId) -> Result<MindAction, MindError> {
        match self {
            ActionInput::Flat(values) => MindAction::from_vector(values),
            ActionInput::PerAgent(actions) => {
                let values = actions
                    .get(&current.label())
                    .ok_or(MindError::MissingPlayerAction { player: current })?;
                MindAction::from_vector(values)
            }
        }
    }
}

impl From<Vec<f32>> for ActionInput {
    fn from(values: Vec<f32>) -> Self {
        ActionInput::Flat(values)
    }
}
