//! Fixed-width encoding of observations for neural network input.

use serde::{Deserialize, Serialize};

use crate::core::MindConfig;
use crate::nn::observation::Observation;

/// Encoded observation as a flat tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }
}

/// Flattens observations for one session configuration.
///
/// Layout: `[table, hand0, hand1]` followed by the row-major
/// `intention_size x (players - 1)` intention block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObservationEncoder {
    players: usize,
    intention_size: usize,
}

impl ObservationEncoder {
    pub fn new(config: &MindConfig) -> Self {
        Self {
            players: config.players,
            intention_size: config.intention_size,
        }
    }

    /// Features per encoded observation.
    #[must_use]
    pub fn observation_len(&self) -> usize {
        3 + self.intention_size * (self.players - 1)
    }

    /// Scalars per action vector.
    #[must_use]
    pub fn action_len(&self) -> usize {
        1 + self.intention_size
    }

    pub fn encode(&self, observation: &Observation) -> EncodedState {
        EncodedState::new(observation.to_tensor(), vec![self.observation_len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, MindState, PlayerId, PlayerMap};

    #[test]
    fn test_lengths() {
        let config = MindConfig::new().with_players(3).with_intention_size(2);
        let encoder = ObservationEncoder::new(&config);
        assert_eq!(encoder.observation_len(), 7);
        assert_eq!(encoder.action_len(), 3);

        let encoder = ObservationEncoder::new(&MindConfig::new());
        assert_eq!(encoder.observation_len(), 3);
        assert_eq!(encoder.action_len(), 1);
    }

    #[test]
    fn test_encode_matches_len() {
        let config = MindConfig::new().with_players(4).with_intention_size(1);
        let hands = PlayerMap::new(4, |p| vec![Card(p.0 * 10)]);
        let state = MindState::new(hands, 1);

        let encoder = ObservationEncoder::new(&config);
        let encoded = encoder.encode(&Observation::assemble(&state, PlayerId::new(2)));

        assert_eq!(encoded.len(), encoder.observation_len());
        assert_eq!(encoded.shape, vec![6]);
        assert!((encoded.get(1).unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_zeros() {
        let encoded = EncodedState::zeros(vec![3]);
        assert_eq!(encoded.tensor, vec![0.0; 3]);
        assert!(!encoded.is_empty());
    }
}
