//! Per-player observation bundles.
//!
//! What a player sees when it is about to act:
//! - `table`: the table rank scaled by 1/100
//! - `hand`: its two lowest ranks scaled by 1/100, 1.0 for missing slots
//! - `intention`: every other player's latest signal (only when signaling
//!   is enabled); the observer's own column is removed

use serde::{Deserialize, Serialize};

use crate::core::{MindState, PlayerId, RANK_COUNT};

/// Intention signals visible to one player.
///
/// Row-major `rows x columns`, where `rows` is the intention width and
/// `columns` is `players - 1` in seat order with the observer skipped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntentionView {
    pub rows: usize,
    pub columns: usize,
    pub values: Vec<f32>,
}

/// Everything one player observes before acting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub table: f32,
    pub hand: [f32; 2],
    pub intention: Option<IntentionView>,
}

impl Observation {
    /// Build `player`'s observation from the current match state.
    #[must_use]
    pub fn assemble(state: &MindState, player: PlayerId) -> Self {
        let scale = f32::from(RANK_COUNT);
        let [first, second] = state.lowest_two(player);

        let intention = (state.intentions.width() > 0).then(|| IntentionView {
            rows: state.intentions.width(),
            columns: state.player_count() - 1,
            values: state.intentions.without_column(player),
        });

        Self {
            table: f32::from(state.table) / scale,
            hand: [f32::from(first) / scale, f32::from(second) / scale],
            intention,
        }
    }

    /// Flatten as `[table, hand0, hand1, intention...]`.
    #[must_use]
    pub fn to_tensor(&self) -> Vec<f32> {
        let intention = self.intention.as_ref().map_or(&[][..], |view| view.values.as_slice());
        let mut tensor = Vec::with_capacity(3 + intention.len());
        tensor.push(self.table);
        tensor.extend_from_slice(&self.hand);
        tensor.extend_from_slice(intention);
        tensor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, PlayerMap};

    fn state(cards: &[&[u8]], intention_size: usize) -> MindState {
        let hands = PlayerMap::new(cards.len(), |p| {
            cards[p.index()].iter().copied().map(Card).collect()
        });
        MindState::new(hands, intention_size)
    }

    #[test]
    fn test_scaling_and_sentinels() {
        let mut s = state(&[&[12, 40, 77], &[90]], 0);
        s.table = 5;

        let obs = Observation::assemble(&s, PlayerId::new(0));
        assert!((obs.table - 0.05).abs() < 1e-6);
        assert!((obs.hand[0] - 0.12).abs() < 1e-6);
        assert!((obs.hand[1] - 0.40).abs() < 1e-6);
        assert!(obs.intention.is_none());

        let obs = Observation::assemble(&s, PlayerId::new(1));
        assert!((obs.hand[0] - 0.90).abs() < 1e-6);
        assert_eq!(obs.hand[1], 1.0);
    }

    #[test]
    fn test_intention_excludes_observer() {
        let mut s = state(&[&[1], &[2], &[3]], 1);
        s.intentions.set_column(PlayerId::new(0), &[0.3]);
        s.intentions.set_column(PlayerId::new(1), &[0.6]);
        s.intentions.set_column(PlayerId::new(2), &[0.9]);

        let view = Observation::assemble(&s, PlayerId::new(1)).intention.unwrap();
        assert_eq!(view.rows, 1);
        assert_eq!(view.columns, 2);
        assert_eq!(view.values, vec![0.3, 0.9]);
    }

    #[test]
    fn test_to_tensor_layout() {
        let mut s = state(&[&[10, 20], &[30, 40]], 2);
        s.intentions.set_column(PlayerId::new(0), &[0.5, 0.25]);

        let tensor = Observation::assemble(&s, PlayerId::new(1)).to_tensor();
        assert_eq!(tensor.len(), 5);
        assert!((tensor[1] - 0.30).abs() < 1e-6);
        assert_eq!(&tensor[3..], &[0.5, 0.25]);
    }
}
