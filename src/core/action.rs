//! Action representation: a play decision plus an optional intention signal.
//!
//! Training frameworks emit fixed-width numeric vectors. The first scalar is
//! the play decision, thresholded at 0.5; the remaining scalars are the
//! intention broadcast to the other players.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::error::MindError;
use super::player::PlayerId;

/// Scalars above this value count as a play.
pub const PLAY_THRESHOLD: f32 = 0.5;

/// One player's decision for a single turn.
///
/// ## Example
///
/// ```
/// use the_mind::core::MindAction;
///
/// let action = MindAction::from_vector(&[0.9, 0.25]).unwrap();
/// assert!(action.play);
/// assert_eq!(action.intention.as_slice(), &[0.25]);
///
/// let stall = MindAction::pass();
/// assert!(!stall.play);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MindAction {
    /// Reveal the lowest card in hand.
    pub play: bool,

    /// Signal broadcast to the other players.
    /// SmallVec keeps the common narrow widths off the heap.
    pub intention: SmallVec<[f32; 4]>,
}

impl MindAction {
    /// Play the lowest card without signaling.
    #[must_use]
    pub fn play() -> Self {
        Self {
            play: true,
            intention: SmallVec::new(),
        }
    }

    /// Hold the current card without signaling.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            play: false,
            intention: SmallVec::new(),
        }
    }

    /// Attach an intention vector.
    #[must_use]
    pub fn with_intention(mut self, intention: &[f32]) -> Self {
        self.intention = SmallVec::from_slice(intention);
        self
    }

    /// Decode a flat action vector `[play, intention...]`.
    pub fn from_vector(values: &[f32]) -> Result<Self, MindError> {
        let (&play, intention) = values.split_first().ok_or(MindError::EmptyAction)?;
        Ok(Self {
            play: play > PLAY_THRESHOLD,
            intention: SmallVec::from_slice(intention),
        })
    }

    /// Encode as a flat action vector `[play, intention...]`.
    #[must_use]
    pub fn to_vector(&self) -> Vec<f32> {
        let mut values = Vec::with_capacity(1 + self.intention.len());
        values.push(if self.play { 1.0 } else { 0.0 });
        values.extend_from_slice(&self.intention);
        values
    }

    /// Check the intention width against the session's configured width.
    pub fn validate(&self, intention_size: usize) -> Result<(), MindError> {
        if self.intention.len() != intention_size {
            return Err(MindError::IntentionLength {
                expected: intention_size,
                got: self.intention.len(),
            });
        }
        Ok(())
    }
}

/// A resolved turn, kept in the session's play history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// Step number within the match (0-based).
    pub turn: u32,

    /// The player who held the turn.
    pub player: PlayerId,

    /// The card revealed, or `None` for a stall.
    pub card: Option<Card>,
}

impl PlayRecord {
    #[must_use]
    pub fn new(turn: u32, player: PlayerId, card: Option<Card>) -> Self {
        Self { turn, player, card }
    }

    #[must_use]
    pub fn is_stall(&self) -> bool {
        self.card.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!MindAction::from_vector(&[0.5]).unwrap().play);
        assert!(MindAction::from_vector(&[0.51]).unwrap().play);
        assert!(!MindAction::from_vector(&[0.0]).unwrap().play);
    }

    #[test]
    fn test_empty_vector() {
        assert_eq!(MindAction::from_vector(&[]), Err(MindError::EmptyAction));
    }

    #[test]
    fn test_intention_split() {
        let action = MindAction::from_vector(&[1.0, 0.1, 0.2, 0.3]).unwrap();
        assert_eq!(action.intention.as_slice(), &[0.1, 0.2, 0.3]);
        assert_eq!(action.to_vector(), vec![1.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_validate_width() {
        let action = MindAction::play().with_intention(&[0.4]);
        assert!(action.validate(1).is_ok());
        assert_eq!(
            action.validate(0),
            Err(MindError::IntentionLength { expected: 0, got: 1 })
        );
        assert_eq!(
            MindAction::pass().validate(2),
            Err(MindError::IntentionLength { expected: 2, got: 0 })
        );
    }

    #[test]
    fn test_play_record() {
        let stall = PlayRecord::new(3, PlayerId::new(1), None);
        assert!(stall.is_stall());

        let play = PlayRecord::new(4, PlayerId::new(0), Some(Card(12)));
        let json = serde_json::to_string(&play).unwrap();
        assert_eq!(serde_json::from_str::<PlayRecord>(&json).unwrap(), play);
    }
}
