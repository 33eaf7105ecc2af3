//! Card ranks, deck sources and hand dealing.
//!
//! Cards are the integers `[0, 100)`. Each match draws `hand_size * players`
//! distinct ranks without replacement and partitions them into one sorted
//! hand per player: the first `hand_size` drawn go to player 1, the next
//! `hand_size` to player 2, and so on.

use serde::{Deserialize, Serialize};

use super::error::MindError;
use super::player::{PlayerId, PlayerMap};

/// Number of distinct card ranks in the pool.
pub const RANK_COUNT: u8 = 100;

/// Rank substituted for a missing hand slot in observations.
///
/// Normalizes to `1.0`, above every real card.
pub const EMPTY_SLOT: u8 = RANK_COUNT;

/// A card rank in `[0, 100)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub u8);

impl Card {
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Rank scaled to `[0, 1)`.
    #[must_use]
    pub fn normalized(self) -> f32 {
        f32::from(self.0) / f32::from(RANK_COUNT)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of the cards drawn at the start of a match.
///
/// All randomness in a session flows through this trait, so matches are
/// reproducible given a seeded source.
pub trait DeckSource: Send {
    /// Draw `count` distinct ranks from `[0, 100)`, in deal order.
    fn draw(&mut self, count: usize) -> Result<Vec<Card>, MindError>;

    /// Reseed the source. Sources without randomness ignore this.
    fn reseed(&mut self, _seed: u64) {}
}

/// A deck that deals the same predetermined cards every match.
///
/// ```
/// use the_mind::core::{Card, DeckSource, FixedDeck};
///
/// let mut deck = FixedDeck::new(vec![3, 7]);
/// assert_eq!(deck.draw(2).unwrap(), vec![Card(3), Card(7)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedDeck {
    cards: Vec<Card>,
}

impl FixedDeck {
    pub fn new(ranks: impl IntoIterator<Item = u8>) -> Self {
        Self {
            cards: ranks.into_iter().map(Card).collect(),
        }
    }
}

impl DeckSource for FixedDeck {
    fn draw(&mut self, _count: usize) -> Result<Vec<Card>, MindError> {
        Ok(self.cards.clone())
    }
}

/// Partition drawn cards into `player_count` ascending hands of `hand_size`.
///
/// Any [`DeckSource`] may be plugged into a session, so the draw is checked
/// here: exactly `player_count * hand_size` distinct ranks in `[0, 100)`.
pub fn deal_hands(
    cards: &[Card],
    player_count: usize,
    hand_size: usize,
) -> Result<PlayerMap<Vec<Card>>, MindError> {
    let expected = player_count.saturating_mul(hand_size);
    if cards.len() != expected {
        return Err(MindError::InvalidDeck {
            reason: format!("expected {} cards, got {}", expected, cards.len()),
        });
    }

    let mut seen = [false; RANK_COUNT as usize];
    for card in cards {
        if card.0 >= RANK_COUNT {
            return Err(MindError::InvalidDeck {
                reason: format!("rank {} is outside [0, {})", card.0, RANK_COUNT),
            });
        }
        if std::mem::replace(&mut seen[card.0 as usize], true) {
            return Err(MindError::InvalidDeck {
                reason: format!("rank {} appears more than once", card.0),
            });
        }
    }

    Ok(PlayerMap::new(player_count, |player: PlayerId| {
        let start = player.index() * hand_size;
        let mut hand = cards[start..start + hand_size].to_vec();
        hand.sort_unstable();
        hand
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().copied().map(Card).collect()
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Card(0).normalized(), 0.0);
        assert!((Card(37).normalized() - 0.37).abs() < 1e-6);
        assert_eq!(f32::from(EMPTY_SLOT) / 100.0, 1.0);
    }

    #[test]
    fn test_deal_rejects_wrong_count() {
        let short = deal_hands(&cards(&[1, 2, 3]), 2, 2);
        assert!(matches!(short, Err(MindError::InvalidDeck { .. })));

        let long = deal_hands(&cards(&[1, 2, 3, 4, 5]), 2, 2);
        assert!(matches!(long, Err(MindError::InvalidDeck { .. })));
    }

    #[test]
    fn test_deal_rejects_duplicates() {
        let err = deal_hands(&cards(&[1, 1, 2, 3]), 2, 2).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_deal_rejects_out_of_range() {
        assert!(deal_hands(&cards(&[5, 100]), 2, 1).is_err());
    }

    #[test]
    fn test_fixed_deck_repeats_every_match() {
        let mut deck = FixedDeck::new(vec![9, 4]);
        assert_eq!(deck.draw(2).unwrap(), deck.draw(2).unwrap());
    }

    #[test]
    fn test_deal_hands_partitions_in_draw_order() {
        let hands = deal_hands(&cards(&[50, 10, 30, 99, 0, 42]), 3, 2).unwrap();

        assert_eq!(hands[PlayerId::new(0)], vec![Card(10), Card(50)]);
        assert_eq!(hands[PlayerId::new(1)], vec![Card(30), Card(99)]);
        assert_eq!(hands[PlayerId::new(2)], vec![Card(0), Card(42)]);
    }
}
