//! Match state.
//!
//! ## MindState
//!
//! Everything that changes during one match:
//! - Hands (ascending, shrink from the front only)
//! - Table value and pile size
//! - Stall counter and turn cursor
//! - Intention matrix
//! - Outcome and termination flags
//! - Play history
//!
//! Created by `reset`, mutated only by `step`, discarded on the next `reset`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::PlayRecord;
use super::card::{Card, EMPTY_SLOT};
use super::player::{PlayerId, PlayerMap};
use crate::rules::Outcome;

/// `width x players` grid of the most recent intention signal per player.
///
/// Stored row-major: row `r` holds component `r` of every player's signal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntentionMatrix {
    width: usize,
    players: usize,
    data: Vec<f32>,
}

impl IntentionMatrix {
    /// Zero-filled matrix.
    #[must_use]
    pub fn new(width: usize, players: usize) -> Self {
        Self {
            width,
            players,
            data: vec![0.0; width * players],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn players(&self) -> usize {
        self.players
    }

    #[must_use]
    pub fn get(&self, row: usize, player: PlayerId) -> f32 {
        self.data[row * self.players + player.index()]
    }

    /// A player's most recent signal.
    #[must_use]
    pub fn column(&self, player: PlayerId) -> Vec<f32> {
        (0..self.width).map(|row| self.get(row, player)).collect()
    }

    /// Overwrite a player's signal. `signal` must have length `width`.
    pub fn set_column(&mut self, player: PlayerId, signal: &[f32]) {
        debug_assert_eq!(signal.len(), self.width);
        for (row, &value) in signal.iter().enumerate() {
            self.data[row * self.players + player.index()] = value;
        }
    }

    /// Row-major `width x (players - 1)` view with `player`'s column removed.
    #[must_use]
    pub fn without_column(&self, player: PlayerId) -> Vec<f32> {
        self.data
            .chunks(self.players.max(1))
            .flat_map(|row| {
                row.iter()
                    .enumerate()
                    .filter(move |(column, _)| *column != player.index())
                    .map(|(_, &value)| value)
            })
            .collect()
    }
}

/// Full state of one match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MindState {
    /// Remaining cards per player, ascending.
    pub hands: PlayerMap<Vec<Card>>,

    /// Rank of the most recently played card (0 before any play).
    pub table: u8,

    /// Successful plays so far.
    pub pile_size: usize,

    /// Consecutive non-plays since the last successful play.
    pub stall_count: usize,

    /// Player whose turn it is.
    pub current: PlayerId,

    /// Latest intention signal per player.
    pub intentions: IntentionMatrix,

    /// Set once the match finishes.
    pub outcome: Option<Outcome>,

    /// Per-player termination flags.
    pub terminated: PlayerMap<bool>,

    /// Aggregate termination flag.
    pub all_terminated: bool,

    /// Steps taken this match.
    pub turn: u32,

    /// Every turn resolved before the match finished, oldest first.
    pub history: Vector<PlayRecord>,
}

impl MindState {
    /// Fresh match state for already-dealt hands.
    #[must_use]
    pub fn new(hands: PlayerMap<Vec<Card>>, intention_size: usize) -> Self {
        let players = hands.player_count();
        Self {
            hands,
            table: 0,
            pile_size: 0,
            stall_count: 0,
            current: PlayerId::new(0),
            intentions: IntentionMatrix::new(intention_size, players),
            outcome: None,
            terminated: PlayerMap::with_value(players, false),
            all_terminated: false,
            turn: 0,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// The player who acts after the current one.
    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        self.current.next(self.player_count())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// True only after a cooperative win.
    #[must_use]
    pub fn won(&self) -> bool {
        self.outcome.is_some_and(|outcome| outcome.is_win())
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    /// The player's two lowest ranks, `EMPTY_SLOT` where the hand runs out.
    #[must_use]
    pub fn lowest_two(&self, player: PlayerId) -> [u8; 2] {
        let hand = &self.hands[player];
        [
            hand.first().map_or(EMPTY_SLOT, |card| card.rank()),
            hand.get(1).map_or(EMPTY_SLOT, |card| card.rank()),
        ]
    }

    /// Total cards still held across all hands.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.hands.values().map(Vec::len).sum()
    }

    /// Reveal `player`'s lowest card onto the table.
    ///
    /// Returns `None` if the hand is empty.
    pub fn play_lowest(&mut self, player: PlayerId) -> Option<Card> {
        let hand = &mut self.hands[player];
        if hand.is_empty() {
            return None;
        }

        let card = hand.remove(0);
        self.table = card.rank();
        self.stall_count = 0;
        self.pile_size += 1;
        Some(card)
    }

    /// Count a turn in which nothing was played.
    pub fn record_stall(&mut self) {
        self.stall_count = self.stall_count.saturating_add(1);
    }

    /// Finish the match.
    ///
    /// A cooperative win lays every remaining card out: the table jumps to
    /// the highest rank still held, the pile is credited with `total_cards`,
    /// and all hands are emptied.
    pub fn finish(&mut self, outcome: Outcome, total_cards: usize) {
        if outcome.is_win() {
            let highest = self
                .hands
                .values()
                .filter_map(|hand| hand.last())
                .max()
                .map_or(0, |card| card.rank());
            self.table = self.table.max(highest);
            self.pile_size = total_cards;
            for hand in self.hands.values_mut() {
                hand.clear();
            }
        }
        self.outcome = Some(outcome);
    }
}

impl std::fmt::Display for MindState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Table: {}", self.table)?;
        for (player, hand) in self.hands.iter() {
            let ranks: Vec<String> = hand.iter().map(Card::to_string).collect();
            writeln!(f, "{}: [{}]", player, ranks.join(", "))?;
        }
        writeln!(f, "Pile: {}  Stalls: {}", self.pile_size, self.stall_count)?;
        write!(f, "Current player: {}", self.current)?;
        if let Some(outcome) = &self.outcome {
            write!(f, "\nFinished: {}", outcome)?;
        }
        Ok(())
    }
}
