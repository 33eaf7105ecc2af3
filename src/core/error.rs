//! Error types for session construction and caller contract violations.
//!
//! Normal gameplay never produces an error: empty-hand plays, stalls and
//! steps after the match has finished are absorbed by the state machine.

use thiserror::Error;

use super::player::PlayerId;

/// A session configuration that cannot produce a sound deck partition.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least 2 players are required (got {players})")]
    TooFewPlayers { players: usize },

    #[error("at most 255 players are supported (got {players})")]
    TooManyPlayers { players: usize },

    #[error("hand size must be at least 1")]
    EmptyHand,

    #[error("stall limit must be at least 1")]
    ZeroStallLimit,

    #[error("cannot deal {needed} distinct cards from a pool of {available}")]
    DeckTooSmall { needed: usize, available: usize },
}

/// Errors returned by [`MindSession`](crate::env::MindSession) operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MindError {
    #[error("no match in progress; call reset first")]
    NotStarted,

    #[error("intention vector has width {got}, expected {expected}")]
    IntentionLength { expected: usize, got: usize },

    #[error("action vector is empty; the first scalar must be the play decision")]
    EmptyAction,

    #[error("no action supplied for {player}")]
    MissingPlayerAction { player: PlayerId },

    #[error("invalid deck: {reason}")]
    InvalidDeck { reason: String },
}
