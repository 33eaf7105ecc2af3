//! Core types: players, cards, RNG, configuration, actions, match state.
//!
//! Everything a session needs to deal and track a match, independent of
//! how observations are encoded or who drives the turns.

pub mod player;
pub mod card;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use card::{deal_hands, Card, DeckSource, FixedDeck, EMPTY_SLOT, RANK_COUNT};
pub use rng::GameRng;
pub use config::MindConfig;
pub use action::{MindAction, PlayRecord, PLAY_THRESHOLD};
pub use state::{IntentionMatrix, MindState};
pub use error::{ConfigError, MindError};
