//! The game session: the only mutable unit of a match.
//!
//! Four operations make up the whole contract:
//! - `initialize`: validate and store the configuration (no dealing)
//! - `reset`: deal a fresh match and observe for the first player
//! - `step`: resolve the current player's turn
//! - `describe`: human-readable dump for debugging
//!
//! Sessions are independent values; several can run side by side. Calls
//! must be serialized by the caller.

use tracing::{debug, trace};

use crate::core::{
    deal_hands, ConfigError, DeckSource, GameRng, MindAction, MindConfig, MindError, MindState,
    PlayRecord, PlayerId,
};
use crate::nn::Observation;
use crate::rules;

use super::adapter::ActionInput;
use super::step::{AgentFlags, AgentObservation, StepInfo, StepResult};

/// A turn-based match of The Mind.
///
/// ## Example
///
/// ```
/// use the_mind::core::{FixedDeck, MindAction, MindConfig, PlayerId};
/// use the_mind::env::MindSession;
///
/// let config = MindConfig::new().with_players(2).with_hand_size(1);
/// let deck = FixedDeck::new(vec![3, 7]);
/// let mut session = MindSession::with_deck_source(config, Box::new(deck)).unwrap();
/// session.reset(None).unwrap();
///
/// let result = session.step(&MindAction::play()).unwrap();
/// assert_eq!(result.acting, PlayerId::new(0));
/// assert_eq!(result.reward, 1.0);
/// assert!(result.info.won);
/// ```
pub struct MindSession {
    config: MindConfig,
    deck: Box<dyn DeckSource>,
    state: Option<MindState>,
}

impl MindSession {
    /// Create a session dealing from a [`GameRng`] seeded with `config.seed`.
    pub fn initialize(config: MindConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_deck_source(config, Box::new(rng))
    }

    /// Create a session dealing from a caller-supplied source.
    pub fn with_deck_source(
        config: MindConfig,
        deck: Box<dyn DeckSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            deck,
            state: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &MindConfig {
        &self.config
    }

    /// The current match, if one has been dealt.
    #[must_use]
    pub fn state(&self) -> Option<&MindState> {
        self.state.as_ref()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.state.as_ref().map(|state| state.current)
    }

    /// Whether the aggregate termination flag has been raised.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state.as_ref().is_some_and(|state| state.all_terminated)
    }

    /// Deal a new match, discarding the previous one.
    ///
    /// `Some(seed)` reseeds the deck source first; `None` continues its stream.
    pub fn reset(
        &mut self,
        seed: Option<u64>,
    ) -> Result<(AgentObservation, StepInfo), MindError> {
        if let Some(seed) = seed {
            self.deck.reseed(seed);
        }

        let cards = self.deck.draw(self.config.total_cards())?;
        let hands = deal_hands(&cards, self.config.players, self.config.hand_size)?;
        let state = MindState::new(hands, self.config.intention_size);

        debug!(
            players = self.config.players,
            hand_size = self.config.hand_size,
            seed = ?seed,
            "match dealt"
        );

        let first = state.current;
        let observation = AgentObservation {
            player: first,
            observation: Observation::assemble(&state, first),
        };
        self.state = Some(state);

        Ok((observation, StepInfo { player: first, won: false }))
    }

    /// Resolve the current player's turn.
    ///
    /// Playing with an empty hand counts as a stall. Steps after the match
    /// has finished are accepted: they count stalls and rotate the turn
    /// without touching table, pile, hands or history.
    pub fn step(&mut self, action: &MindAction) -> Result<StepResult, MindError> {
        let config = &self.config;
        let state = self.state.as_mut().ok_or(MindError::NotStarted)?;
        action.validate(config.intention_size)?;

        let acting = state.current;
        let next = state.next_player();

        if config.intention_size > 0 {
            state.intentions.set_column(acting, &action.intention);
        }

        let was_finished = state.is_finished();
        let played = if !was_finished && action.play {
            state.play_lowest(acting)
        } else {
            None
        };
        if played.is_none() {
            state.record_stall();
        }
        if !was_finished {
            state.history.push_back(PlayRecord::new(state.turn, acting, played));
        }
        state.turn = state.turn.saturating_add(1);

        trace!(
            player = %acting,
            play = action.play,
            table = state.table,
            stall_count = state.stall_count,
            "turn resolved"
        );

        let mut just_finished = false;
        if !was_finished {
            let outcome =
                rules::evaluate(config, state.table, &state.hands, state.stall_count, acting);
            if let Some(outcome) = outcome {
                state.finish(outcome, config.total_cards());
                just_finished = true;
                debug!(
                    outcome = %outcome,
                    pile_size = state.pile_size,
                    table = state.table,
                    "match finished"
                );
            }
        }

        let observation = AgentObservation {
            player: next,
            observation: Observation::assemble(state, next),
        };

        let reward = if just_finished {
            state.pile_size as f32 / config.total_cards() as f32
        } else {
            0.0
        };

        if state.is_finished() {
            state.terminated[acting] = true;
            state.all_terminated =
                rules::all_done(config.done_rule, &state.terminated, acting, next);
        }

        let terminated = AgentFlags {
            players: state.terminated.clone(),
            all: state.all_terminated,
        };

        state.current = next;

        Ok(StepResult {
            observation,
            acting,
            reward,
            terminated,
            truncated: AgentFlags::cleared(config.players),
            info: StepInfo {
                player: next,
                won: state.won(),
            },
        })
    }

    /// Decode a framework payload for the current player, then `step`.
    pub fn step_input(&mut self, input: &ActionInput) -> Result<StepResult, MindError> {
        let current = self.current_player().ok_or(MindError::NotStarted)?;
        let action = input.resolve(current)?;
        self.step(&action)
    }

    /// Table value, every hand and the current turn.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.state {
            Some(state) => state.to_string(),
            None => "No match in progress".to_string(),
        }
    }
}

impl std::fmt::Debug for MindSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MindSession")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, FixedDeck};
    use crate::rules::Outcome;

    fn fixed(config: MindConfig, ranks: Vec<u8>) -> MindSession {
        let deck = FixedDeck::new(ranks);
        let mut session = MindSession::with_deck_source(config, Box::new(deck)).unwrap();
        session.reset(None).unwrap();
        session
    }

    #[test]
    fn test_initialize_validates() {
        let err = MindSession::initialize(MindConfig::new().with_players(1)).unwrap_err();
        assert_eq!(err, ConfigError::TooFewPlayers { players: 1 });
    }

    #[test]
    fn test_step_before_reset() {
        let mut session = MindSession::initialize(MindConfig::new()).unwrap();
        assert_eq!(session.step(&MindAction::play()).unwrap_err(), MindError::NotStarted);
        assert_eq!(session.describe(), "No match in progress");
    }

    #[test]
    fn test_reset_observes_first_player() {
        let config = MindConfig::new().with_players(2).with_hand_size(2).with_intention_size(1);
        let deck = FixedDeck::new(vec![40, 10, 90, 70]);
        let mut session = MindSession::with_deck_source(config, Box::new(deck)).unwrap();

        let (first, info) = session.reset(None).unwrap();

        assert_eq!(first.player, PlayerId::new(0));
        assert_eq!(first.observation.table, 0.0);
        assert!((first.observation.hand[0] - 0.10).abs() < 1e-6);
        assert!((first.observation.hand[1] - 0.40).abs() < 1e-6);
        assert_eq!(first.observation.intention.as_ref().unwrap().values, vec![0.0]);
        assert_eq!(info, StepInfo { player: PlayerId::new(0), won: false });
    }

    #[test]
    fn test_rejects_wrong_intention_width() {
        let config = MindConfig::new().with_hand_size(1).with_intention_size(2);
        let mut session = fixed(config, vec![1, 2]);
        let err = session.step(&MindAction::play().with_intention(&[0.5])).unwrap_err();
        assert_eq!(err, MindError::IntentionLength { expected: 2, got: 1 });

        // Nothing moved.
        assert_eq!(session.current_player(), Some(PlayerId::new(0)));
        assert_eq!(session.state().unwrap().turn, 0);
    }

    #[test]
    fn test_play_then_rotate() {
        let config = MindConfig::new().with_players(3).with_hand_size(2);
        let mut session = fixed(config, vec![5, 50, 10, 60, 20, 70]);

        let result = session.step(&MindAction::play()).unwrap();
        assert_eq!(result.acting, PlayerId::new(0));
        assert_eq!(result.reward, 0.0);
        assert_eq!(result.observation.player, PlayerId::new(1));
        assert!((result.observation.observation.table - 0.05).abs() < 1e-6);
        assert!((result.observation.observation.hand[0] - 0.10).abs() < 1e-6);
        assert!(!result.terminated.all);
        assert_eq!(session.current_player(), Some(PlayerId::new(1)));

        let state = session.state().unwrap();
        assert_eq!(state.hand(PlayerId::new(0)), &[Card(50)]);
        let record = PlayRecord::new(0, PlayerId::new(0), Some(Card(5)));
        assert_eq!(state.history.back(), Some(&record));
    }

    #[test]
    fn test_empty_hand_play_is_a_stall() {
        let mut session = fixed(
            MindConfig::new().with_players(3).with_hand_size(1).with_stall_limit(3),
            vec![5, 10, 20],
        );
        session.step(&MindAction::play()).unwrap(); // player1 plays 5, hand empty
        session.step(&MindAction::pass()).unwrap();
        session.step(&MindAction::pass()).unwrap();

        let result = session.step(&MindAction::play()).unwrap(); // player1 again, nothing to play
        let state = session.state().unwrap();
        assert_eq!(state.stall_count, 3);
        assert_eq!(state.pile_size, 1);
        assert_eq!(result.reward, 0.0);
        assert!(state.history.back().unwrap().is_stall());
    }

    #[test]
    fn test_intention_visible_to_others_only() {
        let mut session = fixed(
            MindConfig::new().with_players(3).with_hand_size(1).with_intention_size(1),
            vec![5, 10, 20],
        );

        let result = session.step(&MindAction::pass().with_intention(&[0.7])).unwrap();
        // player2 sees player1 (0.7) and player3 (0.0).
        let view = result.observation.observation.intention.unwrap();
        assert_eq!(view.values, vec![0.7, 0.0]);

        let result = session.step(&MindAction::pass().with_intention(&[0.2])).unwrap();
        // player3 sees player1 and player2.
        let view = result.observation.observation.intention.unwrap();
        assert_eq!(view.values, vec![0.7, 0.2]);

        let result = session.step(&MindAction::pass().with_intention(&[0.9])).unwrap();
        // player1 never sees its own 0.7 back.
        let view = result.observation.observation.intention.unwrap();
        assert_eq!(view.values, vec![0.2, 0.9]);
    }

    #[test]
    fn test_post_termination_steps() {
        let mut session = fixed(MindConfig::new().with_players(2).with_hand_size(1), vec![7, 3]);

        let result = session.step(&MindAction::play()).unwrap();
        assert_eq!(result.reward, 0.5);
        assert!(result.terminated.get(PlayerId::new(0)));
        assert!(!result.terminated.all);

        let table_before = session.state().unwrap().table;
        let result = session.step(&MindAction::play()).unwrap();
        let state = session.state().unwrap();

        assert_eq!(result.acting, PlayerId::new(1));
        assert_eq!(result.reward, 0.0);
        assert!(result.terminated.all);
        assert_eq!(state.table, table_before);
        assert_eq!(state.hand(PlayerId::new(1)), &[Card(3)]);
        assert_eq!(state.pile_size, 1);
        assert_eq!(session.current_player(), Some(PlayerId::new(0)));
        assert!(session.is_done());
        assert!(matches!(state.outcome, Some(Outcome::Violation { .. })));
    }

    #[test]
    fn test_history_stops_at_finish() {
        let mut session = fixed(MindConfig::new().with_players(2).with_hand_size(1), vec![7, 3]);
        session.step(&MindAction::play()).unwrap();
        assert_eq!(session.state().unwrap().history.len(), 1);

        for _ in 0..10 {
            session.step(&MindAction::play()).unwrap();
        }
        let state = session.state().unwrap();
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.turn, 11);
    }

    #[test]
    fn test_turn_counter_saturates() {
        let mut session = fixed(MindConfig::new().with_players(2).with_hand_size(1), vec![7, 3]);
        session.step(&MindAction::play()).unwrap();

        if let Some(state) = session.state.as_mut() {
            state.turn = u32::MAX;
            state.stall_count = usize::MAX;
        }
        session.step(&MindAction::pass()).unwrap();

        let state = session.state().unwrap();
        assert_eq!(state.turn, u32::MAX);
        assert_eq!(state.stall_count, usize::MAX);
    }

    #[test]
    fn test_reset_discards_previous_match() {
        let mut session = MindSession::initialize(MindConfig::new().with_hand_size(3)).unwrap();
        session.reset(Some(11)).unwrap();
        session.step(&MindAction::play()).unwrap();

        session.reset(Some(11)).unwrap();
        let state = session.state().unwrap();
        assert_eq!(state.turn, 0);
        assert_eq!(state.table, 0);
        assert_eq!(state.cards_remaining(), 6);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_describe() {
        let session = fixed(MindConfig::new().with_players(2).with_hand_size(1), vec![3, 7]);
        let text = session.describe();
        assert!(text.contains("Table: 0"));
        assert!(text.contains("player1: [3]"));
        assert!(text.contains("player2: [7]"));
        assert!(text.contains("Current player: player1"));
    }
}
