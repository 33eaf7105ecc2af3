//! Baseline policies for driving sessions.
//!
//! A learned policy lives in the training framework; these are the fixed
//! strategies used for evaluation baselines, smoke tests and benchmarks.
//! Any `FnMut(&Observation, PlayerId) -> MindAction` closure is a policy too.

use crate::core::{GameRng, MindAction, PlayerId};
use crate::nn::Observation;

/// Chooses an action for the player about to act.
pub trait Policy {
    fn act(&mut self, observation: &Observation, player: PlayerId) -> MindAction;
}

impl<F> Policy for F
where
    F: FnMut(&Observation, PlayerId) -> MindAction,
{
    fn act(&mut self, observation: &Observation, player: PlayerId) -> MindAction {
        self(observation, player)
    }
}

fn signal(intention_size: usize, value: f32) -> Vec<f32> {
    vec![value; intention_size]
}

/// Plays every turn.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysPlay {
    pub intention_size: usize,
}

impl Policy for AlwaysPlay {
    fn act(&mut self, _observation: &Observation, _player: PlayerId) -> MindAction {
        MindAction::play().with_intention(&signal(self.intention_size, 1.0))
    }
}

/// Never plays; every match ends by stalling.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverPlay {
    pub intention_size: usize,
}

impl Policy for NeverPlay {
    fn act(&mut self, _observation: &Observation, _player: PlayerId) -> MindAction {
        MindAction::pass().with_intention(&signal(self.intention_size, 0.0))
    }
}

/// Plays with a fixed probability and broadcasts uniform noise.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
    play_probability: f64,
    intention_size: usize,
}

impl RandomPolicy {
    pub fn new(seed: u64, play_probability: f64, intention_size: usize) -> Self {
        Self {
            rng: GameRng::new(seed),
            play_probability: play_probability.clamp(0.0, 1.0),
            intention_size,
        }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _observation: &Observation, _player: PlayerId) -> MindAction {
        let play = self.rng.gen_bool(self.play_probability);
        let intention: Vec<f32> = (0..self.intention_size).map(|_| self.rng.gen_unit()).collect();
        let action = if play { MindAction::play() } else { MindAction::pass() };
        action.with_intention(&intention)
    }
}

/// Plays once its lowest card is within `max_gap` of the table.
///
/// Gaps are measured on the normalized scale, so `0.05` means five ranks.
/// Broadcasts its lowest card as the intention.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdPolicy {
    pub max_gap: f32,
    pub intention_size: usize,
}

impl ThresholdPolicy {
    pub fn new(max_gap: f32, intention_size: usize) -> Self {
        Self { max_gap, intention_size }
    }
}

impl Policy for ThresholdPolicy {
    fn act(&mut self, observation: &Observation, _player: PlayerId) -> MindAction {
        let lowest = observation.hand[0];
        let play = lowest < 1.0 && lowest - observation.table <= self.max_gap;
        let action = if play { MindAction::play() } else { MindAction::pass() };
        action.with_intention(&signal(self.intention_size, lowest))
    }
}
