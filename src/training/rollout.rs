//! Driving sessions to completion with a shared policy.
//!
//! Every seat is controlled by the same policy, and each match runs until
//! the aggregate termination flag is raised.

use tracing::debug;

use crate::core::{MindConfig, MindError};
use crate::env::MindSession;
use crate::nn::ObservationEncoder;

use super::policy::Policy;
use super::trajectory::{EpisodeStats, Trajectory, Transition};

/// Runs episodes and records trajectories.
#[derive(Clone, Debug)]
pub struct EpisodeRunner {
    encoder: ObservationEncoder,
    max_steps: usize,
}

impl EpisodeRunner {
    /// Runner for sessions built from `config`.
    pub fn new(config: &MindConfig) -> Self {
        Self {
            encoder: ObservationEncoder::new(config),
            max_steps: 10_000,
        }
    }

    /// Cap on steps per episode.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Play one match from a fresh deal.
    pub fn run<P: Policy + ?Sized>(
        &self,
        session: &mut MindSession,
        policy: &mut P,
        seed: Option<u64>,
    ) -> Result<Trajectory, MindError> {
        let mut trajectory = Trajectory::new(seed);
        let (mut current, _) = session.reset(seed)?;

        for _ in 0..self.max_steps {
            let action = policy.act(&current.observation, current.player);
            let observation = self.encoder.encode(&current.observation);
            let result = session.step(&action)?;

            trajectory.push(Transition {
                player: result.acting,
                observation,
                action,
                reward: result.reward,
                terminated: result.terminated.get(result.acting),
            });

            current = result.observation;
            if result.terminated.all {
                break;
            }
        }

        if let Some(state) = session.state() {
            trajectory.outcome = state.outcome;
            trajectory.pile_size = state.pile_size;
        }

        Ok(trajectory)
    }

    /// Play `episodes` matches seeded `base_seed`, `base_seed + 1`, ...
    pub fn run_many<P: Policy + ?Sized>(
        &self,
        session: &mut MindSession,
        policy: &mut P,
        episodes: usize,
        base_seed: u64,
    ) -> Result<EpisodeStats, MindError> {
        let mut stats = EpisodeStats::new();
        for episode in 0..episodes {
            let seed = base_seed.wrapping_add(episode as u64);
            let trajectory = self.run(session, policy, Some(seed))?;
            stats.record(&trajectory);
        }

        debug!(
            episodes = stats.episodes,
            win_rate = stats.win_rate(),
            mean_reward = stats.mean_reward(),
            "evaluation finished"
        );
        Ok(stats)
    }
}
