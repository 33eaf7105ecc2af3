//! Baseline evaluation bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::MindConfig;
use crate::env::MindSession;
use crate::training::{
    AlwaysPlay, EpisodeRunner, EpisodeStats, NeverPlay, Policy, RandomPolicy, ThresholdPolicy,
};

use super::py_env::to_py_err;

/// Python wrapper for EpisodeStats.
#[pyclass(name = "EpisodeStats")]
#[derive(Clone)]
pub struct PyEpisodeStats(pub EpisodeStats);

#[pymethods]
impl PyEpisodeStats {
    #[getter]
    fn episodes(&self) -> usize {
        self.0.episodes
    }

    #[getter]
    fn wins(&self) -> usize {
        self.0.wins
    }

    #[getter]
    fn win_rate(&self) -> f64 {
        self.0.win_rate()
    }

    #[getter]
    fn mean_reward(&self) -> f64 {
        self.0.mean_reward()
    }

    #[getter]
    fn mean_length(&self) -> f64 {
        self.0.mean_length()
    }

    fn __repr__(&self) -> String {
        format!(
            "EpisodeStats(episodes={}, win_rate={:.3}, mean_reward={:.3})",
            self.0.episodes,
            self.0.win_rate(),
            self.0.mean_reward()
        )
    }
}

/// Evaluate a built-in baseline policy.
///
/// # Arguments
/// - policy: "always", "never", "random" or "threshold"
/// - parameter: play probability for "random", max gap for "threshold"
#[pyfunction]
#[pyo3(signature = (
    policy = "threshold",
    parameter = 0.1,
    episodes = 100,
    players = 2,
    hand_size = 5,
    intention_size = 0,
    stall_limit = 2,
    seed = 0
))]
#[allow(clippy::too_many_arguments)]
pub fn evaluate_baseline(
    policy: &str,
    parameter: f64,
    episodes: usize,
    players: usize,
    hand_size: usize,
    intention_size: usize,
    stall_limit: usize,
    seed: u64,
) -> PyResult<PyEpisodeStats> {
    let config = MindConfig::new()
        .with_players(players)
        .with_hand_size(hand_size)
        .with_intention_size(intention_size)
        .with_stall_limit(stall_limit)
        .with_seed(seed);

    let mut policy: Box<dyn Policy> = match policy {
        "always" => Box::new(AlwaysPlay { intention_size }),
        "never" => Box::new(NeverPlay { intention_size }),
        "random" => Box::new(RandomPolicy::new(seed, parameter, intention_size)),
        "threshold" => Box::new(ThresholdPolicy::new(parameter as f32, intention_size)),
        other => return Err(PyValueError::new_err(format!("unknown policy: {}", other))),
    };

    let mut session = MindSession::initialize(config.clone())
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    let stats = EpisodeRunner::new(&config)
        .run_many(&mut session, policy.as_mut(), episodes, seed)
        .map_err(to_py_err)?;

    Ok(PyEpisodeStats(stats))
}
