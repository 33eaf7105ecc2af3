//! Environment bindings for Python.
//!
//! Mirrors the multi-agent dict convention: observations, rewards, flags and
//! infos are dicts keyed by agent label (`"player1"`, ...), with the aggregate
//! flags under `"__all__"`.

use numpy::{PyArray1, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};
use rustc_hash::FxHashMap;

use crate::core::{MindConfig, MindError};
use crate::env::{ActionInput, AgentFlags, AgentObservation, MindSession, StepInfo};

pub(crate) fn to_py_err(err: MindError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn observation_dict<'py>(py: Python<'py>, obs: &AgentObservation) -> PyResult<Bound<'py, PyDict>> {
    let bundle = PyDict::new_bound(py);
    bundle.set_item("table", PyArray1::from_vec_bound(py, vec![obs.observation.table]))?;
    bundle.set_item("hand", PyArray1::from_slice_bound(py, &obs.observation.hand))?;
    if let Some(view) = &obs.observation.intention {
        let matrix =
            PyArray1::from_slice_bound(py, &view.values).reshape([view.rows, view.columns])?;
        bundle.set_item("intention", matrix)?;
    }

    let dict = PyDict::new_bound(py);
    dict.set_item(obs.player.label(), bundle)?;
    Ok(dict)
}

fn info_dict<'py>(py: Python<'py>, info: &StepInfo) -> PyResult<Bound<'py, PyDict>> {
    let inner = PyDict::new_bound(py);
    inner.set_item("won", info.won)?;

    let dict = PyDict::new_bound(py);
    dict.set_item(info.player.label(), inner)?;
    Ok(dict)
}

fn flags_dict<'py>(py: Python<'py>, flags: &AgentFlags) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    for (label, flag) in flags.labelled() {
        dict.set_item(label, flag)?;
    }
    Ok(dict)
}

fn action_input(action: &Bound<'_, PyAny>) -> PyResult<ActionInput> {
    if let Ok(dict) = action.downcast::<PyDict>() {
        let mut actions = FxHashMap::default();
        for (key, value) in dict.iter() {
            actions.insert(key.extract::<String>()?, value.extract::<Vec<f32>>()?);
        }
        return Ok(ActionInput::PerAgent(actions));
    }
    Ok(ActionInput::Flat(action.extract::<Vec<f32>>()?))
}

/// Python wrapper for MindSession.
#[pyclass(name = "TheMindEnv")]
pub struct PyMindEnv {
    session: MindSession,
}

#[pymethods]
impl PyMindEnv {
    /// Create a new environment. No cards are dealt until `reset`.
    ///
    /// # Arguments
    /// - players: Number of players (>= 2)
    /// - hand_size: Cards per player (>= 1)
    /// - intention_size: Width of the intention signal (0 disables it)
    /// - stall_limit: Consecutive non-plays per player before the match is lost
    /// - seed: RNG seed until `reset` supplies another
    #[new]
    #[pyo3(signature = (players = 2, hand_size = 5, intention_size = 0, stall_limit = 2, seed = 0))]
    fn new(
        players: usize,
        hand_size: usize,
        intention_size: usize,
        stall_limit: usize,
        seed: u64,
    ) -> PyResult<Self> {
        let config = MindConfig::new()
            .with_players(players)
            .with_hand_size(hand_size)
            .with_intention_size(intention_size)
            .with_stall_limit(stall_limit)
            .with_seed(seed);
        let session =
            MindSession::initialize(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { session })
    }

    /// Deal a new match. Returns `(observation, info)` for the first player.
    #[pyo3(signature = (seed = None))]
    fn reset<'py>(
        &mut self,
        py: Python<'py>,
        seed: Option<u64>,
    ) -> PyResult<(Bound<'py, PyDict>, Bound<'py, PyDict>)> {
        let (observation, info) = self.session.reset(seed).map_err(to_py_err)?;
        Ok((observation_dict(py, &observation)?, info_dict(py, &info)?))
    }

    /// Resolve the current player's turn.
    ///
    /// `action` is either a list `[play, intention...]` or a dict keyed by
    /// agent label. Returns `(observation, reward, terminated, truncated, info)`.
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyTuple>> {
        let input = action_input(action)?;
        let result = self.session.step_input(&input).map_err(to_py_err)?;

        let reward = PyDict::new_bound(py);
        reward.set_item(result.acting.label(), result.reward)?;

        Ok(PyTuple::new_bound(
            py,
            [
                observation_dict(py, &result.observation)?.into_any(),
                reward.into_any(),
                flags_dict(py, &result.terminated)?.into_any(),
                flags_dict(py, &result.truncated)?.into_any(),
                info_dict(py, &result.info)?.into_any(),
            ],
        ))
    }

    /// Human-readable dump of the current match.
    fn render(&self) -> String {
        self.session.describe()
    }

    /// Label of the player whose turn it is, or None before `reset`.
    #[getter]
    fn current_player(&self) -> Option<String> {
        self.session.current_player().map(|player| player.label())
    }

    #[getter]
    fn players(&self) -> usize {
        self.session.config().players
    }

    #[getter]
    fn intention_size(&self) -> usize {
        self.session.config().intention_size
    }

    /// Whether the aggregate termination flag is set.
    #[getter]
    fn done(&self) -> bool {
        self.session.is_done()
    }

    fn __repr__(&self) -> String {
        let config = self.session.config();
        format!(
            "TheMindEnv(players={}, hand_size={}, intention_size={}, stall_limit={})",
            config.players, config.hand_size, config.intention_size, config.stall_limit
        )
    }
}
