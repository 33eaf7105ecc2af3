//! Python bindings for The Mind environment.
//!
//! # Quick Start
//!
//! ```python
//! import the_mind
//!
//! env = the_mind.TheMindEnv(players=3, hand_size=10, intention_size=1, stall_limit=5)
//! obs, info = env.reset(seed=42)
//!
//! while True:
//!     obs, reward, terminated, truncated, info = env.step([1.0, 0.5])
//!     if terminated["__all__"]:
//!         break
//!
//! stats = the_mind.evaluate_baseline("threshold", 0.1, episodes=1000)
//! ```

use pyo3::prelude::*;

mod py_env;
mod py_training;

pub use py_env::*;
pub use py_training::*;

/// the_mind: cooperative card game environment for multi-agent RL.
#[pymodule]
fn the_mind(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMindEnv>()?;
    m.add_class::<PyEpisodeStats>()?;
    m.add_function(wrap_pyfunction!(evaluate_baseline, m)?)?;

    Ok(())
}
