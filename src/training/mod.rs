//! Episode collection for learning and evaluation harnesses.
//!
//! ## Overview
//!
//! - **Policy**: picks an action from an observation (baselines + closures)
//! - **Trajectory**: records a complete match with encoded observations and rewards
//! - **EpisodeRunner**: drives a session to termination with one shared policy
//! - **EpisodeStats**: win rate and mean reward across episodes
//!
//! ## Usage
//!
//! ```
//! use the_mind::core::MindConfig;
//! use the_mind::env::MindSession;
//! use the_mind::training::{EpisodeRunner, ThresholdPolicy};
//!
//! let config = MindConfig::new().with_players(3).with_hand_size(4);
//! let mut session = MindSession::initialize(config.clone()).unwrap();
//!
//! let runner = EpisodeRunner::new(&config);
//! let stats = runner
//!     .run_many(&mut session, &mut ThresholdPolicy::new(0.1, 0), 10, 0)
//!     .unwrap();
//! assert_eq!(stats.episodes, 10);
//! ```

pub mod policy;
pub mod rollout;
pub mod trajectory;

pub use policy::{AlwaysPlay, NeverPlay, Policy, RandomPolicy, ThresholdPolicy};
pub use rollout::EpisodeRunner;
pub use trajectory::{EpisodeStats, Trajectory, Transition};
