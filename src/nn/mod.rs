//! Observation assembly and encoding for learning agents.
//!
//! ## Overview
//!
//! - **Observation**: the per-player bundle (table, two lowest cards, others' intentions)
//! - **Encoding**: `ObservationEncoder` flattens bundles into fixed-width `EncodedState`s
//!
//! ## Usage
//!
//! ```
//! use the_mind::core::MindConfig;
//! use the_mind::env::MindSession;
//! use the_mind::nn::ObservationEncoder;
//!
//! let config = MindConfig::new().with_players(3).with_intention_size(1);
//! let encoder = ObservationEncoder::new(&config);
//! let mut session = MindSession::initialize(config).unwrap();
//! let (first, _) = session.reset(Some(7)).unwrap();
//!
//! let encoded = encoder.encode(&first.observation);
//! assert_eq!(encoded.len(), encoder.observation_len());
//! ```

pub mod encoder;
pub mod observation;

pub use encoder::{EncodedState, ObservationEncoder};
pub use observation::{IntentionView, Observation};
