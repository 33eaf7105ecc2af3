//! Match rules: legality and termination.
//!
//! The session calls into these functions once per step; they never
//! mutate state themselves.

pub mod termination;

pub use termination::{all_done, evaluate, is_cleared, violation, DoneRule, Outcome, ViolationRule};
