//! Termination policy: loss by violation, cooperative win, stall timeout.
//!
//! Checks run once per step while the match is live, short-circuiting in
//! that order; only the first matching condition applies.

use serde::{Deserialize, Serialize};

use crate::core::{Card, MindConfig, PlayerId, PlayerMap};

/// Which held cards a freshly played table value is compared against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationRule {
    /// Lost if any player, anywhere at the table, holds a lower card.
    #[default]
    GlobalMinimum,
    /// Lost only if the next player in rotation holds a lower card.
    ///
    /// With two players this is the opponent's top card.
    NextPlayer,
}

/// When the aggregate ("all agents done") termination flag is raised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoneRule {
    /// Once both the acting player and the next player are flagged.
    ///
    /// For more than two players the remaining flags may stay false.
    #[default]
    ActingAndNext,
    /// Once every player is flagged.
    AllPlayers,
}

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A card was played while a lower one was still held.
    Violation { table: Card, lowest_held: Card },
    /// All but at most one hand emptied; remaining cards are laid out in order.
    CooperativeWin,
    /// Too many consecutive non-plays.
    Stalled,
}

impl Outcome {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::CooperativeWin)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Violation { table, lowest_held } => {
                write!(f, "lost: {} played while {} was still held", table, lowest_held)
            }
            Outcome::CooperativeWin => write!(f, "won"),
            Outcome::Stalled => write!(f, "lost: stalled"),
        }
    }
}

/// The lowest card the rule says should have been played before `table`.
///
/// Returns `None` when the table value is legal.
#[must_use]
pub fn violation(
    rule: ViolationRule,
    table: u8,
    hands: &PlayerMap<Vec<Card>>,
    acting: PlayerId,
) -> Option<Card> {
    let lowest = match rule {
        ViolationRule::GlobalMinimum => {
            hands.values().filter_map(|hand| hand.first()).min().copied()
        }
        ViolationRule::NextPlayer => {
            let next = acting.next(hands.player_count());
            hands[next].first().copied()
        }
    }?;

    (table > lowest.rank()).then_some(lowest)
}

/// Whether enough hands are empty for a cooperative win.
#[must_use]
pub fn is_cleared(hands: &PlayerMap<Vec<Card>>) -> bool {
    let empty = hands.values().filter(|hand| hand.is_empty()).count();
    empty + 1 >= hands.player_count()
}

/// Evaluate the termination policy after `acting` has resolved its turn.
#[must_use]
pub fn evaluate(
    config: &MindConfig,
    table: u8,
    hands: &PlayerMap<Vec<Card>>,
    stall_count: usize,
    acting: PlayerId,
) -> Option<Outcome> {
    if let Some(lowest_held) = violation(config.violation_rule, table, hands, acting) {
        return Some(Outcome::Violation {
            table: Card(table),
            lowest_held,
        });
    }

    if is_cleared(hands) {
        return Some(Outcome::CooperativeWin);
    }

    if stall_count >= config.absolute_stall_limit() {
        return Some(Outcome::Stalled);
    }

    None
}

/// Whether the aggregate termination flag should be raised.
#[must_use]
pub fn all_done(rule: DoneRule, flags: &PlayerMap<bool>, acting: PlayerId, next: PlayerId) -> bool {
    match rule {
        DoneRule::ActingAndNext => flags[acting] && flags[next],
        DoneRule::AllPlayers => flags.values().all(|&flag| flag),
    }
}
