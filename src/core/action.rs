//! Replayable action representation.
//!
//! Every gameplay transition has a value form. `GameState::apply` dispatches
//! a `GameAction` to the matching transition and appends an `ActionRecord`
//! to the state's history; replaying a recorded history onto an equally
//! dealt state reproduces the original run.
//!
//! Deal lifecycle transitions are not actions: they produce the state a
//! recorded game replays on top of.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Card;

/// A gameplay transition, as a value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameAction {
    /// One play into the in-progress round.
    PlayCard {
        /// The acting seat.
        player: PlayerId,
        /// The card being played.
        card: Card,
    },
    /// An externally scored round outcome.
    ResolveRound {
        /// The round winner.
        winner: PlayerId,
        /// Score added to the winner's total.
        score: i64,
    },
    /// Grant the opening turn of the new round.
    StartRound,
}

/// A recorded action with the round it was applied in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: GameAction,

    /// `round_count` at the moment the action was applied.
    pub round: u32,
}
