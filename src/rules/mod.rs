//! The scoring collaborator seam.
//!
//! Which card beats which is a game's business, not the engine's. Callers
//! implement `RoundScorer` over the discard pile and feed the resulting
//! [`RoundOutcome`] to `GameState::resolve_round`. The crate ships no
//! concrete scorer.

use serde::{Deserialize, Serialize};

use crate::core::{DiscardEntry, PlayerId};

/// An externally computed round outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The round winner.
    pub winner: PlayerId,

    /// Score to add to the winner's total.
    pub score: i64,
}

impl RoundOutcome {
    /// Check whether a given seat won this round.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Determines the winner and score of a played round.
///
/// Implementations see the round's discard pile in play order and nothing
/// else; card attributes carry whatever the game's ranking needs.
pub trait RoundScorer {
    /// Score the in-progress round from its discard pile.
    ///
    /// Returns `None` when there is nothing to score.
    fn score_round(&self, discard: &[DiscardEntry]) -> Option<RoundOutcome>;
}
