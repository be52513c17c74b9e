//! Player identity and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Ids are 0-based, dense and contiguous across
//! the player set, so they double as indices into the state's player list.
//!
//! ## Player
//!
//! One seat's state: the hand it holds, its accumulated score, and whether
//! it is currently eligible to act. Owned exclusively by `GameState`; all
//! mutation goes through the state machine's transitions.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCode};

/// Player identifier supporting 1-255 seats.
///
/// Seat indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` seats.
    ///
    /// ```
    /// use rust_trick::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// An ordered hand of cards.
///
/// Persistent vector so state snapshots share structure with their history.
pub type Hand = Vector<Card>;

/// One seat's state.
///
/// Readable from outside, but only the `GameState` transitions mutate it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Seat id; equals this player's index in the state's player list.
    pub id: PlayerId,

    /// Cards currently held, in dealt order.
    pub hand: Hand,

    /// Accumulated score across resolved rounds.
    pub score: i64,

    /// Whether this seat is eligible to act next.
    pub turn_to_play: bool,
}

impl Player {
    /// A freshly dealt seat: zero score, no turn granted yet.
    #[must_use]
    pub fn with_hand(id: PlayerId, hand: Hand) -> Self {
        Self {
            id,
            hand,
            score: 0,
            turn_to_play: false,
        }
    }

    /// Number of cards currently held.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Whether this seat currently holds a card with the given code.
    #[must_use]
    pub fn holds(&self, code: &CardCode) -> bool {
        self.hand.iter().any(|card| card.code == *code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_with_hand_defaults() {
        let hand: Hand = [Card::new("AS"), Card::new("QH")].into_iter().collect();
        let player = Player::with_hand(PlayerId::new(2), hand);

        assert_eq!(player.id, PlayerId::new(2));
        assert_eq!(player.hand_size(), 2);
        assert_eq!(player.score, 0);
        assert!(!player.turn_to_play);
    }

    #[test]
    fn test_holds() {
        let hand: Hand = [Card::new("AS")].into_iter().collect();
        let player = Player::with_hand(PlayerId::new(0), hand);

        assert!(player.holds(&CardCode::new("AS")));
        assert!(!player.holds(&CardCode::new("2C")));
    }

    #[test]
    fn test_player_serialization() {
        let hand: Hand = [Card::new("AS")].into_iter().collect();
        let player = Player::with_hand(PlayerId::new(1), hand);

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
