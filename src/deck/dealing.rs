//! Deck acquisition and the pure hand partition.

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;
use crate::core::{GameRng, GameState, Hand};

/// A fetched, already-shuffled deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Cards in draw order.
    pub cards: Vec<Card>,
}

/// Errors from deck acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    /// No players requested.
    #[error("cannot deal to zero players")]
    NoPlayers,
    /// More seats than cards.
    #[error("not enough cards for {players} players")]
    NotEnoughCards {
        /// Requested seat count.
        players: usize,
    },
    /// The deck service itself failed.
    #[error("deck service unavailable: {0}")]
    Unavailable(String),
}

/// Acquisition of a shuffled deck: the external deck service contract.
///
/// Implementations own the shuffling; the returned deck is consumed in
/// draw order by [`deal_hands`].
pub trait DeckSource {
    /// Fetch a shuffled deck sized for `player_count` players.
    fn fetch_deck(&mut self, player_count: usize) -> Result<Deck, DealError>;
}

/// Partition a fetched deck into one hand per player.
///
/// Contiguous even split in draw order: the first `cards.len() /
/// player_count` cards form seat 0's hand, and so on. Remainder cards are
/// left undealt so hands stay symmetric.
///
/// # Panics
///
/// Panics if `player_count` is zero.
#[must_use]
pub fn deal_hands(cards: Vec<Card>, player_count: usize) -> Vec<Hand> {
    assert!(player_count > 0, "Must have at least 1 player");

    let per_hand = cards.len() / player_count;
    let mut hands = vec![Hand::new(); player_count];
    if per_hand == 0 {
        return hands;
    }
    for (i, card) in cards.into_iter().take(per_hand * player_count).enumerate() {
        hands[i / per_hand].push_back(card);
    }
    hands
}

/// Rank codes with their scoring values, ace high. Ten is `'0'` so every
/// code stays two characters.
const RANKS: [(char, i64); 13] = [
    ('2', 2),
    ('3', 3),
    ('4', 4),
    ('5', 5),
    ('6', 6),
    ('7', 7),
    ('8', 8),
    ('9', 9),
    ('0', 10),
    ('J', 11),
    ('Q', 12),
    ('K', 13),
    ('A', 14),
];

const SUITS: [(char, &str); 4] = [
    ('S', "SPADES"),
    ('H', "HEARTS"),
    ('D', "DIAMONDS"),
    ('C', "CLUBS"),
];

/// Build an unshuffled standard 52-card deck.
///
/// Each card carries a `value` attribute (2-14, ace high) and a `suit`
/// attribute for external scorers to read.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for (suit_code, suit) in SUITS {
        for (rank_code, value) in RANKS {
            cards.push(
                Card::new(format!("{rank_code}{suit_code}"))
                    .with_attr("value", value)
                    .with_attr("suit", suit),
            );
        }
    }
    cards
}

/// Deterministic deck service: a seeded shuffle of the standard deck.
///
/// Same seed, same shuffle, same game. Successive fetches from one source
/// continue the seeded stream, so re-deals differ while staying replayable
/// from the seed.
#[derive(Clone, Debug)]
pub struct StandardDeckSource {
    rng: GameRng,
}

impl StandardDeckSource {
    /// Create a source seeded for replayable shuffles.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl DeckSource for StandardDeckSource {
    fn fetch_deck(&mut self, player_count: usize) -> Result<Deck, DealError> {
        if player_count == 0 {
            return Err(DealError::NoPlayers);
        }

        let mut cards = standard_deck();
        if player_count > cards.len() {
            return Err(DealError::NotEnoughCards {
                players: player_count,
            });
        }

        self.rng.shuffle(&mut cards);
        Ok(Deck { cards })
    }
}

impl GameState {
    /// Run the full deal lifecycle against a deck source.
    ///
    /// Resets to `Loading`, fetches, partitions, and lands on `Success`
    /// with dealt hands or `Error` on fetch failure. This is the
    /// synchronous rendition of the pending/fulfilled/rejected phases; the
    /// collaborator's error detail is logged here and otherwise dropped,
    /// the state records only the phase.
    #[must_use]
    pub fn start_game<S: DeckSource>(self, source: &mut S, player_count: usize) -> Self {
        let pending = self.deal_pending();
        match source.fetch_deck(player_count) {
            Ok(deck) => pending.deal_fulfilled(deal_hands(deck.cards, player_count)),
            Err(err) => {
                warn!("deck fetch for {player_count} players failed: {err}");
                pending.deal_failed()
            }
        }
    }
}
