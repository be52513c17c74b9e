//! # rust-trick
//!
//! The authoritative in-memory state machine for a turn-based, multi-player
//! card game: players, hands, the active discard pile, turn order, round
//! outcomes, and overall game completion.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every operation is `(state, input) -> state`,
//!    written as by-value methods. Old snapshots stay valid, and `im`
//!    persistent structures keep holding on to them cheap, so replay and
//!    undo fall out for free.
//!
//! 2. **Rules Live Outside**: The engine never knows which card beats which.
//!    Round outcomes come in pre-computed through the `rules` seam, and dealt
//!    hands come in through the `deck` seam.
//!
//! 3. **N-Player First**: Seats are dense 0-based `PlayerId`s. Nothing
//!    assumes two players.
//!
//! ## Round Cycle
//!
//! After a successful deal, play proceeds as
//! `(play_card)* -> resolve_round -> start_round -> ...` until
//! `is_game_over`. The deal itself is modeled as the three observable phases
//! of an external fetch: `Loading -> Success` or `Loading -> Error`.
//!
//! ## Modules
//!
//! - `core`: Player identity, the game state machine, replayable actions, RNG
//! - `cards`: Card identity and the opaque attribute system
//! - `deck`: The dealing collaborator seam and a seeded standard deck
//! - `rules`: The scoring collaborator seam

pub mod cards;
pub mod core;
pub mod deck;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, DealStatus, Discard, DiscardEntry, GameAction, GameRng, GameState, Hand, Player,
    PlayerId,
};

pub use crate::cards::{AttributeKey, AttributeValue, Attributes, Card, CardCode};

pub use crate::deck::{deal_hands, standard_deck, DealError, Deck, DeckSource, StandardDeckSource};

pub use crate::rules::{RoundOutcome, RoundScorer};
