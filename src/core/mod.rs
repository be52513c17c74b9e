//! Core engine types: players, the game state machine, actions, RNG.
//!
//! This module contains the state machine itself and the building blocks it
//! owns. Everything game-specific (card rankings, deal acquisition) comes in
//! through the `deck` and `rules` seams instead of living here.

pub mod action;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, GameAction};
pub use player::{Hand, Player, PlayerId};
pub use rng::GameRng;
pub use state::{DealStatus, Discard, DiscardEntry, GameState};
