//! The dealing collaborator: deck acquisition and hand distribution.
//!
//! The state machine only ever consumes the *result* of a deal. `DeckSource`
//! is the seam a real deck service implements, `deal_hands` is the pure
//! partition both sides share, and `StandardDeckSource` is the crate's
//! deterministic seeded implementation for tests and demos.

pub mod dealing;

pub use dealing::{deal_hands, standard_deck, DealError, Deck, DeckSource, StandardDeckSource};
