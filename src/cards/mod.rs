//! Card system: identity plus opaque attributes.
//!
//! ## Key Types
//!
//! - `CardCode`: Identifying code, unique within a deck
//! - `Card`: A dealt card, immutable once dealt
//! - `AttributeKey`/`AttributeValue`/`Attributes`: Game-agnostic properties
//!   external scorers read; the engine never interprets them

pub mod attributes;
pub mod card;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use card::{Card, CardCode};
