//! Cards: an identifying code plus game-agnostic attributes.
//!
//! A `Card` is immutable once dealt. Its `code` is its identity within a
//! deck and is what hand removal matches on; everything else lives in the
//! opaque attribute map that external scoring reads.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};

/// Identifying code for a card, unique within a deck.
///
/// For a standard deck this is the usual two-character form: `"AS"` for the
/// ace of spades, `"0H"` for the ten of hearts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardCode(pub String);

impl CardCode {
    /// Create a new card code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl From<&str> for CardCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CardCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card as dealt.
///
/// ## Example
///
/// ```
/// use rust_trick::Card;
///
/// let queen = Card::new("QH").with_attr("value", 12i64).with_attr("suit", "HEARTS");
///
/// assert_eq!(queen.get_int("value", 0), 12);
/// assert_eq!(queen.get_text("suit"), Some("HEARTS"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Identity within the deck; hand removal matches on this.
    pub code: CardCode,

    /// Game-specific attributes, opaque to the engine.
    pub attributes: Attributes,
}

impl Card {
    /// Create a card with no attributes.
    #[must_use]
    pub fn new(code: impl Into<CardCode>) -> Self {
        Self {
            code: code.into(),
            attributes: Attributes::default(),
        }
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }

    /// Get an integer attribute with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_attr(key).and_then(|v| v.as_int()).unwrap_or(default)
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get_attr(key).and_then(|v| v.as_text())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
