//! Character identity on the estate.

use serde::{Deserialize, Serialize};

/// Stable identifier for a character.
///
/// Identifiers are totally ordered so an unordered pair of characters can be
/// written as `(min, max)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CharacterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A character on the estate roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    #[serde(rename = "identifier")]
    pub id: CharacterId,
    pub name: String,
}

impl Character {
    /// Create a new character with the given identifier and display name.
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
