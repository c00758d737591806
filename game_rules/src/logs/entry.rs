//! Log entry shapes as they are persisted.

use serde::{Deserialize, Serialize};

use crate::entities::CharacterId;

/// A single estate or character log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Month the event happened.
    pub month: u32,

    /// Day within the month. Older records have no day.
    #[serde(default)]
    pub day: u32,

    /// Story beat within the day. Older records have no beat.
    #[serde(default)]
    pub beat: u32,

    /// Month after which the entry is no longer narratively relevant.
    pub expiry_month: u32,

    /// Human-readable text of the event.
    pub entry: String,
}

impl LogEntry {
    /// Create an entry at the start of `month` (day 0, beat 0).
    pub fn new(month: u32, expiry_month: u32, entry: impl Into<String>) -> Self {
        Self {
            month,
            day: 0,
            beat: 0,
            expiry_month,
            entry: entry.into(),
        }
    }

    /// Set the beat.
    pub fn with_beat(mut self, beat: u32) -> Self {
        self.beat = beat;
        self
    }

    /// Set the day.
    pub fn with_day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }
}

/// A relationship log entry, written from the owner's perspective.
///
/// Every interaction is stored twice: once under each participant, with
/// `target` naming the other one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipLogEntry {
    pub month: u32,

    #[serde(default)]
    pub day: u32,

    #[serde(default)]
    pub beat: u32,

    pub expiry_month: u32,

    pub entry: String,

    /// The other participant.
    pub target: CharacterId,
}

impl RelationshipLogEntry {
    /// Create a relationship entry targeting `target`.
    pub fn new(
        target: impl Into<CharacterId>,
        month: u32,
        expiry_month: u32,
        entry: impl Into<String>,
    ) -> Self {
        Self {
            month,
            day: 0,
            beat: 0,
            expiry_month,
            entry: entry.into(),
            target: target.into(),
        }
    }

    /// Set the beat.
    pub fn with_beat(mut self, beat: u32) -> Self {
        self.beat = beat;
        self
    }

    /// Set the day.
    pub fn with_day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    /// The same entry as seen from the target's side.
    pub fn mirrored(&self, owner: &CharacterId) -> Self {
        Self {
            target: owner.clone(),
            ..self.clone()
        }
    }
}
