//! Estate state - the central structure holding the roster, calendar, and logs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::entities::{Character, CharacterId};
use crate::error::{GameRulesError, Result};
use crate::logs::{LogEntry, LogStores, RelationshipLogEntry, Timeframe};

/// Estate calendar.
///
/// A month is the unit of narrative relevance; days and beats order events
/// within it. Each story generated during a day advances the beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EstateTime {
    pub month: u32,
    pub day: u32,
    pub beat: u32,
}

impl EstateTime {
    pub fn new(month: u32, day: u32, beat: u32) -> Self {
        Self { month, day, beat }
    }

    /// Move to the next story beat within the same day.
    pub fn advance_beat(&mut self) {
        self.beat += 1;
    }

    /// Move to the first beat of the next day.
    pub fn advance_day(&mut self) {
        self.day += 1;
        self.beat = 0;
    }
}

/// The complete recorded state of an estate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Estate {
    /// Calendar position.
    #[serde(default)]
    pub time: EstateTime,

    /// Character roster.
    #[serde(default)]
    pub characters: BTreeMap<CharacterId, Character>,

    /// Historical logs.
    #[serde(flatten)]
    pub logs: LogStores,
}

impl Estate {
    /// Create a new empty estate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an estate from a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the estate as a JSON snapshot.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn current_month(&self) -> u32 {
        self.time.month
    }

    /// Add a character to the roster.
    pub fn add_character(&mut self, character: Character) -> CharacterId {
        let id = character.id.clone();
        self.characters.insert(id.clone(), character);
        id
    }

    /// Get character by ID.
    pub fn get_character(&self, id: &CharacterId) -> Option<&Character> {
        self.characters.get(id)
    }

    /// Record an estate-wide event at the current calendar position.
    pub fn record_estate_log(&mut self, entry: impl Into<String>, timeframe: Timeframe) {
        let log = self.stamp(entry, timeframe);
        self.logs.push_estate_log(log);
    }

    /// Record an event owned by a single character.
    pub fn record_character_log(
        &mut self,
        owner: &CharacterId,
        entry: impl Into<String>,
        timeframe: Timeframe,
    ) -> Result<()> {
        self.require_character(owner)?;
        let log = self.stamp(entry, timeframe);
        self.logs.push_character_log(owner.clone(), log);
        Ok(())
    }

    /// Record an interaction between two characters.
    ///
    /// The entry is written under both participants. Nothing is written if
    /// either character is missing from the roster.
    pub fn record_relationship_log(
        &mut self,
        owner: &CharacterId,
        target: &CharacterId,
        entry: impl Into<String>,
        timeframe: Timeframe,
    ) -> Result<()> {
        self.require_character(owner)?;
        self.require_character(target)?;

        let stamped = self.stamp(entry, timeframe);
        let log = RelationshipLogEntry {
            month: stamped.month,
            day: stamped.day,
            beat: stamped.beat,
            expiry_month: stamped.expiry_month,
            entry: stamped.entry,
            target: target.clone(),
        };

        debug!(%owner, %target, month = log.month, beat = log.beat, "recording relationship log");
        self.logs.push_relationship_log(owner.clone(), log);
        Ok(())
    }

    fn stamp(&self, entry: impl Into<String>, timeframe: Timeframe) -> LogEntry {
        LogEntry {
            month: self.time.month,
            day: self.time.day,
            beat: self.time.beat,
            expiry_month: timeframe.expiry_from(self.time.month),
            entry: entry.into(),
        }
    }

    fn require_character(&self, id: &CharacterId) -> Result<()> {
        if self.characters.contains_key(id) {
            Ok(())
        } else {
            Err(GameRulesError::UnknownCharacter(id.clone()))
        }
    }
}
