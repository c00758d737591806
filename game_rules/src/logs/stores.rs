//! The three raw log stores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{LogEntry, RelationshipLogEntry};
use crate::entities::CharacterId;

/// Raw log storage, exactly as persisted.
///
/// Per-character stores are keyed by an ordered map, so iterating owners is
/// always in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStores {
    /// Estate-wide logs, oldest first.
    #[serde(default)]
    pub estate_logs: Vec<LogEntry>,

    /// Character id -> that character's own logs.
    #[serde(default)]
    pub character_logs: BTreeMap<CharacterId, Vec<LogEntry>>,

    /// Character id -> relationship logs written from that character's side.
    #[serde(default)]
    pub relationship_logs: BTreeMap<CharacterId, Vec<RelationshipLogEntry>>,
}

impl LogStores {
    /// Create empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an estate-wide log.
    pub fn push_estate_log(&mut self, log: LogEntry) {
        self.estate_logs.push(log);
    }

    /// Append a log owned by `owner`.
    pub fn push_character_log(&mut self, owner: CharacterId, log: LogEntry) {
        self.character_logs.entry(owner).or_default().push(log);
    }

    /// Append a relationship log under `owner` and its mirror under the target.
    pub fn push_relationship_log(&mut self, owner: CharacterId, log: RelationshipLogEntry) {
        let mirror = log.mirrored(&owner);
        self.relationship_logs
            .entry(log.target.clone())
            .or_default()
            .push(mirror);
        self.relationship_logs.entry(owner).or_default().push(log);
    }

    /// Total number of stored entries, counting mirrored copies separately.
    pub fn len(&self) -> usize {
        self.estate_logs.len()
            + self.character_logs.values().map(Vec::len).sum::<usize>()
            + self.relationship_logs.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_log_is_mirrored() {
        let mut stores = LogStores::new();
        let alaric = CharacterId::from("alaric");
        let brenna = CharacterId::from("brenna");

        stores.push_relationship_log(
            alaric.clone(),
            RelationshipLogEntry::new(brenna.clone(), 9, 10, "They shared a secret"),
        );

        let from_alaric = &stores.relationship_logs[&alaric];
        let from_brenna = &stores.relationship_logs[&brenna];

        assert_eq!(from_alaric.len(), 1);
        assert_eq!(from_brenna.len(), 1);
        assert_eq!(from_alaric[0].target, brenna);
        assert_eq!(from_brenna[0].target, alaric);
        assert_eq!(from_alaric[0].entry, from_brenna[0].entry);
        assert_eq!(stores.len(), 2);
    }

    #[test]
    fn test_owner_iteration_is_ordered() {
        let mut stores = LogStores::new();
        stores.push_character_log("zora".into(), LogEntry::new(1, 2, "z"));
        stores.push_character_log("alaric".into(), LogEntry::new(1, 2, "a"));
        stores.push_character_log("milo".into(), LogEntry::new(1, 2, "m"));

        let owners: Vec<_> = stores.character_logs.keys().map(|id| id.as_str()).collect();
        assert_eq!(owners, vec!["alaric", "milo", "zora"]);
    }

    #[test]
    fn test_missing_stores_default_to_empty() {
        let stores: LogStores = serde_json::from_str("{}").unwrap();
        assert!(stores.is_empty());
    }
}
