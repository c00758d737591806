//! Unified log representation and store normalization.

use game_rules::{CharacterId, LogStores};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Beats at or above this bound would overflow into the next month in
/// [`UnifiedLog::recency_key`].
pub const BEATS_PER_MONTH: u32 = 1000;

/// Who a log is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogSubject {
    /// Estate-wide; no characters attached.
    Estate,

    /// A single character's own log.
    Character { owner: CharacterId },

    /// An undirected pair, always stored with `a < b`.
    Relationship { a: CharacterId, b: CharacterId },
}

impl LogSubject {
    /// Canonical pair for two characters, whichever order they come in.
    pub fn pair(x: CharacterId, y: CharacterId) -> Self {
        if x <= y {
            LogSubject::Relationship { a: x, b: y }
        } else {
            LogSubject::Relationship { a: y, b: x }
        }
    }

    pub fn kind(&self) -> LogKind {
        match self {
            LogSubject::Estate => LogKind::Estate,
            LogSubject::Character { .. } => LogKind::Character,
            LogSubject::Relationship { .. } => LogKind::Relationship,
        }
    }

    /// Characters attached to this subject.
    pub fn involved(&self) -> Vec<&CharacterId> {
        match self {
            LogSubject::Estate => Vec::new(),
            LogSubject::Character { owner } => vec![owner],
            LogSubject::Relationship { a, b } => vec![a, b],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogKind {
    Estate,
    Character,
    Relationship,
}

impl std::fmt::Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LogKind::Estate => "estate",
            LogKind::Character => "character",
            LogKind::Relationship => "relationship",
        };
        f.write_str(name)
    }
}

/// One historical record, whichever store it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedLog {
    pub subject: LogSubject,
    pub month: u32,
    pub beat: u32,
    pub expiry_month: u32,
    pub text: String,
}

/// Structural identity of a log: kind, participants, timing and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DedupKey<'a> {
    subject: &'a LogSubject,
    month: u32,
    beat: u32,
    expiry_month: u32,
    text: &'a str,
}

impl UnifiedLog {
    pub fn kind(&self) -> LogKind {
        self.subject.kind()
    }

    pub fn dedup_key(&self) -> DedupKey<'_> {
        DedupKey {
            subject: &self.subject,
            month: self.month,
            beat: self.beat,
            expiry_month: self.expiry_month,
            text: &self.text,
        }
    }

    /// `(month, beat)`, for ordering.
    pub fn recency(&self) -> (u32, u32) {
        (self.month, self.beat)
    }

    /// Scalar recency used inside scores: `month * 1000 + beat`.
    ///
    /// Beat is clamped below [`BEATS_PER_MONTH`] so a runaway beat can never
    /// outrank a later month.
    pub fn recency_key(&self) -> f64 {
        let beat = self.beat.min(BEATS_PER_MONTH - 1);
        f64::from(self.month) * f64::from(BEATS_PER_MONTH) + f64::from(beat)
    }

    /// Months of relevance left, negative once expired.
    pub fn expiry_offset(&self, current_month: u32) -> i64 {
        i64::from(self.expiry_month) - i64::from(current_month)
    }
}

/// Flatten the three raw stores into one list.
///
/// Estate logs are always kept. Character logs are kept when their owner is
/// in `included`; relationship logs when both owner and target are. Order is
/// estate logs, then character logs, then relationship logs, each by owner
/// in store order. Later tie-breaks depend on this order.
pub fn normalize(stores: &LogStores, included: &HashSet<CharacterId>) -> Vec<UnifiedLog> {
    let mut out = Vec::new();

    for log in &stores.estate_logs {
        out.push(UnifiedLog {
            subject: LogSubject::Estate,
            month: log.month,
            beat: log.beat,
            expiry_month: log.expiry_month,
            text: log.entry.clone(),
        });
    }

    for (owner, logs) in &stores.character_logs {
        if !included.contains(owner) {
            continue;
        }
        for log in logs {
            out.push(UnifiedLog {
                subject: LogSubject::Character {
                    owner: owner.clone(),
                },
                month: log.month,
                beat: log.beat,
                expiry_month: log.expiry_month,
                text: log.entry.clone(),
            });
        }
    }

    for (owner, logs) in &stores.relationship_logs {
        if !included.contains(owner) {
            continue;
        }
        for log in logs {
            if !included.contains(&log.target) {
                continue;
            }
            out.push(UnifiedLog {
                subject: LogSubject::pair(owner.clone(), log.target.clone()),
                month: log.month,
                beat: log.beat,
                expiry_month: log.expiry_month,
                text: log.entry.clone(),
            });
        }
    }

    for log in out.iter().filter(|l| l.beat >= BEATS_PER_MONTH) {
        warn!(
            month = log.month,
            beat = log.beat,
            "log beat exceeds per-month bound, recency score clamped"
        );
    }

    out
}

/// Drop every log whose [`DedupKey`] was already seen, keeping the first.
pub fn dedupe(mut logs: Vec<UnifiedLog>) -> Vec<UnifiedLog> {
    let before = logs.len();

    let first_seen: Vec<bool> = {
        let mut seen = HashSet::new();
        logs.iter().map(|log| seen.insert(log.dedup_key())).collect()
    };
    let mut first_seen = first_seen.into_iter();
    logs.retain(|_| first_seen.next().unwrap_or(false));

    if logs.len() < before {
        debug!(removed = before - logs.len(), "collapsed duplicate logs");
    }
    logs
}
