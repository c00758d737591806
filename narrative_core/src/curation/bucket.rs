//! Temporal bucketing of normalized logs.

use serde::{Deserialize, Serialize};

use super::UnifiedLog;

/// Expiry offsets (`expiry_month - current_month`) that make a log glue.
const GLUE_OFFSETS: std::ops::RangeInclusive<i64> = 0..=1;

/// Smallest expiry offset that makes a log stakes.
const STAKES_MIN_OFFSET: i64 = 2;

/// The two disjoint selection pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// About to lose relevance; keeps the latest happenings visible.
    Glue,

    /// Durable narrative weight.
    Stakes,
}

impl Bucket {
    /// Which bucket a log belongs to this month, if any. Expired logs
    /// belong to none.
    pub fn classify(log: &UnifiedLog, current_month: u32) -> Option<Bucket> {
        let offset = log.expiry_offset(current_month);
        if GLUE_OFFSETS.contains(&offset) {
            Some(Bucket::Glue)
        } else if offset >= STAKES_MIN_OFFSET {
            Some(Bucket::Stakes)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bucket::Glue => f.write_str("glue"),
            Bucket::Stakes => f.write_str("stakes"),
        }
    }
}

/// Glue and stakes candidates, each in input order.
#[derive(Debug, Clone, Default)]
pub struct Candidates {
    pub glue: Vec<UnifiedLog>,
    pub stakes: Vec<UnifiedLog>,

    /// Logs that were already expired.
    pub expired: usize,
}

/// Split logs into glue and stakes candidates, dropping expired ones.
pub fn partition(logs: Vec<UnifiedLog>, current_month: u32) -> Candidates {
    let mut candidates = Candidates::default();
    for log in logs {
        match Bucket::classify(&log, current_month) {
            Some(Bucket::Glue) => candidates.glue.push(log),
            Some(Bucket::Stakes) => candidates.stakes.push(log),
            None => candidates.expired += 1,
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curation::LogSubject;

    fn log_expiring(expiry_month: u32, text: &str) -> UnifiedLog {
        UnifiedLog {
            subject: LogSubject::Estate,
            month: 0,
            beat: 0,
            expiry_month,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_classify_offsets() {
        let current = 10;
        assert_eq!(Bucket::classify(&log_expiring(9, ""), current), None);
        assert_eq!(Bucket::classify(&log_expiring(10, ""), current), Some(Bucket::Glue));
        assert_eq!(Bucket::classify(&log_expiring(11, ""), current), Some(Bucket::Glue));
        assert_eq!(Bucket::classify(&log_expiring(12, ""), current), Some(Bucket::Stakes));
        assert_eq!(Bucket::classify(&log_expiring(1000, ""), current), Some(Bucket::Stakes));
    }

    #[test]
    fn test_classify_at_month_zero() {
        assert_eq!(Bucket::classify(&log_expiring(0, ""), 0), Some(Bucket::Glue));
        assert_eq!(Bucket::classify(&log_expiring(2, ""), 0), Some(Bucket::Stakes));
    }

    #[test]
    fn test_partition_preserves_order() {
        let logs = vec![
            log_expiring(12, "s1"),
            log_expiring(10, "g1"),
            log_expiring(3, "old"),
            log_expiring(20, "s2"),
            log_expiring(11, "g2"),
        ];

        let candidates = partition(logs, 10);

        let glue: Vec<_> = candidates.glue.iter().map(|l| l.text.as_str()).collect();
        let stakes: Vec<_> = candidates.stakes.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(glue, vec!["g1", "g2"]);
        assert_eq!(stakes, vec!["s1", "s2"]);
        assert_eq!(candidates.expired, 1);
    }
}
