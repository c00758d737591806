//! Log Curator - picks which past events make it into a narrative prompt.
//!
//! The curation pipeline works as follows:
//! 1. **Normalize**: Flatten estate, character, and relationship logs into one list,
//!    keeping only logs about the focus characters
//! 2. **Dedupe**: Collapse mirrored relationship entries and accidental copies
//! 3. **Partition**: Split into glue (expiring this month or next) and stakes
//!    (two or more months left); expired logs are dropped
//! 4. **Select**: Greedily pick the best-scoring log per bucket, penalizing
//!    characters already represented
//! 5. **Order**: Glue newest first; stakes longest-lasting first
//! 6. **Format**: Render each log as `"<N> months ago: <text>"`

mod bucket;
mod format;
mod scoring;
mod selection;
mod unified;

pub use bucket::*;
pub use format::*;
pub use scoring::*;
pub use selection::*;
pub use unified::*;

use game_rules::{CharacterId, Estate, LogStores};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, debug_span};

use crate::config::CurationConfig;

/// The log curator selects a bounded, diverse set of past events.
#[derive(Debug, Clone, Default)]
pub struct LogCurator {
    config: CurationConfig,
}

impl LogCurator {
    /// Create a curator with the given configuration.
    pub fn new(config: CurationConfig) -> Self {
        Self { config }
    }

    /// Create a curator with the tuned default weights.
    pub fn with_defaults() -> Self {
        Self::new(CurationConfig::default())
    }

    pub fn config(&self) -> &CurationConfig {
        &self.config
    }

    /// Run the full pipeline over a store snapshot.
    ///
    /// Never fails: logs about characters outside `focus`, expired logs, and
    /// empty buckets are simply left out.
    pub fn curate(
        &self,
        stores: &LogStores,
        focus: &[CharacterId],
        current_month: u32,
    ) -> CuratedLogs {
        let included: HashSet<CharacterId> = focus.iter().cloned().collect();

        let mut logs = normalize(stores, &included);
        let normalized = logs.len();
        if self.config.dedupe_enabled {
            logs = dedupe(logs);
        }

        let candidates = partition(logs, current_month);
        debug!(
            normalized,
            glue_candidates = candidates.glue.len(),
            stakes_candidates = candidates.stakes.len(),
            expired = candidates.expired,
            "partitioned logs"
        );

        let mut glue = {
            let _span = debug_span!("select", bucket = %Bucket::Glue).entered();
            let scorer = GlueScorer {
                current_month,
                config: &self.config.glue,
            };
            select_greedy(candidates.glue, self.config.glue.limit, &scorer)
        };

        let mut stakes = {
            let _span = debug_span!("select", bucket = %Bucket::Stakes).entered();
            let scorer = StakesScorer {
                config: &self.config.stakes,
            };
            select_greedy(candidates.stakes, self.config.stakes.limit, &scorer)
        };

        order_glue(&mut glue);
        order_stakes(&mut stakes);

        debug!(glue = glue.len(), stakes = stakes.len(), "curated logs");

        CuratedLogs {
            current_month,
            glue,
            stakes,
        }
    }

    /// Curated lines for the estate's current month and the given focus group.
    pub fn filter_logs(&self, estate: &Estate, focus: &[CharacterId]) -> Vec<String> {
        self.curate(&estate.logs, focus, estate.current_month())
            .to_lines()
    }
}

/// Result of a curation run, both buckets already in output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedLogs {
    pub current_month: u32,
    pub glue: Vec<SelectedLog>,
    pub stakes: Vec<SelectedLog>,
}

impl CuratedLogs {
    /// All picks, glue first.
    pub fn iter(&self) -> impl Iterator<Item = &SelectedLog> {
        self.glue.iter().chain(self.stakes.iter())
    }

    pub fn len(&self) -> usize {
        self.glue.len() + self.stakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glue.is_empty() && self.stakes.is_empty()
    }

    /// Render every pick, glue first, as `"<N> months ago: <text>"`.
    pub fn to_lines(&self) -> Vec<String> {
        self.iter()
            .map(|s| format_line(self.current_month, &s.log))
            .collect()
    }
}
