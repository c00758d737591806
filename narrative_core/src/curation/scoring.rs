//! Bucket scorers.
//!
//! Both scorers are pure: the score depends only on the log, the selection
//! state passed in, and the configured weights.

use super::{LogKind, LogSubject, Scorer, SelectionState, UnifiedLog};
use crate::config::{BreadthPenalties, GlueConfig, KindBonus, StakesConfig};

/// Weight of `expiry_month` in the stakes importance term.
const STAKES_IMPORTANCE_PER_MONTH: f64 = 1000.0;

/// Recency-heavy scoring for near-expiry logs.
///
/// `recency_key + expiry bonus + kind bonus - breadth penalty`
#[derive(Debug, Clone, Copy)]
pub struct GlueScorer<'a> {
    pub current_month: u32,
    pub config: &'a GlueConfig,
}

impl Scorer for GlueScorer<'_> {
    fn score(&self, log: &UnifiedLog, state: &SelectionState) -> f64 {
        let expiry_bonus = if log.expiry_offset(self.current_month) == 1 {
            self.config.expiry_plus_one_bonus
        } else {
            0.0
        };

        log.recency_key() + expiry_bonus + kind_bonus(&self.config.kind_bonus, log.kind())
            - breadth_penalty(log, state, &self.config.penalties)
    }
}

/// Importance-heavy scoring for long-horizon logs.
///
/// `expiry_month * 1000 + recency_key * multiplier + kind bonus - breadth penalty`
#[derive(Debug, Clone, Copy)]
pub struct StakesScorer<'a> {
    pub config: &'a StakesConfig,
}

impl Scorer for StakesScorer<'_> {
    fn score(&self, log: &UnifiedLog, state: &SelectionState) -> f64 {
        let importance = f64::from(log.expiry_month) * STAKES_IMPORTANCE_PER_MONTH;
        let recency_bonus = log.recency_key() * self.config.recency_multiplier;

        importance + recency_bonus + kind_bonus(&self.config.kind_bonus, log.kind())
            - breadth_penalty(log, state, &self.config.penalties)
    }
}

pub fn kind_bonus(bonus: &KindBonus, kind: LogKind) -> f64 {
    match kind {
        LogKind::Relationship => bonus.relationship,
        LogKind::Character => bonus.character,
        LogKind::Estate => bonus.estate,
    }
}

/// Deduction for repeating characters already in the selection.
///
/// Character logs pay for a repeated owner and, separately, for an owner who
/// already shows up in a selected relationship. Relationship logs pay once if
/// either participant is already in a selected relationship. Estate logs
/// never pay.
pub fn breadth_penalty(
    log: &UnifiedLog,
    state: &SelectionState,
    penalties: &BreadthPenalties,
) -> f64 {
    match &log.subject {
        LogSubject::Estate => 0.0,
        LogSubject::Character { owner } => {
            let mut penalty = 0.0;
            if state.owns_selected_character_log(owner) {
                penalty += penalties.repeat_owner;
            }
            if state.in_selected_relationship(owner) {
                penalty += penalties.owner_in_relationship;
            }
            penalty
        }
        LogSubject::Relationship { a, b } => {
            if state.in_selected_relationship(a) || state.in_selected_relationship(b) {
                penalties.relationship_participant_reused
            } else {
                0.0
            }
        }
    }
}
