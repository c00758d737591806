//! Greedy, diversity-aware selection.
//!
//! Each round scores every remaining candidate against what has already been
//! picked, takes the best one, and records its characters so later rounds
//! can penalize repeats. Scores therefore depend on pick order; this is a
//! maximal-marginal-relevance style heuristic, not an exact optimum.

use game_rules::CharacterId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use super::{LogSubject, UnifiedLog};

/// A picked log with the score it had when it was picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedLog {
    pub log: UnifiedLog,
    pub score: f64,
}

/// What has been picked so far in a single bucket run.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Vec<SelectedLog>,

    /// Owners of selected character logs.
    character_owners: HashSet<CharacterId>,

    /// Participants of selected relationship logs.
    relationship_participants: HashSet<CharacterId>,
}

impl SelectionState {
    /// Create an empty selection state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pick and update breadth tracking.
    pub fn record(&mut self, log: UnifiedLog, score: f64) {
        match &log.subject {
            LogSubject::Estate => {}
            LogSubject::Character { owner } => {
                self.character_owners.insert(owner.clone());
            }
            LogSubject::Relationship { a, b } => {
                self.relationship_participants.insert(a.clone());
                self.relationship_participants.insert(b.clone());
            }
        }
        self.selected.push(SelectedLog { log, score });
    }

    /// Whether `id` owns a selected character log.
    pub fn owns_selected_character_log(&self, id: &CharacterId) -> bool {
        self.character_owners.contains(id)
    }

    /// Whether `id` appears in a selected relationship log.
    pub fn in_selected_relationship(&self, id: &CharacterId) -> bool {
        self.relationship_participants.contains(id)
    }

    pub fn selected(&self) -> &[SelectedLog] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Consume the state, returning picks in pick order.
    pub fn into_selected(self) -> Vec<SelectedLog> {
        self.selected
    }
}

/// Scores a candidate given the current selection.
pub trait Scorer {
    fn score(&self, log: &UnifiedLog, state: &SelectionState) -> f64;
}

impl<F> Scorer for F
where
    F: Fn(&UnifiedLog, &SelectionState) -> f64,
{
    fn score(&self, log: &UnifiedLog, state: &SelectionState) -> f64 {
        self(log, state)
    }
}

/// Pick up to `limit` candidates, one at a time, highest score first.
///
/// Ties go to the candidate that came earliest in `candidates`. Returns fewer
/// than `limit` picks when candidates run out.
pub fn select_greedy<S: Scorer + ?Sized>(
    candidates: Vec<UnifiedLog>,
    limit: usize,
    scorer: &S,
) -> Vec<SelectedLog> {
    let mut remaining = candidates;
    let mut state = SelectionState::new();

    while state.len() < limit && !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_score = f64::NEG_INFINITY;

        for (idx, candidate) in remaining.iter().enumerate() {
            let score = scorer.score(candidate, &state);
            if score > best_score {
                best_score = score;
                best_idx = idx;
            }
        }

        let picked = remaining.remove(best_idx);
        debug!(
            round = state.len(),
            kind = %picked.kind(),
            month = picked.month,
            beat = picked.beat,
            score = best_score,
            "picked log"
        );
        state.record(picked, best_score);
    }

    state.into_selected()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character_log(owner: &str, text: &str) -> UnifiedLog {
        UnifiedLog {
            subject: LogSubject::Character {
                owner: owner.into(),
            },
            month: 5,
            beat: 0,
            expiry_month: 5,
            text: text.to_string(),
        }
    }

    fn estate_log(text: &str) -> UnifiedLog {
        UnifiedLog {
            subject: LogSubject::Estate,
            month: 5,
            beat: 0,
            expiry_month: 5,
            text: text.to_string(),
        }
    }

    fn texts(picks: &[SelectedLog]) -> Vec<&str> {
        picks.iter().map(|p| p.log.text.as_str()).collect()
    }

    #[test]
    fn test_state_tracks_participants() {
        let mut state = SelectionState::new();
        state.record(estate_log("harvest"), 1.0);
        state.record(character_log("alaric", "ill"), 1.0);
        state.record(
            UnifiedLog {
                subject: LogSubject::pair("zora".into(), "brenna".into()),
                ..estate_log("feud")
            },
            1.0,
        );

        assert_eq!(state.len(), 3);
        assert!(state.owns_selected_character_log(&"alaric".into()));
        assert!(!state.owns_selected_character_log(&"brenna".into()));
        assert!(state.in_selected_relationship(&"brenna".into()));
        assert!(state.in_selected_relationship(&"zora".into()));
        assert!(!state.in_selected_relationship(&"alaric".into()));
    }

    #[test]
    fn test_ties_go_to_earliest() {
        let candidates = vec![estate_log("first"), estate_log("second"), estate_log("third")];
        let picks = select_greedy(candidates, 2, &|_: &UnifiedLog, _: &SelectionState| 1.0);

        assert_eq!(texts(&picks), vec!["first", "second"]);
    }

    #[test]
    fn test_highest_score_wins() {
        let candidates = vec![estate_log("a"), estate_log("bbb"), estate_log("cc")];
        let by_length = |log: &UnifiedLog, _: &SelectionState| log.text.len() as f64;
        let picks = select_greedy(candidates, 3, &by_length);

        assert_eq!(texts(&picks), vec!["bbb", "cc", "a"]);
        assert_eq!(picks[0].score, 3.0);
    }

    #[test]
    fn test_returns_fewer_when_exhausted() {
        let picks = select_greedy(vec![estate_log("only")], 5, &|_: &UnifiedLog, _: &SelectionState| 0.0);
        assert_eq!(picks.len(), 1);

        let none = select_greedy(Vec::new(), 5, &|_: &UnifiedLog, _: &SelectionState| 0.0);
        assert!(none.is_empty());
    }

    #[test]
    fn test_zero_limit() {
        let picks = select_greedy(vec![estate_log("a")], 0, &|_: &UnifiedLog, _: &SelectionState| 0.0);
        assert!(picks.is_empty());
    }

    #[test]
    fn test_state_feeds_back_into_scores() {
        // Penalize any owner already picked; the second alaric log should lose
        // to brenna's even though it comes first.
        let scorer = |log: &UnifiedLog, state: &SelectionState| match &log.subject {
            LogSubject::Character { owner } if state.owns_selected_character_log(owner) => 0.0,
            _ => 10.0,
        };

        let candidates = vec![
            character_log("alaric", "a1"),
            character_log("alaric", "a2"),
            character_log("brenna", "b1"),
        ];
        let picks = select_greedy(candidates, 2, &scorer);

        assert_eq!(texts(&picks), vec!["a1", "b1"]);
    }
}
