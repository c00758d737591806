//! How long a logged event stays narratively relevant.

use serde::{Deserialize, Serialize};

/// Relevance horizon chosen when an event is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    Transient,
    ShortTerm,
    #[default]
    MidTerm,
    LongTerm,
    Permanent,
}

impl Timeframe {
    /// Months of relevance remaining after the month of the event.
    pub fn months(&self) -> u32 {
        match self {
            Timeframe::Transient => 0,
            Timeframe::ShortTerm => 1,
            Timeframe::MidTerm => 3,
            Timeframe::LongTerm => 7,
            Timeframe::Permanent => 12,
        }
    }

    /// Expiry month for an event logged in `month`.
    pub fn expiry_from(&self, month: u32) -> u32 {
        month.saturating_add(self.months())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_from() {
        assert_eq!(Timeframe::Transient.expiry_from(5), 5);
        assert_eq!(Timeframe::ShortTerm.expiry_from(5), 6);
        assert_eq!(Timeframe::MidTerm.expiry_from(5), 8);
        assert_eq!(Timeframe::LongTerm.expiry_from(5), 12);
        assert_eq!(Timeframe::Permanent.expiry_from(5), 17);
    }

    #[test]
    fn test_snake_case_names() {
        let tf: Timeframe = serde_json::from_str("\"short_term\"").unwrap();
        assert_eq!(tf, Timeframe::ShortTerm);
        assert_eq!(Timeframe::default(), Timeframe::MidTerm);
    }
}
