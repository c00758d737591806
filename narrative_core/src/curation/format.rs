//! Output ordering and rendering.

use std::cmp::Reverse;

use super::{SelectedLog, UnifiedLog};

/// Newest first, so glue reads like "what just happened".
pub fn order_glue(logs: &mut [SelectedLog]) {
    logs.sort_by_key(|s| Reverse(s.log.recency()));
}

/// Longest-lasting first, then newest.
pub fn order_stakes(logs: &mut [SelectedLog]) {
    logs.sort_by_key(|s| Reverse((s.log.expiry_month, s.log.recency())));
}

/// Whole months between the log and `current_month`, never negative.
pub fn months_ago(current_month: u32, log: &UnifiedLog) -> u32 {
    current_month.saturating_sub(log.month)
}

/// Render a log as `"<N> months ago: <text>"`.
pub fn format_line(current_month: u32, log: &UnifiedLog) -> String {
    format!("{} months ago: {}", months_ago(current_month, log), log.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curation::LogSubject;

    fn selected(month: u32, beat: u32, expiry_month: u32, text: &str) -> SelectedLog {
        SelectedLog {
            log: UnifiedLog {
                subject: LogSubject::Estate,
                month,
                beat,
                expiry_month,
                text: text.to_string(),
            },
            score: 0.0,
        }
    }

    fn texts(logs: &[SelectedLog]) -> Vec<&str> {
        logs.iter().map(|s| s.log.text.as_str()).collect()
    }

    #[test]
    fn test_format_line() {
        let log = selected(5, 0, 6, "The mill burned").log;
        assert_eq!(format_line(5, &log), "0 months ago: The mill burned");

        let log = selected(2, 0, 6, "A stranger arrived").log;
        assert_eq!(format_line(5, &log), "3 months ago: A stranger arrived");
    }

    #[test]
    fn test_future_month_clamps_to_zero() {
        let log = selected(8, 0, 9, "Foretold").log;
        assert_eq!(months_ago(5, &log), 0);
    }

    #[test]
    fn test_glue_newest_first() {
        let mut logs = vec![
            selected(9, 1, 10, "older"),
            selected(10, 0, 10, "newest"),
            selected(9, 3, 10, "later beat"),
        ];
        order_glue(&mut logs);
        assert_eq!(texts(&logs), vec!["newest", "later beat", "older"]);
    }

    #[test]
    fn test_glue_order_ignores_beat_bound() {
        let mut logs = vec![selected(9, 1500, 10, "runaway"), selected(10, 0, 10, "next month")];
        order_glue(&mut logs);
        assert_eq!(texts(&logs), vec!["next month", "runaway"]);
    }

    #[test]
    fn test_stakes_by_expiry_then_recency() {
        let mut logs = vec![
            selected(3, 0, 15, "old, long"),
            selected(8, 0, 12, "short"),
            selected(6, 0, 15, "newer, long"),
        ];
        order_stakes(&mut logs);
        assert_eq!(texts(&logs), vec!["newer, long", "old, long", "short"]);
    }
}
