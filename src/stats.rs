//! Order statistics.
//!
//! Reduces a file's action-outcome pairs into order counts, and merges
//! per-file stats into a directory summary by plain summation, so files
//! can be processed in any order (or in parallel) without shared state.

use serde::{Deserialize, Serialize};

use crate::correlate::ActionOutcomePair;

/// Outcome label that marks an order as incomplete when present.
const STOPPED_MARKER: &str = "stopped";
/// Exact outcome label of a stop caused by a dispensing warning.
const WARNING_STOP: &str = "stopped - dispensing warning";
/// Exact outcome label of a successful completion.
const COMPLETED: &str = "completed";

/// Order counts reduced from one file's pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTally {
    /// Pairs whose action was an order or a retry.
    pub orders: u64,
    /// Order pairs whose outcome was a stop.
    pub incomplete: u64,
    /// Warning-stops immediately followed by a completed reorder.
    pub self_resolved: u64,
}

/// Reduce action-outcome pairs into an [`OrderTally`].
///
/// Self-resolution is a two-pair pattern: the previous pair stopped
/// with a dispensing warning, and the current pair is an order that
/// completed. An empty input yields the zero tally.
pub fn summarize(pairs: &[ActionOutcomePair]) -> OrderTally {
    let mut tally = OrderTally::default();

    for pair in pairs {
        if pair.action_kind.is_order() {
            tally.orders += 1;
            if pair.outcome.contains(STOPPED_MARKER) {
                tally.incomplete += 1;
            }
        }
    }

    for window in pairs.windows(2) {
        let (prev, current) = (&window[0], &window[1]);
        if prev.outcome == WARNING_STOP
            && current.action_kind.is_order()
            && current.outcome == COMPLETED
        {
            tally.self_resolved += 1;
        }
    }

    tally
}

/// Per-file statistics row, shaped for tabular export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub filename: String,
    pub num_orders: u64,
    pub num_incomplete: u64,
    pub self_resolved: u64,
}

impl FileStats {
    pub fn new(filename: impl Into<String>, tally: OrderTally) -> Self {
        Self {
            filename: filename.into(),
            num_orders: tally.orders,
            num_incomplete: tally.incomplete,
            self_resolved: tally.self_resolved,
        }
    }
}

/// Directory-level totals plus the per-file rows they were summed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySummary {
    pub total_orders: u64,
    pub total_incomplete: u64,
    pub total_self_resolved: u64,
    pub per_file: Vec<FileStats>,
}

impl DirectorySummary {
    /// Fold one file's stats into the totals.
    pub fn push(&mut self, stats: FileStats) {
        self.total_orders += stats.num_orders;
        self.total_incomplete += stats.num_incomplete;
        self.total_self_resolved += stats.self_resolved;
        self.per_file.push(stats);
    }

    /// Percentage of incomplete orders, or `None` when there were no
    /// orders at all (the division is never attempted).
    pub fn percent_incomplete(&self) -> Option<f64> {
        if self.total_orders == 0 {
            return None;
        }
        Some(self.total_incomplete as f64 / self.total_orders as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn pair(
        action_kind: EventKind,
        action_line: usize,
        outcome: &str,
        outcome_line: usize,
    ) -> ActionOutcomePair {
        ActionOutcomePair {
            action_kind,
            action_line,
            outcome: outcome.to_string(),
            outcome_line,
        }
    }

    #[test]
    fn test_summarize_empty_is_zero() {
        assert_eq!(summarize(&[]), OrderTally::default());
    }

    #[test]
    fn test_orders_and_incompletes() {
        let pairs = vec![
            pair(EventKind::Ordered, 1, "completed", 2),
            pair(EventKind::Ordered, 3, "stopped - out of stock", 4),
            pair(EventKind::SelectedFillTube, 5, "finished fill", 6),
        ];
        let tally = summarize(&pairs);
        assert_eq!(tally.orders, 2);
        assert_eq!(tally.incomplete, 1);
        assert_eq!(tally.self_resolved, 0);
    }

    /// A warning-stop followed by a completed reorder counts as
    /// self-resolved.
    #[test]
    fn test_self_resolved_scenario() {
        let pairs = vec![
            pair(EventKind::Ordered, 1, "stopped - dispensing warning", 2),
            pair(EventKind::RetryOrder, 3, "completed", 4),
        ];
        let tally = summarize(&pairs);
        assert_eq!(tally.orders, 2);
        assert_eq!(tally.incomplete, 1);
        assert_eq!(tally.self_resolved, 1);
    }

    /// Other stop reasons do not start a self-resolution pattern.
    #[test]
    fn test_non_warning_stop_is_not_self_resolution() {
        let pairs = vec![
            pair(EventKind::Ordered, 1, "stopped - out of stock", 2),
            pair(EventKind::RetryOrder, 3, "completed", 4),
        ];
        assert_eq!(summarize(&pairs).self_resolved, 0);
    }

    /// The follow-up must be an order kind with a completed outcome.
    #[test]
    fn test_self_resolution_requires_completed_reorder() {
        let pairs = vec![
            pair(EventKind::Ordered, 1, "stopped - dispensing warning", 2),
            pair(EventKind::RetryOrder, 3, "stopped - dispensing warning", 4),
            pair(EventKind::SelectedCleaning, 5, "completed", 6),
        ];
        assert_eq!(summarize(&pairs).self_resolved, 0);
    }

    #[test]
    fn test_incomplete_never_exceeds_orders() {
        let pairs = vec![
            pair(EventKind::Ordered, 1, "stopped - jam", 2),
            pair(EventKind::RetryOrder, 3, "stopped - jam", 4),
        ];
        let tally = summarize(&pairs);
        assert!(tally.incomplete <= tally.orders);
    }

    #[test]
    fn test_directory_summation_is_order_independent() {
        let a = FileStats::new(
            "a.log",
            OrderTally {
                orders: 3,
                incomplete: 1,
                self_resolved: 1,
            },
        );
        let b = FileStats::new(
            "b.log",
            OrderTally {
                orders: 5,
                incomplete: 2,
                self_resolved: 0,
            },
        );

        let mut forward = DirectorySummary::default();
        forward.push(a.clone());
        forward.push(b.clone());

        let mut backward = DirectorySummary::default();
        backward.push(b);
        backward.push(a);

        assert_eq!(forward.total_orders, backward.total_orders);
        assert_eq!(forward.total_incomplete, backward.total_incomplete);
        assert_eq!(forward.total_self_resolved, backward.total_self_resolved);
        assert_eq!(forward.total_orders, 8);
    }

    #[test]
    fn test_percent_incomplete_guards_zero_orders() {
        let empty = DirectorySummary::default();
        assert_eq!(empty.percent_incomplete(), None);

        let mut summary = DirectorySummary::default();
        summary.push(FileStats::new(
            "a.log",
            OrderTally {
                orders: 4,
                incomplete: 1,
                self_resolved: 0,
            },
        ));
        let pct = summary.percent_incomplete().unwrap();
        assert!((pct - 25.0).abs() < 1e-9);
    }
}
