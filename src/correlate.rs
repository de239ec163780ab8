//! Action-outcome correlation.
//!
//! Pairs each user action with the outcome events observed before the
//! next action. The span between two consecutive actions is the
//! window; outcomes inside it are attributed to the earlier action. The
//! final action has no window and yields nothing. A window may contain
//! several outcomes (e.g. a stop followed by a completion), and each
//! one produces its own pair.

use crate::event::EventKind;
use crate::parser::LogLine;

/// Outcome kinds used when the config does not override them.
pub const DEFAULT_OUTCOMES: [EventKind; 3] = [
    EventKind::Stopped,
    EventKind::Completed,
    EventKind::FinishedFill,
];

/// One user action paired with one outcome from its window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcomePair {
    /// Kind of the initiating action.
    pub action_kind: EventKind,
    /// 1-based line of the action in the source file.
    pub action_line: usize,
    /// Outcome label; for stops this is `"stopped - {reason}"`.
    pub outcome: String,
    /// 1-based line of the outcome.
    pub outcome_line: usize,
}

/// Correlate a file's event sequence into action-outcome pairs.
pub fn correlate(lines: &[LogLine], outcomes: &[EventKind]) -> Vec<ActionOutcomePair> {
    let action_inds: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.kind.is_action())
        .map(|(i, _)| i)
        .collect();

    let mut pairs = Vec::new();
    for window in action_inds.windows(2) {
        let (ind, next_ind) = (window[0], window[1]);
        let action = &lines[ind];
        for line in &lines[ind + 1..next_ind] {
            if outcomes.contains(&line.kind) {
                pairs.push(ActionOutcomePair {
                    action_kind: action.kind,
                    action_line: action.line_index,
                    outcome: outcome_label(line),
                    outcome_line: line.line_index,
                });
            }
        }
    }
    pairs
}

/// Label for an outcome line. Stops embed their reason so that
/// downstream reporting can tell a warning-stop from other stops.
fn outcome_label(line: &LogLine) -> String {
    match (line.kind, line.detail.as_deref()) {
        (EventKind::Stopped, Some(reason)) => format!("stopped - {reason}"),
        (kind, _) => kind.label().to_string(),
    }
}
