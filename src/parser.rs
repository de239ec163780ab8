//! Log file parsing.
//!
//! A device log is line-oriented: `timestamp - level - message`, with
//! `" - "` as the literal field separator. The parser keeps only the
//! "interesting" lines (structural markers, critical-severity lines and
//! the user-action tokens), classifies them, and records recoverable
//! per-line failures instead of aborting the file.

use crate::event::{self, EventKind};

/// Severity tag that always marks a line as interesting.
const CRITICAL_LEVEL: &str = "[CRITICAL]";

/// One classified log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// 1-based position in the source file.
    pub line_index: usize,
    /// Raw timestamp field, kept opaque.
    pub timestamp: String,
    /// Classified event kind.
    pub kind: EventKind,
    /// Reason payload for `Stopped` lines; raw line text for `Unknown`.
    pub detail: Option<String>,
}

/// Recoverable per-line parse failure. The offending line is skipped
/// and processing continues with the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// The line did not split into exactly three `" - "` fields.
    LineSplit { line_index: usize },
    /// A `Stopped` message did not have the expected two-element
    /// bracketed shape, so no reason could be extracted.
    StopReason { line_index: usize },
}

impl ParseFailure {
    /// 1-based line number the failure refers to.
    pub fn line_index(&self) -> usize {
        match self {
            ParseFailure::LineSplit { line_index } => *line_index,
            ParseFailure::StopReason { line_index } => *line_index,
        }
    }
}

/// Result of parsing one file: the classified lines in original order,
/// plus any per-line failures encountered along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub lines: Vec<LogLine>,
    pub failures: Vec<ParseFailure>,
}

/// Parse the full contents of one log file.
pub fn parse(contents: &str) -> Parsed {
    let mut parsed = Parsed::default();

    for (i, raw) in contents.lines().enumerate() {
        let line_index = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(" - ").collect();
        let &[timestamp, level, message] = fields.as_slice() else {
            parsed.failures.push(ParseFailure::LineSplit { line_index });
            continue;
        };

        if !is_interesting(level, message) {
            continue;
        }

        let kind = event::classify(message);
        let detail = match kind {
            EventKind::Unknown => Some(line.to_string()),
            EventKind::Stopped => match stop_reason(message) {
                Some(reason) => Some(reason.to_string()),
                None => {
                    parsed.failures.push(ParseFailure::StopReason { line_index });
                    continue;
                }
            },
            _ => None,
        };

        parsed.lines.push(LogLine {
            line_index,
            timestamp: timestamp.to_string(),
            kind,
            detail,
        });
    }

    parsed
}

/// A line is interesting when it carries one of the structural markers,
/// the critical severity tag, or a user-action token.
fn is_interesting(level: &str, message: &str) -> bool {
    message.starts_with("---")
        || message.starts_with("['--")
        || level == CRITICAL_LEVEL
        || message.starts_with("['order:")
        || message.contains("fill_tube_start")
        || message.contains("weekly_cleaning_start")
}

/// Extract the reason from a stop message of the exact shape
/// `['…', '…']`. Restricted on purpose: anything else is a
/// [`ParseFailure::StopReason`], never a general literal evaluator.
pub fn stop_reason(message: &str) -> Option<&str> {
    let inner = message.strip_prefix("['")?.strip_suffix("']")?;
    let (_, reason) = inner.split_once("', '")?;
    // A third element would mean the shape is not what we expect.
    if reason.contains("', '") {
        return None;
    }
    Some(reason)
}
