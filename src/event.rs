//! Event taxonomy and the line classifier.
//!
//! `classify` maps the free-text message of a log line to one
//! [`EventKind`] using an ordered rule table with first-match-wins
//! semantics. Several cues are substrings of contexts matched by other
//! cues (e.g. the bare "Update" catch-all, or the two "Out of Stock"
//! case variants), so rule order is an invariant: the table must stay a
//! sequence, never a map.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of one interesting log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// Device began serving a drink
    Started,
    /// Serving finished successfully
    Completed,
    /// User placed an order
    Ordered,
    /// Transient warning while dispensing
    DispenseWarning,
    /// Out-of-stock warning during serving
    OutOfStockWarning,
    /// Serving aborted; carries a reason payload
    Stopped,
    /// Out of stock (lowercase firmware variant)
    OutOfStock,
    /// Tube fill started
    StartedFill,
    /// Tube fill finished
    FinishedFill,
    /// Interpreter exception surfaced in the log (TypeError/KeyError)
    PythonError,
    /// Recipe synchronization failed
    SyncError,
    /// Cleaning cycle activity
    Cleaning,
    /// Device waiting
    Wait,
    /// No flow detected while filling a tube
    NoFlowWarning,
    /// Cloud login failure
    LoginError,
    /// Connectivity dropped
    LostConnection,
    /// Software update activity
    Updating,
    /// Calibration started or finished
    Calibration,
    /// User retried an order
    RetryOrder,
    /// User requested customer service
    RequestedCustomerService,
    /// User selected the fill-tube maintenance action
    SelectedFillTube,
    /// User selected the weekly cleaning action
    SelectedCleaning,
    /// Interesting line with no recognized cue
    Unknown,
}

/// Classification rules, evaluated top to bottom; the first matching
/// predicate wins. The bare "Update" and "Wait" cues are catch-alls and
/// must stay below the more specific phrases they would shadow.
const RULES: &[(fn(&str) -> bool, EventKind)] = &[
    (|m| m.contains("Start Serving"), EventKind::Started),
    (|m| m.contains("Serving Complete"), EventKind::Completed),
    (|m| m.starts_with("['order"), EventKind::Ordered),
    (
        |m| m.contains("Serving: Dispensing Warning"),
        EventKind::DispenseWarning,
    ),
    (
        |m| m.contains("Serving: Out Of Stock"),
        EventKind::OutOfStockWarning,
    ),
    (|m| m.contains("Serving Stopped"), EventKind::Stopped),
    (|m| m.contains("Serving: Out of Stock"), EventKind::OutOfStock),
    (|m| m.contains("Fill Tube Start"), EventKind::StartedFill),
    (|m| m.contains("Fill Tube Complete"), EventKind::FinishedFill),
    (
        |m| m.contains("TypeError") || m.contains("KeyError"),
        EventKind::PythonError,
    ),
    (|m| m.contains("Sync recipe failed"), EventKind::SyncError),
    (
        |m| {
            m.contains("Cleaning")
                || m.contains("Circular")
                || m.contains("Draining")
                || m.contains("Empty Tubes")
        },
        EventKind::Cleaning,
    ),
    (|m| m.contains("Wait"), EventKind::Wait),
    (
        |m| m.contains("Fill Tube: No Flow Detected"),
        EventKind::NoFlowWarning,
    ),
    (|m| m.contains("Cloudbar login error"), EventKind::LoginError),
    (|m| m.contains("Lost connection"), EventKind::LostConnection),
    (
        |m| {
            m.contains("update package") || m.contains("useless files") || m.contains("Update")
        },
        EventKind::Updating,
    ),
    (
        |m| m.contains("Start Calibration") || m.contains("Calibration Complete"),
        EventKind::Calibration,
    ),
    // "ordering_rety" is the literal (misspelled) token the firmware emits.
    (|m| m.contains("ordering_rety"), EventKind::RetryOrder),
    (
        |m| m.contains("customer_service_request"),
        EventKind::RequestedCustomerService,
    ),
    (|m| m.contains("fill_tube_start"), EventKind::SelectedFillTube),
    (
        |m| m.contains("weekly_cleaning_start"),
        EventKind::SelectedCleaning,
    ),
];

/// Classify one message into its event kind.
///
/// Total and deterministic: every string yields exactly one kind, and
/// unrecognized messages yield [`EventKind::Unknown`].
pub fn classify(message: &str) -> EventKind {
    for (matches, kind) in RULES {
        if matches(message) {
            return *kind;
        }
    }
    EventKind::Unknown
}

impl EventKind {
    /// Human-readable label used in reports and outcome strings.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Started => "started",
            EventKind::Completed => "completed",
            EventKind::Ordered => "ordered",
            EventKind::DispenseWarning => "dispense warning",
            EventKind::OutOfStockWarning => "out of stock warning",
            EventKind::Stopped => "stopped",
            EventKind::OutOfStock => "out of stock",
            EventKind::StartedFill => "started fill",
            EventKind::FinishedFill => "finished fill",
            EventKind::PythonError => "python error",
            EventKind::SyncError => "sync error",
            EventKind::Cleaning => "cleaning",
            EventKind::Wait => "wait",
            EventKind::NoFlowWarning => "no flow warning",
            EventKind::LoginError => "login error",
            EventKind::LostConnection => "lost connection",
            EventKind::Updating => "updating",
            EventKind::Calibration => "calibration",
            EventKind::RetryOrder => "retry order",
            EventKind::RequestedCustomerService => "requested customer service",
            EventKind::SelectedFillTube => "selected fill tube",
            EventKind::SelectedCleaning => "selected cleaning",
            EventKind::Unknown => "unknown",
        }
    }

    /// True for events that represent a user-initiated request.
    pub fn is_action(self) -> bool {
        matches!(
            self,
            EventKind::Ordered
                | EventKind::RetryOrder
                | EventKind::SelectedFillTube
                | EventKind::SelectedCleaning
                | EventKind::RequestedCustomerService
        )
    }

    /// True for the two kinds that count as an order.
    pub fn is_order(self) -> bool {
        matches!(self, EventKind::Ordered | EventKind::RetryOrder)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
