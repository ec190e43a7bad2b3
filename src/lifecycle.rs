//! Listing lifecycle rules.
//!
//! Legal status changes live in a static transition table; absence of an
//! entry means the change is denied. A completed swap can never be reopened
//! in place: re-listing goes through `Removed` back to `Available`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Item;

/// Lifecycle states for a marketplace listing. `Draft` is the only initial
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Draft,
    Pending,
    Available,
    Requested,
    Swapped,
    Expired,
    Reported,
    Rejected,
    Removed,
}

impl ItemStatus {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Draft,
            Self::Pending,
            Self::Available,
            Self::Requested,
            Self::Swapped,
            Self::Expired,
            Self::Reported,
            Self::Rejected,
            Self::Removed,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending Review",
            Self::Available => "Available",
            Self::Requested => "Swap Requested",
            Self::Swapped => "Swapped",
            Self::Expired => "Expired",
            Self::Reported => "Reported",
            Self::Rejected => "Rejected",
            Self::Removed => "Removed",
        }
    }
}

/// One edge of the lifecycle graph, with the UI affordances attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRule {
    pub from: ItemStatus,
    pub to: ItemStatus,
    pub allowed: bool,
    pub requires_confirmation: bool,
    pub message: &'static str,
}

const fn rule(from: ItemStatus, to: ItemStatus, message: &'static str) -> TransitionRule {
    TransitionRule {
        from,
        to,
        allowed: true,
        requires_confirmation: false,
        message,
    }
}

const fn confirmed(from: ItemStatus, to: ItemStatus, message: &'static str) -> TransitionRule {
    TransitionRule {
        from,
        to,
        allowed: true,
        requires_confirmation: true,
        message,
    }
}

const fn denied(from: ItemStatus, to: ItemStatus, message: &'static str) -> TransitionRule {
    TransitionRule {
        from,
        to,
        allowed: false,
        requires_confirmation: false,
        message,
    }
}

/// Static adjacency table for the listing lifecycle. Pairs not listed here
/// are illegal.
const TRANSITIONS: &[TransitionRule] = &[
    rule(
        ItemStatus::Draft,
        ItemStatus::Available,
        "Listing published and visible to the neighborhood",
    ),
    rule(
        ItemStatus::Draft,
        ItemStatus::Pending,
        "Listing submitted for moderation review",
    ),
    confirmed(
        ItemStatus::Draft,
        ItemStatus::Removed,
        "Draft discarded before publishing",
    ),
    rule(
        ItemStatus::Pending,
        ItemStatus::Available,
        "Moderation approved the listing",
    ),
    rule(
        ItemStatus::Pending,
        ItemStatus::Rejected,
        "Moderation rejected the listing",
    ),
    rule(
        ItemStatus::Available,
        ItemStatus::Requested,
        "A neighbor requested a swap",
    ),
    rule(
        ItemStatus::Available,
        ItemStatus::Expired,
        "Listing passed its expiry date",
    ),
    rule(
        ItemStatus::Available,
        ItemStatus::Reported,
        "Listing flagged by the community",
    ),
    confirmed(
        ItemStatus::Available,
        ItemStatus::Removed,
        "Listing withdrawn by its owner",
    ),
    confirmed(
        ItemStatus::Requested,
        ItemStatus::Swapped,
        "Both sides confirmed the swap is complete",
    ),
    rule(
        ItemStatus::Requested,
        ItemStatus::Available,
        "Swap request cancelled; listing reopened",
    ),
    confirmed(
        ItemStatus::Requested,
        ItemStatus::Removed,
        "Listing withdrawn while a request was open",
    ),
    // Completed swaps stay completed; re-listing goes through Removed.
    denied(
        ItemStatus::Swapped,
        ItemStatus::Available,
        "A completed swap cannot be reopened; remove the listing and re-list it",
    ),
    confirmed(
        ItemStatus::Swapped,
        ItemStatus::Removed,
        "Completed listing archived",
    ),
    rule(
        ItemStatus::Expired,
        ItemStatus::Available,
        "Listing renewed for another period",
    ),
    rule(
        ItemStatus::Expired,
        ItemStatus::Removed,
        "Expired listing cleaned up",
    ),
    rule(
        ItemStatus::Reported,
        ItemStatus::Available,
        "Report reviewed and dismissed",
    ),
    rule(
        ItemStatus::Reported,
        ItemStatus::Rejected,
        "Report upheld by moderation",
    ),
    confirmed(
        ItemStatus::Reported,
        ItemStatus::Removed,
        "Listing taken down after a report",
    ),
    rule(
        ItemStatus::Rejected,
        ItemStatus::Draft,
        "Listing returned to draft for edits",
    ),
    rule(
        ItemStatus::Rejected,
        ItemStatus::Removed,
        "Rejected listing discarded",
    ),
    rule(
        ItemStatus::Removed,
        ItemStatus::Available,
        "Listing re-listed to the neighborhood",
    ),
    rule(
        ItemStatus::Removed,
        ItemStatus::Draft,
        "Removed listing restored as a draft",
    ),
];

/// Full rule for a `(from, to)` pair, including denied edges carried for
/// their message, or `None` when the pair is undefined.
pub fn transition_for(from: ItemStatus, to: ItemStatus) -> Option<&'static TransitionRule> {
    TRANSITIONS
        .iter()
        .find(|rule| rule.from == from && rule.to == to)
}

/// Whether the lifecycle permits `from -> to`. Unknown pairs are denied.
pub fn can_transition(from: ItemStatus, to: ItemStatus) -> bool {
    transition_for(from, to).map(|rule| rule.allowed).unwrap_or(false)
}

/// Every permitted outbound transition from `from`, in table order.
pub fn available_transitions(from: ItemStatus) -> Vec<&'static TransitionRule> {
    TRANSITIONS
        .iter()
        .filter(|rule| rule.from == from && rule.allowed)
        .collect()
}

/// Raised when a caller asks for a status change the table does not permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("illegal status transition {from:?} -> {to:?}")]
    Illegal { from: ItemStatus, to: ItemStatus },
}

impl Item {
    /// Apply a lifecycle transition, returning the rule that authorized it.
    ///
    /// Entering `Swapped` stamps `swap_completed_at` with the supplied
    /// timestamp so evaluation stays clock-free.
    pub fn transition_to(
        &mut self,
        to: ItemStatus,
        at: DateTime<Utc>,
    ) -> Result<&'static TransitionRule, TransitionError> {
        let from = self.status;
        let rule = transition_for(from, to)
            .filter(|rule| rule.allowed)
            .ok_or(TransitionError::Illegal { from, to })?;

        self.status = to;
        if to == ItemStatus::Swapped {
            self.swap_completed_at = Some(at);
        }

        tracing::debug!(from = from.label(), to = to.label(), item = %self.id.0, "item status changed");
        Ok(rule)
    }
}
