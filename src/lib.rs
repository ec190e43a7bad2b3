//! Scoring and eligibility rules for a local item-swapping marketplace.
//!
//! The crate holds the numeric and rule-table core the UI renders from:
//! composite trust scores with level classification, badge eligibility
//! against a configured catalog, listing lifecycle legality, and the shared
//! environmental-impact proxy. Every entry point is a pure, total function
//! over caller-supplied snapshots; persistence, transport, and rendering
//! stay with the surrounding application.

pub mod badges;
pub mod domain;
pub mod impact;
pub mod lifecycle;
pub mod trust;

pub use badges::{BadgeCatalog, BadgeEligibility, BadgeEngine, BadgeStatus, BadgeType};
pub use lifecycle::{available_transitions, can_transition, transition_for, ItemStatus};
pub use trust::{classify, TrustEngine, TrustLevel, TrustScoreBreakdown, TrustScoreFactors};
