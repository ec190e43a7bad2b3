//! Badge eligibility evaluation.
//!
//! Each badge tracks one member counter against a configured threshold. The
//! evaluator is pure: identical profiles always produce identical results.

mod catalog;

pub use catalog::{BadgeCatalog, BadgeCriterion, BadgeDefinition, BadgeType, CatalogError};

use serde::{Deserialize, Serialize};

use crate::domain::{profile_completeness, UserProfile};
use crate::impact;

/// Reviews a member needs before rating-based badges count at all.
const RATING_BADGE_MIN_REVIEWS: u32 = 10;

/// Eligibility snapshot for one `(member, badge)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BadgeEligibility {
    pub eligible: bool,
    /// Percent of the threshold reached, in [0, 100].
    pub progress: f64,
    /// Counter units still missing; 0 once eligible.
    pub remaining: f64,
}

/// Catalog entry plus the member's current standing against it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BadgeStatus {
    pub badge: BadgeType,
    pub criterion: BadgeCriterion,
    pub threshold: f64,
    pub eligibility: BadgeEligibility,
}

/// Stateless evaluator over an injected badge table.
#[derive(Debug, Clone, Default)]
pub struct BadgeEngine {
    catalog: BadgeCatalog,
}

impl BadgeEngine {
    pub fn new(catalog: BadgeCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &BadgeCatalog {
        &self.catalog
    }

    /// Eligibility for one badge. Unknown badges (absent from the injected
    /// catalog) report zero progress rather than failing.
    pub fn check(&self, profile: &UserProfile, badge: BadgeType) -> BadgeEligibility {
        match self.catalog.definition_for(badge) {
            Some(definition) => eligibility(profile, definition),
            None => BadgeEligibility {
                eligible: false,
                progress: 0.0,
                remaining: 0.0,
            },
        }
    }

    /// Standing against every badge in the catalog, in catalog order.
    pub fn statuses(&self, profile: &UserProfile) -> Vec<BadgeStatus> {
        let statuses: Vec<BadgeStatus> = self
            .catalog
            .definitions()
            .iter()
            .map(|definition| BadgeStatus {
                badge: definition.badge,
                criterion: definition.criterion,
                threshold: definition.threshold,
                eligibility: eligibility(profile, definition),
            })
            .collect();

        tracing::debug!(
            member = %profile.id.0,
            earned = statuses.iter().filter(|status| status.eligibility.eligible).count(),
            total = statuses.len(),
            "badge sweep evaluated"
        );
        statuses
    }

    /// Badge types the member has already unlocked.
    pub fn earned(&self, profile: &UserProfile) -> Vec<BadgeType> {
        self.statuses(profile)
            .into_iter()
            .filter(|status| status.eligibility.eligible)
            .map(|status| status.badge)
            .collect()
    }
}

fn eligibility(profile: &UserProfile, definition: &BadgeDefinition) -> BadgeEligibility {
    let counter = criterion_counter(profile, definition.criterion);
    let threshold = definition.threshold;

    BadgeEligibility {
        eligible: counter >= threshold,
        progress: (counter / threshold * 100.0).min(100.0),
        remaining: (threshold - counter).max(0.0),
    }
}

/// Resolve the counter a criterion measures from the typed profile record.
fn criterion_counter(profile: &UserProfile, criterion: BadgeCriterion) -> f64 {
    match criterion {
        BadgeCriterion::Swaps => profile.stats.successful_swaps as f64,
        // An average over a handful of reviews is noise; gate on volume.
        BadgeCriterion::Reviews => {
            if profile.stats.review_count >= RATING_BADGE_MIN_REVIEWS {
                profile.stats.rating.clamp(0.0, 5.0)
            } else {
                0.0
            }
        }
        BadgeCriterion::Profile => profile_completeness(profile),
        BadgeCriterion::Community => profile.stats.events_attended as f64,
        BadgeCriterion::Environmental => impact::impact_units(profile.stats.successful_swaps),
    }
}
