use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for marketplace members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier wrapper for listed items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);

/// Member profile as owned by the surrounding application state.
///
/// The engine only reads these records; registration, swap completion, and
/// review submission mutate them elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub display_name: String,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub location: String,
    pub interests: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub stats: UserStats,
    pub security: SecurityStatus,
    /// Cached result of a previous trust evaluation, if any.
    pub trust_score: Option<f64>,
}

/// Activity counters accumulated by swap, review, and event actions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UserStats {
    pub successful_swaps: u32,
    /// Average review rating on the 1..=5 scale; 0 when unreviewed.
    pub rating: f64,
    pub review_count: u32,
    pub helpful_votes: u32,
    pub events_attended: u32,
    /// Share of inbound swap requests answered, in [0, 1].
    pub response_rate: f64,
    /// Share of accepted swaps carried through to completion, in [0, 1].
    pub consistency_score: f64,
}

/// Verification switches surfaced on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SecurityStatus {
    pub email_verified: bool,
    pub phone_verified: bool,
}

/// Immutable review record, written once per completed swap per direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub from_user: UserId,
    pub to_user: UserId,
    /// Rating on the 1..=5 scale.
    pub overall_rating: f64,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Aggregates derived from a review set, clamped at the boundary so one
/// malformed record cannot skew a profile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewAggregates {
    pub average_rating: f64,
    pub review_count: u32,
    /// Share of reviews tied to a verified swap, in [0, 1].
    pub verified_share: f64,
}

impl ReviewAggregates {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self::default();
        }

        let count = reviews.len() as u32;
        let total: f64 = reviews
            .iter()
            .map(|review| review.overall_rating.clamp(1.0, 5.0))
            .sum();
        let verified = reviews.iter().filter(|review| review.is_verified).count();

        Self {
            average_rating: total / count as f64,
            review_count: count,
            verified_share: verified as f64 / count as f64,
        }
    }
}

/// Marketplace listing with lifecycle metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub owner: UserId,
    pub category: String,
    pub status: crate::lifecycle::ItemStatus,
    pub created_at: DateTime<Utc>,
    pub swap_completed_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Profile fields that count toward completeness.
const COMPLETENESS_CHECKS: usize = 6;

/// Fraction of the profile checklist a member has filled in, in [0, 1].
///
/// An explicit typed checklist rather than field-path probing: display name,
/// bio, avatar, location, at least one interest, and a verified email each
/// contribute one sixth.
pub fn profile_completeness(profile: &UserProfile) -> f64 {
    let mut filled = 0usize;

    if !profile.display_name.trim().is_empty() {
        filled += 1;
    }
    if !profile.bio.trim().is_empty() {
        filled += 1;
    }
    if profile
        .avatar_url
        .as_deref()
        .is_some_and(|url| !url.trim().is_empty())
    {
        filled += 1;
    }
    if !profile.location.trim().is_empty() {
        filled += 1;
    }
    if !profile.interests.is_empty() {
        filled += 1;
    }
    if profile.security.email_verified {
        filled += 1;
    }

    filled as f64 / COMPLETENESS_CHECKS as f64
}
