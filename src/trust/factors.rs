use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{profile_completeness, UserProfile};

/// Snapshot of everything the trust formula consumes, derived per evaluation
/// call and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrustScoreFactors {
    pub successful_swaps: u32,
    /// Average review rating on the 1..=5 scale; 0 when unreviewed.
    pub average_rating: f64,
    pub review_count: u32,
    pub helpful_votes: u32,
    pub account_age_days: u32,
    /// Share of inbound requests answered, in [0, 1].
    pub response_rate: f64,
    /// Share of accepted swaps completed, in [0, 1].
    pub consistency_score: f64,
    /// Community events attended.
    pub community_participation: u32,
    /// Profile checklist completion, in [0, 1].
    pub profile_completeness: f64,
    /// Verification signal, already in [0, 1].
    pub verification_score: f64,
}

/// Weight of each verification switch toward `verification_score`.
const VERIFICATION_STEP: f64 = 0.5;

impl TrustScoreFactors {
    /// Derive a factor snapshot from a profile record.
    ///
    /// `now` is caller-supplied so evaluation stays deterministic and
    /// clock-free; accounts "created in the future" floor to zero days.
    pub fn from_profile(profile: &UserProfile, now: DateTime<Utc>) -> Self {
        let account_age_days = (now - profile.created_at).num_days().max(0) as u32;

        let mut verification_score = 0.0;
        if profile.security.email_verified {
            verification_score += VERIFICATION_STEP;
        }
        if profile.security.phone_verified {
            verification_score += VERIFICATION_STEP;
        }

        Self {
            successful_swaps: profile.stats.successful_swaps,
            average_rating: profile.stats.rating,
            review_count: profile.stats.review_count,
            helpful_votes: profile.stats.helpful_votes,
            account_age_days,
            response_rate: profile.stats.response_rate,
            consistency_score: profile.stats.consistency_score,
            community_participation: profile.stats.events_attended,
            profile_completeness: profile_completeness(profile),
            verification_score,
        }
    }

    /// Clamp float factors into their documented ranges at the aggregator
    /// boundary. Degraded data scores low instead of failing.
    pub fn sanitized(self) -> Self {
        Self {
            average_rating: finite_or_zero(self.average_rating).clamp(0.0, 5.0),
            response_rate: finite_or_zero(self.response_rate).clamp(0.0, 1.0),
            consistency_score: finite_or_zero(self.consistency_score).clamp(0.0, 1.0),
            profile_completeness: finite_or_zero(self.profile_completeness).clamp(0.0, 1.0),
            verification_score: finite_or_zero(self.verification_score).clamp(0.0, 1.0),
            ..self
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SecurityStatus, UserId, UserStats};
    use chrono::TimeZone;
    use std::collections::BTreeSet;

    fn profile() -> UserProfile {
        UserProfile {
            id: UserId("member-a".to_string()),
            display_name: "Robin".to_string(),
            bio: String::new(),
            avatar_url: None,
            location: "Des Moines".to_string(),
            interests: BTreeSet::new(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            stats: UserStats {
                successful_swaps: 7,
                rating: 4.4,
                review_count: 12,
                helpful_votes: 3,
                events_attended: 2,
                response_rate: 0.9,
                consistency_score: 0.8,
            },
            security: SecurityStatus {
                email_verified: true,
                phone_verified: false,
            },
            trust_score: None,
        }
    }

    #[test]
    fn from_profile_derives_age_and_verification() {
        let now = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
        let factors = TrustScoreFactors::from_profile(&profile(), now);

        assert_eq!(factors.account_age_days, 90);
        assert_eq!(factors.verification_score, 0.5);
        assert_eq!(factors.successful_swaps, 7);
        assert_eq!(factors.community_participation, 2);
    }

    #[test]
    fn accounts_created_in_the_future_floor_to_zero_age() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let factors = TrustScoreFactors::from_profile(&profile(), now);
        assert_eq!(factors.account_age_days, 0);
    }

    #[test]
    fn sanitized_clamps_degenerate_floats() {
        let factors = TrustScoreFactors {
            average_rating: f64::NAN,
            response_rate: -0.4,
            consistency_score: 3.0,
            profile_completeness: f64::INFINITY,
            verification_score: 1.5,
            ..TrustScoreFactors::default()
        }
        .sanitized();

        assert_eq!(factors.average_rating, 0.0);
        assert_eq!(factors.response_rate, 0.0);
        assert_eq!(factors.consistency_score, 1.0);
        assert_eq!(factors.profile_completeness, 0.0);
        assert_eq!(factors.verification_score, 1.0);
    }
}
