//! Sub-score rules behind the composite trust score.
//!
//! The formulas here are load-bearing: other surfaces reproduce the same
//! numbers, so the shapes (log volume bonus, fixed ceilings, blend weights)
//! must not drift.

use super::factors::TrustScoreFactors;
use super::normalize::{bounded_scale, capped_ratio, unit_clamp};
use super::weights;

/// Per-factor sub-scores, each in [0, 1], surfaced in the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct FactorScores {
    pub review: f64,
    pub activity: f64,
    pub reliability: f64,
    pub community: f64,
    pub verification: f64,
}

pub(crate) fn factor_scores(factors: &TrustScoreFactors) -> FactorScores {
    FactorScores {
        review: review_score(factors),
        activity: activity_score(factors),
        reliability: reliability_score(factors),
        community: community_score(factors),
        verification: unit_clamp(factors.verification_score),
    }
}

/// Rating anchored at 1 star, plus capped bonuses for review volume and
/// helpful votes. Unreviewed members score zero rather than inheriting a
/// meaningless average.
fn review_score(factors: &TrustScoreFactors) -> f64 {
    if factors.review_count == 0 {
        return 0.0;
    }

    let rating_score = ((factors.average_rating - 1.0) / 4.0).max(0.0);
    let volume_bonus = ((factors.review_count as f64 + 1.0).log10() / 2.0)
        .min(weights::REVIEW_VOLUME_BONUS_CAP);
    let helpfulness_bonus = (factors.helpful_votes as f64 * weights::HELPFULNESS_PER_VOTE)
        .min(weights::HELPFULNESS_BONUS_CAP);

    unit_clamp(rating_score + volume_bonus + helpfulness_bonus)
}

/// Swap volume damped by account age, so a week-old account cannot buy its
/// way to a full activity score. Zero swaps zero the whole term.
fn activity_score(factors: &TrustScoreFactors) -> f64 {
    let swap_score = capped_ratio(
        factors.successful_swaps as f64,
        weights::ACTIVITY_SWAP_CEILING,
    );
    let age_score = capped_ratio(
        factors.account_age_days as f64,
        weights::ACTIVITY_ACCOUNT_AGE_CEILING_DAYS,
    );
    swap_score * age_score
}

fn reliability_score(factors: &TrustScoreFactors) -> f64 {
    unit_clamp(
        factors.response_rate * weights::RESPONSE_RATE_WEIGHT
            + factors.consistency_score * weights::CONSISTENCY_WEIGHT,
    )
}

fn community_score(factors: &TrustScoreFactors) -> f64 {
    let participation = capped_ratio(
        factors.community_participation as f64,
        weights::PARTICIPATION_CEILING,
    );
    unit_clamp(
        participation * weights::PARTICIPATION_WEIGHT
            + bounded_scale(factors.profile_completeness, 1.0) * weights::COMPLETENESS_WEIGHT,
    )
}

pub(crate) fn weighted_total(scores: &FactorScores) -> f64 {
    unit_clamp(
        scores.review * weights::REVIEW_WEIGHT
            + scores.activity * weights::ACTIVITY_WEIGHT
            + scores.reliability * weights::RELIABILITY_WEIGHT
            + scores.community * weights::COMMUNITY_WEIGHT
            + scores.verification * weights::VERIFICATION_WEIGHT,
    )
}
