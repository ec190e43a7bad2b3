//! Composite trust score for marketplace members.
//!
//! Raw counters are normalized into [0, 1] factors, blended with fixed
//! weights, and classified onto a level ladder. Everything here is a pure
//! function over a caller-supplied snapshot; nothing reads a clock or a
//! store.

mod factors;
mod level;
mod normalize;
mod score;
pub mod weights;

pub use factors::TrustScoreFactors;
pub use level::{classify, LevelAssessment, TrustLevel};
pub use score::FactorScores;

use serde::{Deserialize, Serialize};

/// Stateless evaluator producing trust scores and display-ready breakdowns.
///
/// Constructed explicitly and handed to callers; there is no process-wide
/// instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustEngine;

impl TrustEngine {
    pub fn new() -> Self {
        Self
    }

    /// Composite trust score in [0, 1].
    pub fn score(&self, factors: &TrustScoreFactors) -> f64 {
        let sanitized = factors.sanitized();
        score::weighted_total(&score::factor_scores(&sanitized))
    }

    /// Full evaluation: sub-scores, total, level, and progress numbers.
    pub fn breakdown(&self, factors: &TrustScoreFactors) -> TrustScoreBreakdown {
        let sanitized = factors.sanitized();
        let factor_scores = score::factor_scores(&sanitized);
        let total_score = score::weighted_total(&factor_scores);
        let assessment = level::classify(total_score);

        tracing::debug!(
            total_score,
            level = assessment.level.label(),
            "trust score computed"
        );

        TrustScoreBreakdown {
            total_score,
            factors: factor_scores,
            level: assessment.level,
            next_level_threshold: assessment.next_threshold,
            progress_to_next: assessment.progress,
        }
    }
}

/// Display-ready evaluation result consumed by profile surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustScoreBreakdown {
    pub total_score: f64,
    pub factors: FactorScores,
    pub level: TrustLevel,
    /// Percent score at which the next level starts.
    pub next_level_threshold: f64,
    /// Percent progress toward that threshold.
    pub progress_to_next: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_factors_score_zero() {
        let engine = TrustEngine::new();
        assert_eq!(engine.score(&TrustScoreFactors::default()), 0.0);
    }

    #[test]
    fn score_stays_in_unit_range_for_extreme_input() {
        let engine = TrustEngine::new();
        let extreme = TrustScoreFactors {
            successful_swaps: u32::MAX,
            average_rating: 5.0,
            review_count: u32::MAX,
            helpful_votes: u32::MAX,
            account_age_days: u32::MAX,
            response_rate: 1.0,
            consistency_score: 1.0,
            community_participation: u32::MAX,
            profile_completeness: 1.0,
            verification_score: 1.0,
        };
        let score = engine.score(&extreme);
        assert!((0.0..=1.0).contains(&score));
        assert_eq!(score, 1.0);
    }

    #[test]
    fn breakdown_exposes_unit_range_sub_scores() {
        let engine = TrustEngine::new();
        let factors = TrustScoreFactors {
            successful_swaps: 12,
            average_rating: 4.2,
            review_count: 18,
            helpful_votes: 6,
            account_age_days: 200,
            response_rate: 0.85,
            consistency_score: 0.7,
            community_participation: 4,
            profile_completeness: 0.8,
            verification_score: 0.5,
        };

        let breakdown = engine.breakdown(&factors);
        for sub in [
            breakdown.factors.review,
            breakdown.factors.activity,
            breakdown.factors.reliability,
            breakdown.factors.community,
            breakdown.factors.verification,
        ] {
            assert!((0.0..=1.0).contains(&sub));
        }
        assert!((0.0..=1.0).contains(&breakdown.total_score));
        assert_eq!(breakdown.level, classify(breakdown.total_score).level);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let engine = TrustEngine::new();
        let factors = TrustScoreFactors {
            successful_swaps: 5,
            average_rating: 3.9,
            review_count: 7,
            helpful_votes: 2,
            account_age_days: 60,
            response_rate: 0.6,
            consistency_score: 0.55,
            community_participation: 1,
            profile_completeness: 0.5,
            verification_score: 0.5,
        };
        assert_eq!(engine.breakdown(&factors), engine.breakdown(&factors));
    }

    #[test]
    fn score_is_monotonic_in_each_positive_factor() {
        let engine = TrustEngine::new();
        let base = TrustScoreFactors {
            successful_swaps: 4,
            average_rating: 3.5,
            review_count: 6,
            helpful_votes: 2,
            account_age_days: 45,
            response_rate: 0.5,
            consistency_score: 0.5,
            community_participation: 3,
            profile_completeness: 0.5,
            verification_score: 0.5,
        };
        let baseline = engine.score(&base);

        let bumps = [
            TrustScoreFactors { successful_swaps: 8, ..base },
            TrustScoreFactors { average_rating: 4.5, ..base },
            TrustScoreFactors { review_count: 12, ..base },
            TrustScoreFactors { helpful_votes: 6, ..base },
            TrustScoreFactors { account_age_days: 90, ..base },
            TrustScoreFactors { response_rate: 0.9, ..base },
            TrustScoreFactors { consistency_score: 0.9, ..base },
            TrustScoreFactors { community_participation: 6, ..base },
            TrustScoreFactors { profile_completeness: 0.9, ..base },
            TrustScoreFactors { verification_score: 1.0, ..base },
        ];
        for bumped in bumps {
            assert!(
                engine.score(&bumped) >= baseline,
                "score decreased for {bumped:?}"
            );
        }
    }
}
