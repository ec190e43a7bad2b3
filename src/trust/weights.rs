//! Fixed weights and ceilings for the trust formula.
//!
//! These are compile-time constants shared with the production formula; they
//! are deliberately not runtime-configurable so every surface renders the
//! same score for the same member.

/// Top-level blend. Must sum to 1.
pub const REVIEW_WEIGHT: f64 = 0.35;
pub const ACTIVITY_WEIGHT: f64 = 0.25;
pub const RELIABILITY_WEIGHT: f64 = 0.20;
pub const COMMUNITY_WEIGHT: f64 = 0.10;
pub const VERIFICATION_WEIGHT: f64 = 0.10;

/// Review sub-score: volume bonus `log10(count + 1) / 2` capped here.
pub const REVIEW_VOLUME_BONUS_CAP: f64 = 0.3;
/// Review sub-score: per helpful vote, capped at `HELPFULNESS_BONUS_CAP`.
pub const HELPFULNESS_PER_VOTE: f64 = 0.01;
pub const HELPFULNESS_BONUS_CAP: f64 = 0.2;

/// Swaps needed for a full activity score.
pub const ACTIVITY_SWAP_CEILING: f64 = 20.0;
/// Account age, in days, needed for a full activity score.
pub const ACTIVITY_ACCOUNT_AGE_CEILING_DAYS: f64 = 90.0;

/// Reliability blend of response rate and completion consistency.
pub const RESPONSE_RATE_WEIGHT: f64 = 0.6;
pub const CONSISTENCY_WEIGHT: f64 = 0.4;

/// Community events needed for full participation credit.
pub const PARTICIPATION_CEILING: f64 = 10.0;
/// Community blend of participation and profile completeness.
pub const PARTICIPATION_WEIGHT: f64 = 0.6;
pub const COMPLETENESS_WEIGHT: f64 = 0.4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_weights_sum_to_one() {
        let sum = REVIEW_WEIGHT
            + ACTIVITY_WEIGHT
            + RELIABILITY_WEIGHT
            + COMMUNITY_WEIGHT
            + VERIFICATION_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn blend_weights_sum_to_one() {
        assert!((RESPONSE_RATE_WEIGHT + CONSISTENCY_WEIGHT - 1.0).abs() < 1e-12);
        assert!((PARTICIPATION_WEIGHT + COMPLETENESS_WEIGHT - 1.0).abs() < 1e-12);
    }
}
