use serde::{Deserialize, Serialize};

/// Discrete reputation tiers shown next to a member's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    New,
    Growing,
    Trusted,
    Verified,
    Expert,
}

impl TrustLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::New,
            Self::Growing,
            Self::Trusted,
            Self::Verified,
            Self::Expert,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Growing => "Growing",
            Self::Trusted => "Trusted",
            Self::Verified => "Verified",
            Self::Expert => "Expert",
        }
    }
}

/// Ordered threshold ladder; bucket `i` spans `THRESHOLDS[i]..THRESHOLDS[i+1]`.
const THRESHOLDS: [f64; 6] = [0.0, 0.25, 0.5, 0.75, 0.9, 1.0];

/// Classification result with the numbers the UI renders as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelAssessment {
    pub level: TrustLevel,
    /// Score, as a percent, at which the next level starts; 100 at the top.
    pub next_threshold: f64,
    /// Percent of the way through the current bucket, in [0, 100].
    pub progress: f64,
}

/// Map a trust score onto the level ladder. Scores outside [0, 1] clamp
/// first, so classification is total and monotonic.
pub fn classify(score: f64) -> LevelAssessment {
    let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };

    let levels = TrustLevel::ordered();
    let mut bucket = 0usize;
    for (index, floor) in THRESHOLDS[..levels.len()].iter().enumerate() {
        if score >= *floor {
            bucket = index;
        }
    }

    let floor = THRESHOLDS[bucket];
    let ceiling = THRESHOLDS[bucket + 1];
    let progress = if score >= 1.0 {
        100.0
    } else {
        ((score - floor) / (ceiling - floor) * 100.0).clamp(0.0, 100.0)
    };

    LevelAssessment {
        level: levels[bucket],
        next_threshold: ceiling * 100.0,
        progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_map_to_documented_levels() {
        assert_eq!(classify(0.1).level, TrustLevel::New);
        assert_eq!(classify(0.25).level, TrustLevel::Growing);
        assert_eq!(classify(0.6).level, TrustLevel::Trusted);
        assert_eq!(classify(0.75).level, TrustLevel::Verified);
        assert_eq!(classify(0.95).level, TrustLevel::Expert);
    }

    #[test]
    fn progress_measures_position_inside_the_bucket() {
        let assessment = classify(0.125);
        assert_eq!(assessment.level, TrustLevel::New);
        assert_eq!(assessment.next_threshold, 25.0);
        assert!((assessment.progress - 50.0).abs() < 1e-9);
    }

    #[test]
    fn a_perfect_score_reports_full_progress() {
        let assessment = classify(1.0);
        assert_eq!(assessment.level, TrustLevel::Expert);
        assert_eq!(assessment.next_threshold, 100.0);
        assert_eq!(assessment.progress, 100.0);
    }

    #[test]
    fn out_of_range_scores_clamp_instead_of_panicking() {
        assert_eq!(classify(-0.3).level, TrustLevel::New);
        assert_eq!(classify(4.0).level, TrustLevel::Expert);
        assert_eq!(classify(f64::NAN).level, TrustLevel::New);
    }

    #[test]
    fn levels_never_regress_as_the_score_rises() {
        let mut previous = classify(0.0).level;
        for step in 0..=1000 {
            let level = classify(step as f64 / 1000.0).level;
            assert!(level >= previous, "level regressed at step {step}");
            previous = level;
        }
    }
}
