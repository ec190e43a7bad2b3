//! Scaling helpers shared by the trust sub-scores.

/// `min(raw / ceiling, 1)`, treating a zero ceiling as fully saturated zero.
pub(crate) fn capped_ratio(raw: f64, ceiling: f64) -> f64 {
    if ceiling <= 0.0 {
        return 0.0;
    }
    (raw.max(0.0) / ceiling).min(1.0)
}

/// Scale a value on a fixed `0..=max` axis into [0, 1].
pub(crate) fn bounded_scale(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

/// Final clamp applied wherever a score leaves the module.
pub(crate) fn unit_clamp(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_ratio_saturates_at_one() {
        assert_eq!(capped_ratio(5.0, 20.0), 0.25);
        assert_eq!(capped_ratio(40.0, 20.0), 1.0);
        assert_eq!(capped_ratio(-3.0, 20.0), 0.0);
        assert_eq!(capped_ratio(3.0, 0.0), 0.0);
    }

    #[test]
    fn bounded_scale_clamps_both_ends() {
        assert_eq!(bounded_scale(2.5, 5.0), 0.5);
        assert_eq!(bounded_scale(7.0, 5.0), 1.0);
        assert_eq!(bounded_scale(-1.0, 5.0), 0.0);
    }

    #[test]
    fn unit_clamp_absorbs_nan() {
        assert_eq!(unit_clamp(f64::NAN), 0.0);
        assert_eq!(unit_clamp(1.7), 1.0);
        assert_eq!(unit_clamp(-0.2), 0.0);
    }
}
