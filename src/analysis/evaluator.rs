use crate::models::enums::Classification;

/// Classify a value against an inclusive `[min, max]` range.
///
/// High is tested before low, so an inverted range never reports normal.
/// NaN compares false on both sides and comes back as normal; callers that
/// care filter non-finite input first (see `TestResult::validate`).
pub fn classify(value: f64, min: f64, max: f64) -> Classification {
    if value > max {
        Classification::High
    } else if value < min {
        Classification::Low
    } else {
        Classification::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn above_max_is_high() {
        assert_eq!(classify(2.1, 0.6, 1.2), Classification::High);
    }

    #[test]
    fn below_min_is_low() {
        assert_eq!(classify(10.5, 12.0, 16.0), Classification::Low);
    }

    #[test]
    fn boundaries_are_normal() {
        assert_eq!(classify(12.0, 12.0, 16.0), Classification::Normal);
        assert_eq!(classify(16.0, 12.0, 16.0), Classification::Normal);
        assert_eq!(classify(110.0, 45.0, 115.0), Classification::Normal);
    }

    #[test]
    fn inverted_range_is_never_normal() {
        assert_eq!(classify(3.0, 5.0, 1.0), Classification::High);
        assert_eq!(classify(0.5, 5.0, 1.0), Classification::Low);
        assert_eq!(classify(6.0, 5.0, 1.0), Classification::High);
    }

    #[test]
    fn degenerate_range_only_accepts_its_point() {
        assert_eq!(classify(4.0, 4.0, 4.0), Classification::Normal);
        assert_eq!(classify(4.01, 4.0, 4.0), Classification::High);
    }

    proptest! {
        #[test]
        fn normal_iff_within_inclusive_range(
            value in -1.0e6f64..1.0e6,
            a in -1.0e6f64..1.0e6,
            b in -1.0e6f64..1.0e6,
        ) {
            let (min, max) = if a <= b { (a, b) } else { (b, a) };
            let within = min <= value && value <= max;
            prop_assert_eq!(classify(value, min, max).is_normal(), within);
        }

        #[test]
        fn direction_matches_side_of_range(
            value in -1.0e6f64..1.0e6,
            a in -1.0e6f64..1.0e6,
            b in -1.0e6f64..1.0e6,
        ) {
            let (min, max) = if a <= b { (a, b) } else { (b, a) };
            match classify(value, min, max) {
                Classification::High => prop_assert!(value > max),
                Classification::Low => prop_assert!(value < min),
                Classification::Normal => prop_assert!(min <= value && value <= max),
            }
        }
    }
}
