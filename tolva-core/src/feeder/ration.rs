//! Weight-to-ration curve.
//!
//! Daily kibble amounts per weight band, following common feeding-chart
//! figures for adult dogs. The per-meal portion divides the daily amount
//! across the two programmed meal slots; keeping the split as an explicit
//! policy constant makes the halving visible instead of buried in the
//! curve.

/// Meals the daily ration is split across.
pub const MEALS_PER_DAY: u32 = 2;

/// Weight assumed until the host configures one, in kilograms.
pub const DEFAULT_WEIGHT_KG: u32 = 10;

/// Daily ration in grams for a pet of the given weight.
///
/// Piecewise-linear bands: 25-90 g up to 5 kg, 90-150 g to 10 kg,
/// 150-300 g to 20 kg, then +10 g/kg to 50 kg and +12 g/kg beyond.
pub fn daily_ration_g(weight_kg: u32) -> u32 {
    if weight_kg <= 5 {
        25 + weight_kg.saturating_sub(1) * 65 / 4
    } else if weight_kg <= 10 {
        90 + (weight_kg - 5) * 12
    } else if weight_kg <= 20 {
        150 + (weight_kg - 10) * 15
    } else if weight_kg <= 30 {
        300 + (weight_kg - 20) * 10
    } else if weight_kg <= 40 {
        400 + (weight_kg - 30) * 10
    } else if weight_kg <= 50 {
        500 + (weight_kg - 40) * 10
    } else {
        600 + (weight_kg - 50) * 12
    }
}

/// Grams dispensed per meal slot.
pub fn portion_g(weight_kg: u32) -> u32 {
    daily_ration_g(weight_kg) / MEALS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_endpoints() {
        assert_eq!(daily_ration_g(1), 25);
        assert_eq!(daily_ration_g(5), 90);
        assert_eq!(daily_ration_g(10), 150);
        assert_eq!(daily_ration_g(20), 300);
        assert_eq!(daily_ration_g(30), 400);
        assert_eq!(daily_ration_g(40), 500);
        assert_eq!(daily_ration_g(50), 600);
    }

    #[test]
    fn test_above_top_band() {
        assert_eq!(daily_ration_g(60), 720);
    }

    #[test]
    fn test_zero_weight_does_not_underflow() {
        assert_eq!(daily_ration_g(0), 25);
    }

    #[test]
    fn test_portion_is_half_daily() {
        assert_eq!(portion_g(10), 75);
        assert_eq!(portion_g(20), 150);
    }

    #[test]
    fn test_default_weight_portion() {
        assert_eq!(portion_g(DEFAULT_WEIGHT_KG), 75);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // The curve is monotonically non-decreasing in weight.
            #[test]
            fn monotonic(w in 0u32..200) {
                prop_assert!(daily_ration_g(w + 1) >= daily_ration_g(w));
            }

            #[test]
            fn portion_never_exceeds_daily(w in 0u32..200) {
                prop_assert!(portion_g(w) <= daily_ration_g(w));
            }
        }
    }
}
