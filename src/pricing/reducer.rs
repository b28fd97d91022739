//! Sequential price reduction pipeline.
//!
//! Applies the per-category percentages to the expected price in a fixed
//! order, then floor protection, then the good-car bonus, then the final
//! rounding. The order is a contract: the fold is multiplicative and the
//! stages do not commute with the floor and bonus steps.

use crate::models::{DepreciationBreakdown, PriceTrail, Stage};

/// The final price never drops below this fraction of the expected price.
pub const FLOOR_RATIO: f64 = 0.40;
/// Bonus multiplier for a well-kept car.
pub const BONUS_MULTIPLIER: f64 = 1.05;
/// Capped engine depreciation at or below this grants the bonus.
pub const BONUS_ENGINE_LIMIT: f64 = 10.0;
/// Capped documents depreciation at or below this grants the bonus.
pub const BONUS_DOCUMENTS_LIMIT: f64 = 5.0;

/// Outcome of the reduction pipeline, before band derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReductionOutcome {
    pub best_price: f64,
    pub trail: PriceTrail,
    pub seller_protection_applied: bool,
    pub good_car_bonus_applied: bool,
}

/// Rounds a price to the nearest multiple of 1000.
pub fn round_to_thousand(value: f64) -> f64 {
    (value / 1000.0).round() * 1000.0
}

/// Runs the full reduction pipeline over an expected price.
///
/// Stage order comes from [`DepreciationBreakdown::stages`]. Intermediate
/// checkpoints are recorded unrounded; only the final price is rounded.
///
/// The bonus predicate reads the capped engine/documents percentages, and
/// the multiplier applies to whichever value survived floor protection.
pub fn reduce(expected_price: f64, breakdown: &DepreciationBreakdown) -> ReductionOutcome {
    let mut price = expected_price;
    let mut after_odometer = expected_price;
    let mut after_condition = expected_price;
    let mut after_age = expected_price;

    for (stage, percent) in breakdown.stages() {
        price *= 1.0 - percent / 100.0;
        match stage {
            Stage::Odometer => after_odometer = price,
            Stage::Documents => after_condition = price,
            Stage::Age => after_age = price,
            _ => {}
        }
    }

    let floor = expected_price * FLOOR_RATIO;
    let seller_protection_applied = price < floor;
    if seller_protection_applied {
        price = floor;
    }

    let good_car_bonus_applied =
        breakdown.engine <= BONUS_ENGINE_LIMIT && breakdown.documents <= BONUS_DOCUMENTS_LIMIT;
    if good_car_bonus_applied {
        price *= BONUS_MULTIPLIER;
    }

    ReductionOutcome {
        best_price: round_to_thousand(price),
        trail: PriceTrail {
            expected_price,
            after_odometer,
            after_condition,
            after_age,
            pre_rounding: price,
        },
        seller_protection_applied,
        good_car_bonus_applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown_with(engine: f64, documents: f64) -> DepreciationBreakdown {
        DepreciationBreakdown {
            engine,
            documents,
            ..Default::default()
        }
    }

    #[test]
    fn test_round_to_thousand() {
        assert_eq!(round_to_thousand(448_625.0), 449_000.0);
        assert_eq!(round_to_thousand(448_499.0), 448_000.0);
        assert_eq!(round_to_thousand(500.0), 1000.0);
        assert_eq!(round_to_thousand(0.0), 0.0);
    }

    #[test]
    fn test_zero_breakdown_keeps_price() {
        // All-zero percentages still trigger the bonus (0 <= 10, 0 <= 5).
        let outcome = reduce(500_000.0, &DepreciationBreakdown::default());
        assert!(outcome.good_car_bonus_applied);
        assert!(!outcome.seller_protection_applied);
        assert_eq!(outcome.trail.after_age, 500_000.0);
        assert_eq!(outcome.best_price, 525_000.0);
    }

    #[test]
    fn test_sequential_not_additive() {
        let breakdown = DepreciationBreakdown {
            odometer: 10.0,
            usage: 10.0,
            ..Default::default()
        };
        let outcome = reduce(100_000.0, &breakdown);
        // 100000 * 0.9 * 0.9 = 81000, not 80000.
        assert!((outcome.trail.after_age - 81_000.0).abs() < 1e-10);
    }

    #[test]
    fn test_trail_checkpoints() {
        let breakdown = DepreciationBreakdown {
            odometer: 3.0,
            engine: 20.0,
            age: 7.5,
            ..Default::default()
        };
        let outcome = reduce(500_000.0, &breakdown);
        assert!((outcome.trail.after_odometer - 485_000.0).abs() < 1e-10);
        assert!((outcome.trail.after_condition - 388_000.0).abs() < 1e-10);
        assert!((outcome.trail.after_age - 358_900.0).abs() < 1e-10);
    }

    #[test]
    fn test_floor_protection() {
        let breakdown = DepreciationBreakdown {
            odometer: 9.0,
            usage: 15.0,
            engine: 25.0,
            exterior: 15.0,
            interior: 10.0,
            electrical: 8.0,
            tyres: 6.0,
            safety: 5.0,
            documents: 20.0,
            age: 55.0,
            ..Default::default()
        };
        let outcome = reduce(200_000.0, &breakdown);
        assert!(outcome.seller_protection_applied);
        assert!(!outcome.good_car_bonus_applied);
        assert_eq!(outcome.best_price, 80_000.0);
        assert!((outcome.trail.pre_rounding - 80_000.0).abs() < 1e-10);
    }

    #[test]
    fn test_bonus_boundary_inclusive() {
        assert!(reduce(100_000.0, &breakdown_with(10.0, 5.0)).good_car_bonus_applied);
        assert!(!reduce(100_000.0, &breakdown_with(10.1, 5.0)).good_car_bonus_applied);
        assert!(!reduce(100_000.0, &breakdown_with(10.0, 5.1)).good_car_bonus_applied);
    }

    #[test]
    fn test_bonus_applies_on_top_of_floor() {
        // Heavy depreciation but clean engine and documents: the floor fires
        // first, then the bonus multiplies the floored value.
        let breakdown = DepreciationBreakdown {
            odometer: 9.0,
            usage: 15.0,
            exterior: 15.0,
            interior: 10.0,
            electrical: 8.0,
            tyres: 6.0,
            safety: 5.0,
            age: 55.0,
            ..Default::default()
        };
        let outcome = reduce(100_000.0, &breakdown);
        // Product of factors ≈ 0.219 < 0.40 floor.
        assert!(outcome.seller_protection_applied);
        assert!(outcome.good_car_bonus_applied);
        assert_eq!(outcome.best_price, 42_000.0); // 40000 * 1.05
    }

    #[test]
    fn test_best_price_always_rounded() {
        let outcome = reduce(123_456.0, &breakdown_with(12.0, 7.0));
        assert_eq!(outcome.best_price % 1000.0, 0.0);
    }
}
