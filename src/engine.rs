//! Valuation engine entry point.

use thiserror::Error;

use crate::depreciation;
use crate::models::{ValuationResult, VehicleAssessment};
use crate::pricing;

/// Precondition violations the engine refuses to price through.
///
/// The upstream form layer is expected to reject these before they reach the
/// engine; when one slips through, failing fast beats returning a misleading
/// number. Retrying is pointless: the computation is pure and deterministic.
#[derive(Debug, Error, PartialEq)]
pub enum ValuationError {
    /// Expected price must be a positive, finite amount.
    #[error("expected price must be positive, got {0}")]
    NonPositivePrice(f64),
    /// Manufacture year lies in the future relative to the supplied current
    /// year, which would produce a negative age.
    #[error("manufacture year {manufacture_year} is after current year {current_year}")]
    FutureManufactureYear {
        manufacture_year: u16,
        current_year: u16,
    },
}

/// Computes a valuation for a fully-shaped assessment.
///
/// Pure and synchronous: no I/O, no clock reads, no shared state. The same
/// input always produces the same output, so it is safe to call from any
/// number of request handlers concurrently.
///
/// # Examples
///
/// ```
/// use carworth::engine::calculate_valuation;
/// use carworth::models::VehicleAssessment;
///
/// // Three-year-old car at 45,000 km, everything in best condition.
/// let assessment = VehicleAssessment::new(500_000.0, 2021, 2024).with_odometer(45_000);
/// let result = calculate_valuation(&assessment).unwrap();
///
/// // 3% odometer, 7.5% age, then the 5% good-car bonus.
/// assert_eq!(result.best_price, 471_000.0);
/// assert!(result.good_car_bonus_applied);
/// ```
///
/// # Errors
///
/// Returns [`ValuationError`] when a precondition is violated. Unknown
/// enumeration values are not errors; they contribute zero depreciation.
pub fn calculate_valuation(
    assessment: &VehicleAssessment,
) -> Result<ValuationResult, ValuationError> {
    if !assessment.expected_price.is_finite() || assessment.expected_price <= 0.0 {
        return Err(ValuationError::NonPositivePrice(assessment.expected_price));
    }
    let age_years = assessment
        .vehicle_age()
        .ok_or(ValuationError::FutureManufactureYear {
            manufacture_year: assessment.manufacture_year,
            current_year: assessment.current_year,
        })?;

    let breakdown = depreciation::assess(assessment, age_years);
    let outcome = pricing::reduce(assessment.expected_price, &breakdown);
    let band = pricing::confidence_band(outcome.best_price);

    Ok(ValuationResult {
        best_price: outcome.best_price,
        trail: outcome.trail,
        seller_protection_applied: outcome.seller_protection_applied,
        good_car_bonus_applied: outcome.good_car_bonus_applied,
        breakdown,
        band,
    })
}
