//! Confidence band derivation.

use crate::models::ConfidenceBand;

use super::reducer::round_to_thousand;

/// Lower bound of the market-value range, relative to the best price.
pub const MARKET_MIN_RATIO: f64 = 0.96;
/// Upper bound of the market-value range.
pub const MARKET_MAX_RATIO: f64 = 1.02;
/// Suggested listing price, leaving room to negotiate down.
pub const IDEAL_LISTING_RATIO: f64 = 1.05;

/// Fixed advisory shown alongside every band. Static text, never derived
/// from input.
pub const ADVISORY: &str =
    "List near the ideal price and expect offers to settle around the final deal estimate.";

/// Derives the presentation band around a final price.
///
/// All values use the same nearest-1000 rounding as the main calculation;
/// `expected_final_deal` is the best price itself.
pub fn confidence_band(best_price: f64) -> ConfidenceBand {
    ConfidenceBand {
        market_value_min: round_to_thousand(best_price * MARKET_MIN_RATIO),
        market_value_max: round_to_thousand(best_price * MARKET_MAX_RATIO),
        ideal_listing_price: round_to_thousand(best_price * IDEAL_LISTING_RATIO),
        expected_final_deal: best_price,
        advisory: ADVISORY.to_string(),
    }
}
