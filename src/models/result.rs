//! Valuation result types: breakdown, trail, confidence band.

use serde::Serialize;

/// Label for one stage of the price reduction pipeline.
///
/// The order of the stages is a numeric contract: the reduction is a
/// sequential multiplicative fold and is not commutative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Odometer,
    Usage,
    Engine,
    Exterior,
    Interior,
    Electrical,
    Tyres,
    Safety,
    Documents,
    Age,
}

/// Capped depreciation percentage per category.
///
/// `fluids` is computed for the report but never applied to the price; it is
/// absent from [`stages`](Self::stages).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationBreakdown {
    pub odometer: f64,
    pub usage: f64,
    pub engine: f64,
    pub fluids: f64,
    pub exterior: f64,
    pub interior: f64,
    pub electrical: f64,
    pub tyres: f64,
    pub safety: f64,
    pub documents: f64,
    pub age: f64,
}

impl DepreciationBreakdown {
    /// The reduction pipeline in its fixed application order.
    pub fn stages(&self) -> [(Stage, f64); 10] {
        [
            (Stage::Odometer, self.odometer),
            (Stage::Usage, self.usage),
            (Stage::Engine, self.engine),
            (Stage::Exterior, self.exterior),
            (Stage::Interior, self.interior),
            (Stage::Electrical, self.electrical),
            (Stage::Tyres, self.tyres),
            (Stage::Safety, self.safety),
            (Stage::Documents, self.documents),
            (Stage::Age, self.age),
        ]
    }
}

/// Unrounded intermediate prices after each group of reduction stages.
///
/// Only `bestPrice` is rounded; these checkpoints keep full precision so the
/// arithmetic stays auditable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTrail {
    /// Seller-stated expected price (pipeline input).
    pub expected_price: f64,
    /// Price after the odometer stage.
    pub after_odometer: f64,
    /// Price after all condition-section stages (usage through documents).
    pub after_condition: f64,
    /// Price after the age stage.
    pub after_age: f64,
    /// Price after floor protection and bonus, before the final rounding.
    pub pre_rounding: f64,
}

/// Derived market-value range around the final price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBand {
    pub market_value_min: f64,
    pub market_value_max: f64,
    pub ideal_listing_price: f64,
    pub expected_final_deal: f64,
    /// Fixed advisory text; not derived from input.
    pub advisory: String,
}

/// Complete output of one valuation.
///
/// Created fresh per request; the engine keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    /// Final recommended price, rounded to the nearest multiple of 1000.
    pub best_price: f64,
    pub trail: PriceTrail,
    pub seller_protection_applied: bool,
    pub good_car_bonus_applied: bool,
    pub breakdown: DepreciationBreakdown,
    pub band: ConfidenceBand,
}
