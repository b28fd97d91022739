//! Price application: the sequential reduction pipeline and the derived
//! confidence band.

mod band;
mod reducer;

pub use band::{confidence_band, ADVISORY, IDEAL_LISTING_RATIO, MARKET_MAX_RATIO, MARKET_MIN_RATIO};
pub use reducer::{
    reduce, round_to_thousand, ReductionOutcome, BONUS_DOCUMENTS_LIMIT, BONUS_ENGINE_LIMIT,
    BONUS_MULTIPLIER, FLOOR_RATIO,
};
