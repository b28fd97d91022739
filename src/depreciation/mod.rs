//! Depreciation percentage computation.
//!
//! Converts an assessment into capped per-category percentages. Two kinds of
//! rules live here: section scoring with category caps ([`category`]) and the
//! odometer/age step functions ([`steps`]).

mod category;
mod steps;

pub use category::{
    assess, documents_depreciation, electrical_depreciation, engine_depreciation,
    exterior_depreciation, fluids_score, interior_depreciation, safety_depreciation,
    tyres_depreciation, usage_depreciation, DOCUMENTS_CAP, ELECTRICAL_CAP, ENGINE_CAP,
    EXTERIOR_CAP, INTERIOR_CAP, SAFETY_CAP, TYRES_CAP, USAGE_CAP,
};
pub use steps::{age_depreciation, odometer_depreciation};
