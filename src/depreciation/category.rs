//! Per-category depreciation with caps.
//!
//! Each weighted section's raw attribute sum is clamped to a fixed category
//! cap so no single section can dominate the price, no matter how many
//! attributes are in poor condition.

use crate::models::{
    DentCount, DepreciationBreakdown, DocumentCondition, ElectricalCondition, ExteriorCondition,
    FluidsCondition, InteriorCondition, MechanicalCondition, RustExtent, SafetyCondition,
    ScratchCount, TyreCondition, UsageProfile, VehicleAssessment,
};

use super::steps::{age_depreciation, odometer_depreciation};

/// Flat usage deduction when flood damage or accident history is declared.
pub const USAGE_CAP: f64 = 15.0;
/// Engine/mechanical category cap.
pub const ENGINE_CAP: f64 = 25.0;
/// Exterior category cap (section block plus root counters).
pub const EXTERIOR_CAP: f64 = 15.0;
/// Interior category cap.
pub const INTERIOR_CAP: f64 = 10.0;
/// Electrical category cap.
pub const ELECTRICAL_CAP: f64 = 8.0;
/// Tyre category cap.
pub const TYRES_CAP: f64 = 6.0;
/// Safety category cap.
pub const SAFETY_CAP: f64 = 5.0;
/// Documents category cap.
pub const DOCUMENTS_CAP: f64 = 20.0;

/// Usage depreciation: a flat deduction if EITHER flood damage OR accident
/// history is declared, else zero. Never the sum of the two.
pub fn usage_depreciation(usage: &UsageProfile) -> f64 {
    if usage.flood_damage.is_flagged() || usage.accident_history.is_flagged() {
        USAGE_CAP
    } else {
        0.0
    }
}

/// Engine/mechanical depreciation, capped at [`ENGINE_CAP`].
pub fn engine_depreciation(section: &MechanicalCondition) -> f64 {
    section.raw_score().min(ENGINE_CAP)
}

/// Fluids score. Collected for the report; not weighted into the price.
pub fn fluids_score(section: &FluidsCondition) -> f64 {
    section.raw_score()
}

/// Exterior depreciation, capped at [`EXTERIOR_CAP`].
///
/// Merges the dedicated section block with the root-level scratch, dent, and
/// rust counters before applying the cap; the counters are logically part of
/// exterior condition even though the intake form captures them separately.
pub fn exterior_depreciation(
    section: &ExteriorCondition,
    scratches: ScratchCount,
    dents: DentCount,
    rust: RustExtent,
) -> f64 {
    let combined =
        section.raw_score() + scratches.deduction() + dents.deduction() + rust.deduction();
    combined.min(EXTERIOR_CAP)
}

/// Interior depreciation, capped at [`INTERIOR_CAP`].
pub fn interior_depreciation(section: &InteriorCondition) -> f64 {
    section.raw_score().min(INTERIOR_CAP)
}

/// Electrical depreciation, capped at [`ELECTRICAL_CAP`].
pub fn electrical_depreciation(section: &ElectricalCondition) -> f64 {
    section.raw_score().min(ELECTRICAL_CAP)
}

/// Tyre depreciation, capped at [`TYRES_CAP`].
pub fn tyres_depreciation(section: &TyreCondition) -> f64 {
    section.raw_score().min(TYRES_CAP)
}

/// Safety depreciation, capped at [`SAFETY_CAP`].
pub fn safety_depreciation(section: &SafetyCondition) -> f64 {
    section.raw_score().min(SAFETY_CAP)
}

/// Documents depreciation, capped at [`DOCUMENTS_CAP`].
pub fn documents_depreciation(section: &DocumentCondition) -> f64 {
    section.raw_score().min(DOCUMENTS_CAP)
}

/// Computes the full capped breakdown for an assessment.
///
/// `age_years` is supplied by the caller (the engine derives it from the
/// manufacture and current years after validating the pair).
pub fn assess(assessment: &VehicleAssessment, age_years: u16) -> DepreciationBreakdown {
    DepreciationBreakdown {
        odometer: odometer_depreciation(assessment.usage.odometer_km),
        usage: usage_depreciation(&assessment.usage),
        engine: engine_depreciation(&assessment.mechanical),
        fluids: fluids_score(&assessment.fluids),
        exterior: exterior_depreciation(
            &assessment.exterior,
            assessment.scratches,
            assessment.dents,
            assessment.rust,
        ),
        interior: interior_depreciation(&assessment.interior),
        electrical: electrical_depreciation(&assessment.electrical),
        tyres: tyres_depreciation(&assessment.tyres),
        safety: safety_depreciation(&assessment.safety),
        documents: documents_depreciation(&assessment.documents),
        age: age_depreciation(age_years),
    }
}
