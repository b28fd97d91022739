//! Out-of-vocabulary input degrades to zero deduction instead of failing.
//!
//! DELIBERATE LENIENCE: any attribute string outside its enumeration
//! deserializes to the `Unrecognized` variant and contributes no
//! depreciation. The pricing pipeline never crashes on a partial or evolved
//! input schema, but a malformed submission silently under-depreciates
//! rather than erroring. These tests pin that behavior down so anyone
//! deciding to harden the boundary sees exactly what changes.

use carworth::engine::calculate_valuation;
use carworth::models::{
    DamageFlag, EngineHealth, MechanicalCondition, ScratchCount, VehicleAssessment,
};

fn parse(json: &str) -> VehicleAssessment {
    serde_json::from_str(json).expect("assessment should deserialize")
}

#[test]
fn unknown_engine_value_scores_zero() {
    let assessment = parse(
        r#"{
            "manufactureYear": 2021,
            "expectedPrice": 500000.0,
            "currentYear": 2024,
            "mechanical": { "engine": "unknown_value" }
        }"#,
    );
    assert_eq!(assessment.mechanical.engine, EngineHealth::Unrecognized);

    let result = calculate_valuation(&assessment).unwrap();
    assert_eq!(result.breakdown.engine, 0.0);
}

#[test]
fn unknown_value_prices_like_best_case() {
    let garbled = parse(
        r#"{
            "manufactureYear": 2021,
            "expectedPrice": 500000.0,
            "currentYear": 2024,
            "usage": { "odometerKm": 45000 },
            "mechanical": { "engine": "unknown_value", "clutch": "telepathic" },
            "scratches": "heaps"
        }"#,
    );
    assert_eq!(garbled.scratches, ScratchCount::Unrecognized);

    let clean = VehicleAssessment::new(500_000.0, 2021, 2024).with_odometer(45_000);
    let garbled_result = calculate_valuation(&garbled).unwrap();
    let clean_result = calculate_valuation(&clean).unwrap();
    assert_eq!(garbled_result.best_price, clean_result.best_price);
}

#[test]
fn recognized_bad_value_still_scores() {
    // Control: a value inside the vocabulary does deduct.
    let assessment = parse(
        r#"{
            "manufactureYear": 2021,
            "expectedPrice": 500000.0,
            "currentYear": 2024,
            "mechanical": { "engine": "noise" }
        }"#,
    );
    assert_eq!(assessment.mechanical.engine, EngineHealth::Noise);
    let result = calculate_valuation(&assessment).unwrap();
    assert_eq!(result.breakdown.engine, 5.0);
}

#[test]
fn explicit_other_is_not_unrecognized() {
    // "other" is a member of the engine vocabulary with its own deduction;
    // only strings outside the vocabulary fall through to zero.
    let section: MechanicalCondition =
        serde_json::from_str(r#"{ "engine": "other" }"#).unwrap();
    assert_eq!(section.engine, EngineHealth::Other);
    assert_eq!(section.raw_score(), 8.0);
}

#[test]
fn unknown_damage_flag_reads_as_no_damage() {
    let assessment = parse(
        r#"{
            "manufactureYear": 2021,
            "expectedPrice": 500000.0,
            "currentYear": 2024,
            "usage": { "floodDamage": "maybe" }
        }"#,
    );
    assert_eq!(assessment.usage.flood_damage, DamageFlag::Unrecognized);
    let result = calculate_valuation(&assessment).unwrap();
    assert_eq!(result.breakdown.usage, 0.0);
}

#[test]
fn missing_sections_default_to_best_case() {
    let assessment = parse(
        r#"{
            "manufactureYear": 2021,
            "expectedPrice": 500000.0,
            "currentYear": 2024
        }"#,
    );
    let result = calculate_valuation(&assessment).unwrap();
    assert_eq!(result.breakdown.engine, 0.0);
    assert_eq!(result.breakdown.documents, 0.0);
    assert!(result.good_car_bonus_applied);
}
