//! Property suites for the valuation pipeline.

use carworth::engine::calculate_valuation;
use carworth::models::{
    DamageFlag, DentCount, DocumentCondition, ElectricalCondition, EngineHealth,
    ExteriorCondition, InsuranceCover, InteriorCondition, MechanicalCondition, OilLeakage,
    RustExtent, SafetyCondition, ScratchCount, SeatBeltState, TyreCondition, UpholsteryCondition,
    UsageProfile, VehicleAssessment,
};
use carworth::pricing::round_to_thousand;
use proptest::prelude::*;

const CURRENT_YEAR: u16 = 2024;

/// Builds an assessment from a condition preset: 0 = showroom, 1 = wreck,
/// 2 = average.
fn preset_assessment(
    preset: u8,
    price: f64,
    km: u32,
    manufacture_year: u16,
    flood: bool,
    accident: bool,
) -> VehicleAssessment {
    let usage = UsageProfile {
        odometer_km: km,
        flood_damage: if flood { DamageFlag::Yes } else { DamageFlag::No },
        accident_history: if accident { DamageFlag::Yes } else { DamageFlag::No },
        ..Default::default()
    };
    let base = VehicleAssessment::new(price, manufacture_year, CURRENT_YEAR).with_usage(usage);
    match preset {
        1 => base
            .with_body_counters(ScratchCount::Many, DentCount::Many, RustExtent::Deep)
            .with_mechanical(MechanicalCondition::worst())
            .with_exterior(ExteriorCondition::worst())
            .with_interior(InteriorCondition::worst())
            .with_electrical(ElectricalCondition::worst())
            .with_tyres(TyreCondition::worst())
            .with_safety(SafetyCondition::worst())
            .with_documents(DocumentCondition::worst()),
        2 => base
            .with_body_counters(ScratchCount::Few, DentCount::None, RustExtent::None)
            .with_mechanical(MechanicalCondition {
                engine: EngineHealth::Noise,
                oil_leakage: OilLeakage::Minor,
                ..Default::default()
            })
            .with_interior(InteriorCondition {
                seats: UpholsteryCondition::Worn,
                ..Default::default()
            })
            .with_safety(SafetyCondition {
                seat_belts: SeatBeltState::Faulty,
                ..Default::default()
            })
            .with_documents(DocumentCondition {
                insurance: InsuranceCover::ThirdParty,
                ..Default::default()
            }),
        _ => base,
    }
}

fn arb_assessment() -> impl Strategy<Value = VehicleAssessment> {
    (
        10_000.0..5_000_000.0f64,
        0u32..250_000,
        2000u16..=CURRENT_YEAR,
        any::<bool>(),
        any::<bool>(),
        0u8..3,
    )
        .prop_map(|(price, km, year, flood, accident, preset)| {
            preset_assessment(preset, price, km, year, flood, accident)
        })
}

proptest! {
    #[test]
    fn determinism(assessment in arb_assessment()) {
        let first = calculate_valuation(&assessment).unwrap();
        let second = calculate_valuation(&assessment).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn best_price_rounded_and_positive(assessment in arb_assessment()) {
        let result = calculate_valuation(&assessment).unwrap();
        prop_assert_eq!(result.best_price % 1000.0, 0.0);
        prop_assert!(result.best_price >= 0.0);
    }

    #[test]
    fn caps_never_exceeded(assessment in arb_assessment()) {
        let b = calculate_valuation(&assessment).unwrap().breakdown;
        prop_assert!(b.usage <= 15.0);
        prop_assert!(b.engine <= 25.0);
        prop_assert!(b.exterior <= 15.0);
        prop_assert!(b.interior <= 10.0);
        prop_assert!(b.electrical <= 8.0);
        prop_assert!(b.tyres <= 6.0);
        prop_assert!(b.safety <= 5.0);
        prop_assert!(b.documents <= 20.0);
    }

    #[test]
    fn floor_protection_holds(assessment in arb_assessment()) {
        let result = calculate_valuation(&assessment).unwrap();
        if result.seller_protection_applied {
            let floor = round_to_thousand(assessment.expected_price * 0.40);
            prop_assert!(result.best_price >= floor);
            prop_assert!(
                result.trail.pre_rounding >= assessment.expected_price * 0.40 - 1e-6
            );
        }
    }

    #[test]
    fn bonus_iff_clean_engine_and_documents(assessment in arb_assessment()) {
        let result = calculate_valuation(&assessment).unwrap();
        let qualifies =
            result.breakdown.engine <= 10.0 && result.breakdown.documents <= 5.0;
        prop_assert_eq!(result.good_car_bonus_applied, qualifies);
    }

    #[test]
    fn band_ordering(assessment in arb_assessment()) {
        let band = calculate_valuation(&assessment).unwrap().band;
        prop_assert!(band.market_value_min <= band.expected_final_deal);
        prop_assert!(band.expected_final_deal <= band.market_value_max);
        prop_assert!(band.market_value_max <= band.ideal_listing_price);
    }

    #[test]
    fn more_kilometers_never_raise_price(
        (low, high) in (0u32..250_000, 0u32..250_000)
            .prop_map(|(a, b)| (a.min(b), a.max(b))),
        price in 50_000.0..2_000_000.0f64,
        year in 2010u16..=CURRENT_YEAR,
        preset in 0u8..3,
    ) {
        let near = preset_assessment(preset, price, low, year, false, false);
        let far = preset_assessment(preset, price, high, year, false, false);
        let near_price = calculate_valuation(&near).unwrap().best_price;
        let far_price = calculate_valuation(&far).unwrap().best_price;
        prop_assert!(far_price <= near_price);
    }

    #[test]
    fn older_car_never_worth_more(
        (newer, older) in (2000u16..=CURRENT_YEAR, 2000u16..=CURRENT_YEAR)
            .prop_map(|(a, b)| (a.max(b), a.min(b))),
        price in 50_000.0..2_000_000.0f64,
        km in 0u32..250_000,
        preset in 0u8..3,
    ) {
        let young = preset_assessment(preset, price, km, newer, false, false);
        let old = preset_assessment(preset, price, km, older, false, false);
        let young_price = calculate_valuation(&young).unwrap().best_price;
        let old_price = calculate_valuation(&old).unwrap().best_price;
        prop_assert!(old_price <= young_price);
    }
}

#[test]
fn odometer_breakpoint_does_not_raise_price() {
    let below = preset_assessment(2, 500_000.0, 19_999, 2020, false, false);
    let above = preset_assessment(2, 500_000.0, 20_001, 2020, false, false);
    let below_price = calculate_valuation(&below).unwrap().best_price;
    let above_price = calculate_valuation(&above).unwrap().best_price;
    assert!(above_price <= below_price);
}
