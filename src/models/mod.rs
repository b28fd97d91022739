//! Domain model types for vehicle valuation.
//!
//! Provides the core records: the assessment a seller submits (identity,
//! usage history, nine condition sections over closed enumerations) and the
//! result the engine returns (best price, audit trail, per-category
//! depreciation breakdown, confidence band).

mod assessment;
pub mod condition;
mod result;

pub use assessment::{
    BodyType, DamageFlag, DrivingEnvironment, FuelType, InsuranceType, RcStatus,
    ServiceCenterType, Transmission, UsageProfile, UsageType, VehicleAssessment,
};
pub use condition::*;
pub use result::{ConfidenceBand, DepreciationBreakdown, PriceTrail, Stage, ValuationResult};
