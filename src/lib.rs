//! # carworth
//!
//! Deterministic used-car valuation engine: a pure function from a structured
//! vehicle assessment (specification, usage history, ~60 condition
//! attributes) to a final price estimate with a per-category breakdown,
//! audit trail, and confidence band.
//!
//! The computation is synchronous and side-effect free. The current calendar
//! year is an explicit input, never a clock read, so the same assessment
//! always prices identically.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (VehicleAssessment, condition sections, ValuationResult)
//! - [`depreciation`] — Category scoring with caps, odometer/age step functions
//! - [`pricing`] — Sequential reduction pipeline, floor protection, bonus, confidence band
//! - [`engine`] — The `calculate_valuation` entry point and error taxonomy
//!
//! ## Example
//!
//! ```
//! use carworth::engine::calculate_valuation;
//! use carworth::models::{EngineHealth, MechanicalCondition, VehicleAssessment};
//!
//! let assessment = VehicleAssessment::new(500_000.0, 2021, 2024)
//!     .with_odometer(45_000)
//!     .with_mechanical(MechanicalCondition {
//!         engine: EngineHealth::Noise,
//!         ..Default::default()
//!     });
//!
//! let result = calculate_valuation(&assessment).unwrap();
//! assert_eq!(result.best_price % 1000.0, 0.0);
//! assert_eq!(result.breakdown.engine, 5.0);
//! ```

pub mod depreciation;
pub mod engine;
pub mod models;
pub mod pricing;
