//! Condition sections of a vehicle assessment.
//!
//! Each section is a struct of named attributes drawn from small closed
//! enumerations. Every scored enumeration carries its deduction table as an
//! exhaustive `match` over its variants, and ends in a `#[serde(other)]`
//! `Unrecognized` variant so an out-of-vocabulary string deserializes cleanly
//! and contributes zero deduction instead of failing the whole valuation.

mod documents;
mod electrical;
mod exterior;
mod features;
mod fluids;
mod interior;
mod mechanical;
mod safety;
mod tyres;

pub use documents::{
    ChallanStatus, DocumentCondition, InsuranceCover, PollutionCert, RcPaper, ServiceHistory,
    SpareKey,
};
pub use electrical::{
    BatteryHealth, ElectricalCondition, HornState, LockingState, WarningLamps, WindowOperation,
    WiperState,
};
pub use exterior::{
    DentCount, ExteriorCondition, GlassCondition, LampCondition, PaintFinish, PanelAlignment,
    PanelCondition, RustExtent, ScratchCount,
};
pub use features::{AdditionalFeatures, Fitment};
pub use fluids::{
    BrakeFluidState, CoolantLevel, FluidsCondition, OilCondition, SteeringFluidState,
    TransmissionFluidState,
};
pub use interior::{
    AcPerformance, CabinOdor, DashboardCondition, InfotainmentState, InteriorCondition,
    TrimCondition, UpholsteryCondition,
};
pub use mechanical::{
    ClutchFeel, EngineHealth, ExhaustSmoke, GearShift, MechanicalCondition, MountingState,
    OilLeakage, Overheating, SuspensionState, TransmissionNoise,
};
pub use safety::{
    AbsWarning, AirbagState, BrakeResponse, ChildLockState, SafetyCondition, SeatBeltState,
};
pub use tyres::{SpareTyre, TreadDepth, TyreCondition, TyreSet, WheelCondition};
