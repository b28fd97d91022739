//! Safety condition section.

use serde::{Deserialize, Serialize};

/// Airbag state. A deployed airbag implies a past impact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirbagState {
    #[default]
    Intact,
    Deployed,
    #[serde(other)]
    Unrecognized,
}

impl AirbagState {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Intact => 0.0,
            Self::Deployed => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Seat belt function across all seats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatBeltState {
    #[default]
    Functional,
    Faulty,
    #[serde(other)]
    Unrecognized,
}

impl SeatBeltState {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Functional => 0.0,
            Self::Faulty => 2.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// ABS warning lamp state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsWarning {
    #[default]
    Off,
    On,
    #[serde(other)]
    Unrecognized,
}

impl AbsWarning {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Off => 0.0,
            Self::On => 2.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Brake pedal response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrakeResponse {
    #[default]
    Effective,
    Spongy,
    Grinding,
    #[serde(other)]
    Unrecognized,
}

impl BrakeResponse {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Effective => 0.0,
            Self::Spongy => 2.0,
            Self::Grinding => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Child lock function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildLockState {
    #[default]
    Working,
    Faulty,
    #[serde(other)]
    Unrecognized,
}

impl ChildLockState {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Working => 0.0,
            Self::Faulty => 1.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Safety condition attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SafetyCondition {
    pub airbags: AirbagState,
    pub seat_belts: SeatBeltState,
    pub abs_warning: AbsWarning,
    pub brakes: BrakeResponse,
    pub child_locks: ChildLockState,
}

impl SafetyCondition {
    /// Sum of all attribute deductions, before the category cap.
    pub fn raw_score(&self) -> f64 {
        self.airbags.deduction()
            + self.seat_belts.deduction()
            + self.abs_warning.deduction()
            + self.brakes.deduction()
            + self.child_locks.deduction()
    }

    /// Every attribute at its worst-scoring value.
    pub fn worst() -> Self {
        Self {
            airbags: AirbagState::Deployed,
            seat_belts: SeatBeltState::Faulty,
            abs_warning: AbsWarning::On,
            brakes: BrakeResponse::Grinding,
            child_locks: ChildLockState::Faulty,
        }
    }
}
