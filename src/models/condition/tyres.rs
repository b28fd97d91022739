//! Tyre condition section.

use serde::{Deserialize, Serialize};

/// Remaining tread depth bucket for an axle pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreadDepth {
    #[default]
    AboveHalf,
    BelowHalf,
    NearWorn,
    #[serde(other)]
    Unrecognized,
}

impl TreadDepth {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::AboveHalf => 0.0,
            Self::BelowHalf => 1.0,
            Self::NearWorn => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Spare tyre state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpareTyre {
    #[default]
    Good,
    Worn,
    Missing,
    #[serde(other)]
    Unrecognized,
}

impl SpareTyre {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Good => 0.0,
            Self::Worn => 1.0,
            Self::Missing => 2.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Whether all four tyres are the same brand and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TyreSet {
    #[default]
    Matched,
    Mismatched,
    #[serde(other)]
    Unrecognized,
}

impl TyreSet {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Matched => 0.0,
            Self::Mismatched => 1.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Wheel (rim/alloy) condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelCondition {
    #[default]
    Good,
    Scuffed,
    Damaged,
    #[serde(other)]
    Unrecognized,
}

impl WheelCondition {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Good => 0.0,
            Self::Scuffed => 1.0,
            Self::Damaged => 2.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Tyre condition attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TyreCondition {
    pub front: TreadDepth,
    pub rear: TreadDepth,
    pub spare: SpareTyre,
    pub matching: TyreSet,
    pub wheels: WheelCondition,
}

impl TyreCondition {
    /// Sum of all attribute deductions, before the category cap.
    pub fn raw_score(&self) -> f64 {
        self.front.deduction()
            + self.rear.deduction()
            + self.spare.deduction()
            + self.matching.deduction()
            + self.wheels.deduction()
    }

    /// Every attribute at its worst-scoring value.
    pub fn worst() -> Self {
        Self {
            front: TreadDepth::NearWorn,
            rear: TreadDepth::NearWorn,
            spare: SpareTyre::Missing,
            matching: TyreSet::Mismatched,
            wheels: WheelCondition::Damaged,
        }
    }
}
