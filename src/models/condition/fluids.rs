//! Fluids condition section.
//!
//! Collected and scored for the report, but not weighted into the price
//! reduction pipeline in the current model.

use serde::{Deserialize, Serialize};

/// Engine oil appearance on the dipstick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OilCondition {
    #[default]
    Clean,
    Dirty,
    Low,
    #[serde(other)]
    Unrecognized,
}

impl OilCondition {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Clean => 0.0,
            Self::Dirty => 2.0,
            Self::Low => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Coolant level and containment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoolantLevel {
    #[default]
    Ok,
    Low,
    Leaking,
    #[serde(other)]
    Unrecognized,
}

impl CoolantLevel {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Ok => 0.0,
            Self::Low => 1.0,
            Self::Leaking => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Brake fluid level and clarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrakeFluidState {
    #[default]
    Ok,
    Low,
    Contaminated,
    #[serde(other)]
    Unrecognized,
}

impl BrakeFluidState {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Ok => 0.0,
            Self::Low => 1.0,
            Self::Contaminated => 2.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Transmission fluid state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransmissionFluidState {
    #[default]
    Ok,
    Low,
    Burnt,
    #[serde(other)]
    Unrecognized,
}

impl TransmissionFluidState {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Ok => 0.0,
            Self::Low => 1.0,
            Self::Burnt => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Power steering fluid state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SteeringFluidState {
    #[default]
    Ok,
    Low,
    Leaking,
    #[serde(other)]
    Unrecognized,
}

impl SteeringFluidState {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Ok => 0.0,
            Self::Low => 1.0,
            Self::Leaking => 2.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Fluids condition attributes. Informational only; see module docs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FluidsCondition {
    pub engine_oil: OilCondition,
    pub coolant: CoolantLevel,
    pub brake_fluid: BrakeFluidState,
    pub transmission_fluid: TransmissionFluidState,
    pub steering_fluid: SteeringFluidState,
}

impl FluidsCondition {
    /// Sum of all attribute deductions. Reported, never applied to price.
    pub fn raw_score(&self) -> f64 {
        self.engine_oil.deduction()
            + self.coolant.deduction()
            + self.brake_fluid.deduction()
            + self.transmission_fluid.deduction()
            + self.steering_fluid.deduction()
    }

    /// Every attribute at its worst-scoring value.
    pub fn worst() -> Self {
        Self {
            engine_oil: OilCondition::Low,
            coolant: CoolantLevel::Leaking,
            brake_fluid: BrakeFluidState::Contaminated,
            transmission_fluid: TransmissionFluidState::Burnt,
            steering_fluid: SteeringFluidState::Leaking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scores_zero() {
        assert_eq!(FluidsCondition::default().raw_score(), 0.0);
    }

    #[test]
    fn test_worst_score() {
        assert_eq!(FluidsCondition::worst().raw_score(), 13.0);
    }
}
