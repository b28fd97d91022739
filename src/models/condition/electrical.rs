//! Electrical condition section.

use serde::{Deserialize, Serialize};

/// Battery health.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryHealth {
    #[default]
    Good,
    Weak,
    Dead,
    #[serde(other)]
    Unrecognized,
}

impl BatteryHealth {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Good => 0.0,
            Self::Weak => 2.0,
            Self::Dead => 4.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Power window operation across all doors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowOperation {
    #[default]
    AllWorking,
    SomeFaulty,
    NotWorking,
    #[serde(other)]
    Unrecognized,
}

impl WindowOperation {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::AllWorking => 0.0,
            Self::SomeFaulty => 2.0,
            Self::NotWorking => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Central locking state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockingState {
    #[default]
    Working,
    Faulty,
    #[serde(other)]
    Unrecognized,
}

impl LockingState {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Working => 0.0,
            Self::Faulty => 2.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Horn state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HornState {
    #[default]
    Working,
    Weak,
    Silent,
    #[serde(other)]
    Unrecognized,
}

impl HornState {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Working => 0.0,
            Self::Weak => 1.0,
            Self::Silent => 2.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Wiper and washer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiperState {
    #[default]
    Working,
    Faulty,
    #[serde(other)]
    Unrecognized,
}

impl WiperState {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Working => 0.0,
            Self::Faulty => 1.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Dashboard warning lamps lit at ignition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningLamps {
    #[default]
    None,
    CheckEngine,
    Multiple,
    #[serde(other)]
    Unrecognized,
}

impl WarningLamps {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::CheckEngine => 3.0,
            Self::Multiple => 4.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Electrical condition attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElectricalCondition {
    pub battery: BatteryHealth,
    pub power_windows: WindowOperation,
    pub central_locking: LockingState,
    pub horn: HornState,
    pub wipers: WiperState,
    pub warning_lights: WarningLamps,
}

impl ElectricalCondition {
    /// Sum of all attribute deductions, before the category cap.
    pub fn raw_score(&self) -> f64 {
        self.battery.deduction()
            + self.power_windows.deduction()
            + self.central_locking.deduction()
            + self.horn.deduction()
            + self.wipers.deduction()
            + self.warning_lights.deduction()
    }

    /// Every attribute at its worst-scoring value.
    pub fn worst() -> Self {
        Self {
            battery: BatteryHealth::Dead,
            power_windows: WindowOperation::NotWorking,
            central_locking: LockingState::Faulty,
            horn: HornState::Silent,
            wipers: WiperState::Faulty,
            warning_lights: WarningLamps::Multiple,
        }
    }
}
