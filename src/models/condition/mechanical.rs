//! Engine and mechanical condition section.

use serde::{Deserialize, Serialize};

/// How the engine runs at idle and under load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineHealth {
    #[default]
    Smooth,
    Noise,
    Vibration,
    Other,
    /// Out-of-vocabulary input; contributes no deduction.
    #[serde(other)]
    Unrecognized,
}

impl EngineHealth {
    /// Percentage-points deducted for this state.
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Smooth => 0.0,
            Self::Noise => 5.0,
            Self::Vibration => 6.0,
            Self::Other => 8.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Visible engine oil leakage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OilLeakage {
    #[default]
    None,
    Minor,
    Major,
    #[serde(other)]
    Unrecognized,
}

impl OilLeakage {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Minor => 3.0,
            Self::Major => 6.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Exhaust smoke color. Blue smoke (burning oil) is scored worst.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustSmoke {
    #[default]
    None,
    White,
    Black,
    Blue,
    #[serde(other)]
    Unrecognized,
}

impl ExhaustSmoke {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::White => 4.0,
            Self::Black => 5.0,
            Self::Blue => 6.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Engine mounting integrity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountingState {
    #[default]
    Intact,
    Damaged,
    #[serde(other)]
    Unrecognized,
}

impl MountingState {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Intact => 0.0,
            Self::Damaged => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Clutch engagement feel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClutchFeel {
    #[default]
    Smooth,
    Hard,
    Slipping,
    #[serde(other)]
    Unrecognized,
}

impl ClutchFeel {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Smooth => 0.0,
            Self::Hard => 3.0,
            Self::Slipping => 5.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Gear shift quality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearShift {
    #[default]
    Smooth,
    Hard,
    Jerky,
    #[serde(other)]
    Unrecognized,
}

impl GearShift {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Smooth => 0.0,
            Self::Hard => 3.0,
            Self::Jerky => 4.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Audible transmission noise while driving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransmissionNoise {
    #[default]
    None,
    Audible,
    #[serde(other)]
    Unrecognized,
}

impl TransmissionNoise {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Audible => 4.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Suspension behavior over bumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuspensionState {
    #[default]
    Fine,
    Noisy,
    Weak,
    #[serde(other)]
    Unrecognized,
}

impl SuspensionState {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Fine => 0.0,
            Self::Noisy => 3.0,
            Self::Weak => 5.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Reported overheating frequency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overheating {
    #[default]
    Never,
    Occasional,
    Frequent,
    #[serde(other)]
    Unrecognized,
}

impl Overheating {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Never => 0.0,
            Self::Occasional => 4.0,
            Self::Frequent => 7.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Engine and mechanical condition attributes.
///
/// The raw score can exceed the category cap; capping is the calculator's
/// responsibility, not the section's.
///
/// # Examples
///
/// ```
/// use carworth::models::{EngineHealth, MechanicalCondition};
///
/// let section = MechanicalCondition {
///     engine: EngineHealth::Noise,
///     ..Default::default()
/// };
/// assert_eq!(section.raw_score(), 5.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MechanicalCondition {
    pub engine: EngineHealth,
    pub oil_leakage: OilLeakage,
    pub exhaust_smoke: ExhaustSmoke,
    pub engine_mounting: MountingState,
    pub clutch: ClutchFeel,
    pub gear_shift: GearShift,
    pub transmission_noise: TransmissionNoise,
    pub suspension: SuspensionState,
    pub overheating: Overheating,
}

impl MechanicalCondition {
    /// Sum of all attribute deductions, before the category cap.
    pub fn raw_score(&self) -> f64 {
        self.engine.deduction()
            + self.oil_leakage.deduction()
            + self.exhaust_smoke.deduction()
            + self.engine_mounting.deduction()
            + self.clutch.deduction()
            + self.gear_shift.deduction()
            + self.transmission_noise.deduction()
            + self.suspension.deduction()
            + self.overheating.deduction()
    }

    /// Every attribute at its worst-scoring value.
    pub fn worst() -> Self {
        Self {
            engine: EngineHealth::Other,
            oil_leakage: OilLeakage::Major,
            exhaust_smoke: ExhaustSmoke::Blue,
            engine_mounting: MountingState::Damaged,
            clutch: ClutchFeel::Slipping,
            gear_shift: GearShift::Jerky,
            transmission_noise: TransmissionNoise::Audible,
            suspension: SuspensionState::Weak,
            overheating: Overheating::Frequent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scores_zero() {
        assert_eq!(MechanicalCondition::default().raw_score(), 0.0);
    }

    #[test]
    fn test_worst_exceeds_cap_range() {
        // Worst raw sum must be well above the 25-point category cap so the
        // clamp is observable.
        assert_eq!(MechanicalCondition::worst().raw_score(), 48.0);
    }

    #[test]
    fn test_single_attribute() {
        let section = MechanicalCondition {
            overheating: Overheating::Frequent,
            ..Default::default()
        };
        assert_eq!(section.raw_score(), 7.0);
    }

    #[test]
    fn test_unrecognized_scores_zero() {
        let section = MechanicalCondition {
            engine: EngineHealth::Unrecognized,
            clutch: ClutchFeel::Unrecognized,
            ..Default::default()
        };
        assert_eq!(section.raw_score(), 0.0);
    }
}
