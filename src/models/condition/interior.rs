//! Interior condition section.

use serde::{Deserialize, Serialize};

/// Seat upholstery state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpholsteryCondition {
    #[default]
    Good,
    Worn,
    Torn,
    #[serde(other)]
    Unrecognized,
}

impl UpholsteryCondition {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Good => 0.0,
            Self::Worn => 2.0,
            Self::Torn => 4.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Dashboard surface state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardCondition {
    #[default]
    Intact,
    Faded,
    Cracked,
    #[serde(other)]
    Unrecognized,
}

impl DashboardCondition {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Intact => 0.0,
            Self::Faded => 1.0,
            Self::Cracked => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Air-conditioning performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcPerformance {
    #[default]
    Chilling,
    Weak,
    NotWorking,
    #[serde(other)]
    Unrecognized,
}

impl AcPerformance {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Chilling => 0.0,
            Self::Weak => 2.0,
            Self::NotWorking => 4.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Infotainment head unit state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfotainmentState {
    #[default]
    Working,
    Faulty,
    #[serde(other)]
    Unrecognized,
}

impl InfotainmentState {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Working => 0.0,
            Self::Faulty => 2.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Cabin odor level. Strong odor often indicates water ingress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinOdor {
    #[default]
    None,
    Mild,
    Strong,
    #[serde(other)]
    Unrecognized,
}

impl CabinOdor {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Mild => 1.0,
            Self::Strong => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Carpet and roof-liner state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimCondition {
    #[default]
    Clean,
    Stained,
    Damaged,
    #[serde(other)]
    Unrecognized,
}

impl TrimCondition {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Clean => 0.0,
            Self::Stained => 1.0,
            Self::Damaged => 2.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Interior condition attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteriorCondition {
    pub seats: UpholsteryCondition,
    pub dashboard: DashboardCondition,
    pub air_conditioning: AcPerformance,
    pub infotainment: InfotainmentState,
    pub cabin_odor: CabinOdor,
    pub carpets: TrimCondition,
}

impl InteriorCondition {
    /// Sum of all attribute deductions, before the category cap.
    pub fn raw_score(&self) -> f64 {
        self.seats.deduction()
            + self.dashboard.deduction()
            + self.air_conditioning.deduction()
            + self.infotainment.deduction()
            + self.cabin_odor.deduction()
            + self.carpets.deduction()
    }

    /// Every attribute at its worst-scoring value.
    pub fn worst() -> Self {
        Self {
            seats: UpholsteryCondition::Torn,
            dashboard: DashboardCondition::Cracked,
            air_conditioning: AcPerformance::NotWorking,
            infotainment: InfotainmentState::Faulty,
            cabin_odor: CabinOdor::Strong,
            carpets: TrimCondition::Damaged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scores_zero() {
        assert_eq!(InteriorCondition::default().raw_score(), 0.0);
    }

    #[test]
    fn test_worst_score() {
        assert_eq!(InteriorCondition::worst().raw_score(), 18.0);
    }
}
