//! Exterior condition section, plus the root-level scratch/dent/rust
//! counters that the intake form captures outside the section but that score
//! as exterior condition.

use serde::{Deserialize, Serialize};

/// Paint finish state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintFinish {
    #[default]
    Original,
    Faded,
    Repainted,
    #[serde(other)]
    Unrecognized,
}

impl PaintFinish {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Original => 0.0,
            Self::Faded => 2.0,
            Self::Repainted => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Windshield glass state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlassCondition {
    #[default]
    Clear,
    Chipped,
    Cracked,
    #[serde(other)]
    Unrecognized,
}

impl GlassCondition {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Clear => 0.0,
            Self::Chipped => 2.0,
            Self::Cracked => 4.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Lamp cluster state (shared by head and tail lamps).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LampCondition {
    #[default]
    Clear,
    Foggy,
    Broken,
    #[serde(other)]
    Unrecognized,
}

impl LampCondition {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Clear => 0.0,
            Self::Foggy => 1.0,
            Self::Broken => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Bumper state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelCondition {
    #[default]
    Intact,
    Scratched,
    Damaged,
    #[serde(other)]
    Unrecognized,
}

impl PanelCondition {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Intact => 0.0,
            Self::Scratched => 2.0,
            Self::Damaged => 4.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Body panel alignment; replaced panels score worst.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelAlignment {
    #[default]
    Aligned,
    Misaligned,
    Replaced,
    #[serde(other)]
    Unrecognized,
}

impl PanelAlignment {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Aligned => 0.0,
            Self::Misaligned => 3.0,
            Self::Replaced => 4.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Body scratch count bucket (root-level counter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScratchCount {
    #[default]
    None,
    Few,
    Many,
    #[serde(other)]
    Unrecognized,
}

impl ScratchCount {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Few => 1.0,
            Self::Many => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Body dent count bucket (root-level counter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DentCount {
    #[default]
    None,
    Few,
    Many,
    #[serde(other)]
    Unrecognized,
}

impl DentCount {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Few => 2.0,
            Self::Many => 4.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Rust extent (root-level counter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RustExtent {
    #[default]
    None,
    Surface,
    Deep,
    #[serde(other)]
    Unrecognized,
}

impl RustExtent {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Surface => 3.0,
            Self::Deep => 6.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Exterior condition attributes (the dedicated section block).
///
/// The calculator merges this block with the root-level scratch/dent/rust
/// counters before applying the exterior cap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExteriorCondition {
    pub paint: PaintFinish,
    pub windshield: GlassCondition,
    pub headlights: LampCondition,
    pub taillights: LampCondition,
    pub bumpers: PanelCondition,
    pub body_panels: PanelAlignment,
}

impl ExteriorCondition {
    /// Sum of the section block's deductions, before the root counters and
    /// before the category cap.
    pub fn raw_score(&self) -> f64 {
        self.paint.deduction()
            + self.windshield.deduction()
            + self.headlights.deduction()
            + self.taillights.deduction()
            + self.bumpers.deduction()
            + self.body_panels.deduction()
    }

    /// Every attribute at its worst-scoring value.
    pub fn worst() -> Self {
        Self {
            paint: PaintFinish::Repainted,
            windshield: GlassCondition::Cracked,
            headlights: LampCondition::Broken,
            taillights: LampCondition::Broken,
            bumpers: PanelCondition::Damaged,
            body_panels: PanelAlignment::Replaced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scores_zero() {
        assert_eq!(ExteriorCondition::default().raw_score(), 0.0);
    }

    #[test]
    fn test_worst_section_score() {
        assert_eq!(ExteriorCondition::worst().raw_score(), 21.0);
    }

    #[test]
    fn test_counters_worst() {
        let counters = ScratchCount::Many.deduction()
            + DentCount::Many.deduction()
            + RustExtent::Deep.deduction();
        assert_eq!(counters, 13.0);
    }
}
