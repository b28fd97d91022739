//! Additional features section. Informational only; carries no depreciation
//! weight in the current model.

use serde::{Deserialize, Serialize};

/// Whether an optional feature is fitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fitment {
    #[default]
    Absent,
    Present,
    #[serde(other)]
    Unrecognized,
}

/// Optional-equipment checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalFeatures {
    pub sunroof: Fitment,
    pub alloy_wheels: Fitment,
    pub reverse_camera: Fitment,
    pub cruise_control: Fitment,
    pub music_system: Fitment,
}

impl AdditionalFeatures {
    /// Number of features marked present.
    pub fn fitted_count(&self) -> usize {
        [
            self.sunroof,
            self.alloy_wheels,
            self.reverse_camera,
            self.cruise_control,
            self.music_system,
        ]
        .iter()
        .filter(|f| **f == Fitment::Present)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitted_count() {
        let features = AdditionalFeatures {
            sunroof: Fitment::Present,
            reverse_camera: Fitment::Present,
            ..Default::default()
        };
        assert_eq!(features.fitted_count(), 2);
        assert_eq!(AdditionalFeatures::default().fitted_count(), 0);
    }
}
