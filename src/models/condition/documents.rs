//! Documents condition section.
//!
//! Paperwork carries the second-largest cap in the model: a missing
//! registration certificate or lapsed insurance hurts resale value almost as
//! much as a tired engine.

use serde::{Deserialize, Serialize};

/// Registration certificate paper state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RcPaper {
    #[default]
    Original,
    Duplicate,
    Missing,
    #[serde(other)]
    Unrecognized,
}

impl RcPaper {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Original => 0.0,
            Self::Duplicate => 4.0,
            Self::Missing => 10.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Insurance cover currently held on the vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceCover {
    #[default]
    Comprehensive,
    ThirdParty,
    Expired,
    #[serde(other)]
    Unrecognized,
}

impl InsuranceCover {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Comprehensive => 0.0,
            Self::ThirdParty => 2.0,
            Self::Expired => 5.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Service record completeness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceHistory {
    #[default]
    Complete,
    Partial,
    Absent,
    #[serde(other)]
    Unrecognized,
}

impl ServiceHistory {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Complete => 0.0,
            Self::Partial => 2.0,
            Self::Absent => 4.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Pollution-under-control certificate validity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollutionCert {
    #[default]
    Valid,
    Expired,
    #[serde(other)]
    Unrecognized,
}

impl PollutionCert {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Valid => 0.0,
            Self::Expired => 2.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Outstanding traffic challans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallanStatus {
    #[default]
    Clear,
    Pending,
    #[serde(other)]
    Unrecognized,
}

impl ChallanStatus {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Clear => 0.0,
            Self::Pending => 3.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Spare key availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpareKey {
    #[default]
    Available,
    Missing,
    #[serde(other)]
    Unrecognized,
}

impl SpareKey {
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Available => 0.0,
            Self::Missing => 2.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// Document condition attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentCondition {
    pub registration_certificate: RcPaper,
    pub insurance: InsuranceCover,
    pub service_history: ServiceHistory,
    pub pollution_certificate: PollutionCert,
    pub challans: ChallanStatus,
    pub spare_key: SpareKey,
}

impl DocumentCondition {
    /// Sum of all attribute deductions, before the category cap.
    pub fn raw_score(&self) -> f64 {
        self.registration_certificate.deduction()
            + self.insurance.deduction()
            + self.service_history.deduction()
            + self.pollution_certificate.deduction()
            + self.challans.deduction()
            + self.spare_key.deduction()
    }

    /// Every attribute at its worst-scoring value.
    pub fn worst() -> Self {
        Self {
            registration_certificate: RcPaper::Missing,
            insurance: InsuranceCover::Expired,
            service_history: ServiceHistory::Absent,
            pollution_certificate: PollutionCert::Expired,
            challans: ChallanStatus::Pending,
            spare_key: SpareKey::Missing,
        }
    }
}
