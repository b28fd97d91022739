//! Vehicle assessment input record and specification enumerations.

use serde::{Deserialize, Serialize};

use super::condition::{
    AdditionalFeatures, DentCount, DocumentCondition, ElectricalCondition, ExteriorCondition,
    FluidsCondition, InteriorCondition, MechanicalCondition, RustExtent, SafetyCondition,
    ScratchCount, TyreCondition,
};

/// Vehicle body style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    #[default]
    Hatchback,
    Sedan,
    Suv,
    Muv,
    Coupe,
    Van,
    #[serde(other)]
    Unrecognized,
}

/// Fuel type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    #[default]
    Petrol,
    Diesel,
    Cng,
    Lpg,
    Electric,
    Hybrid,
    #[serde(other)]
    Unrecognized,
}

/// Transmission type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    #[default]
    Manual,
    Automatic,
    Amt,
    Cvt,
    Dct,
    #[serde(other)]
    Unrecognized,
}

/// Registration certificate status as declared by the seller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RcStatus {
    #[default]
    Original,
    Duplicate,
    Lost,
    #[serde(other)]
    Unrecognized,
}

/// Insurance policy type as declared by the seller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceType {
    #[default]
    Comprehensive,
    ThirdParty,
    Expired,
    #[serde(other)]
    Unrecognized,
}

/// How the vehicle was used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageType {
    #[default]
    Personal,
    Commercial,
    #[serde(other)]
    Unrecognized,
}

/// Two-value damage declaration.
///
/// Modeled as an enumeration rather than a bool so an out-of-vocabulary
/// string degrades to "no damage declared" instead of failing the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageFlag {
    #[default]
    No,
    Yes,
    #[serde(other)]
    Unrecognized,
}

impl DamageFlag {
    /// True only for an explicit `Yes`.
    pub fn is_flagged(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Primary driving environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrivingEnvironment {
    #[default]
    City,
    Highway,
    Mixed,
    Rural,
    #[serde(other)]
    Unrecognized,
}

/// Where the vehicle was serviced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCenterType {
    #[default]
    Authorized,
    Local,
    Mixed,
    #[serde(other)]
    Unrecognized,
}

/// Usage history block of an assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageProfile {
    /// Odometer reading in kilometers.
    pub odometer_km: u32,
    pub usage_type: UsageType,
    pub flood_damage: DamageFlag,
    pub accident_history: DamageFlag,
    pub driving_environment: DrivingEnvironment,
    pub service_center: ServiceCenterType,
}

/// A complete, validated description of a vehicle submitted for valuation.
///
/// The engine assumes the caller has already validated and shaped this input;
/// `current_year` is supplied explicitly so the computation never reads a
/// clock and stays reproducible.
///
/// # Examples
///
/// ```
/// use carworth::models::VehicleAssessment;
///
/// let assessment = VehicleAssessment::new(500_000.0, 2021, 2024)
///     .with_odometer(45_000)
///     .with_make_model("Maruti", "Swift");
/// assert_eq!(assessment.vehicle_age(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleAssessment {
    // Identity and specification
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub variant: String,
    #[serde(default)]
    pub body_type: BodyType,
    #[serde(default)]
    pub fuel_type: FuelType,
    #[serde(default)]
    pub transmission: Transmission,
    pub manufacture_year: u16,
    #[serde(default)]
    pub registration_year: u16,
    #[serde(default)]
    pub registration_state: String,
    #[serde(default)]
    pub owner_count: u8,
    #[serde(default)]
    pub rc_status: RcStatus,
    #[serde(default)]
    pub insurance_type: InsuranceType,
    #[serde(default)]
    pub hypothecation: bool,

    /// Seller-stated expected price; must be positive.
    pub expected_price: f64,
    /// Calendar year used to compute age. Never read from a clock.
    pub current_year: u16,

    // Usage history
    #[serde(default)]
    pub usage: UsageProfile,

    // Root-level exterior counters, captured outside the exterior section for
    // form-layout reasons but scored as exterior condition.
    #[serde(default)]
    pub scratches: ScratchCount,
    #[serde(default)]
    pub dents: DentCount,
    #[serde(default)]
    pub rust: RustExtent,

    // Condition sections
    #[serde(default)]
    pub mechanical: MechanicalCondition,
    #[serde(default)]
    pub fluids: FluidsCondition,
    #[serde(default)]
    pub exterior: ExteriorCondition,
    #[serde(default)]
    pub interior: InteriorCondition,
    #[serde(default)]
    pub electrical: ElectricalCondition,
    #[serde(default)]
    pub tyres: TyreCondition,
    #[serde(default)]
    pub safety: SafetyCondition,
    #[serde(default)]
    pub documents: DocumentCondition,
    #[serde(default)]
    pub features: AdditionalFeatures,
}

impl VehicleAssessment {
    /// Creates an assessment with the essential pricing inputs and best-case
    /// defaults for everything else.
    pub fn new(expected_price: f64, manufacture_year: u16, current_year: u16) -> Self {
        Self {
            make: String::new(),
            model: String::new(),
            variant: String::new(),
            body_type: BodyType::default(),
            fuel_type: FuelType::default(),
            transmission: Transmission::default(),
            manufacture_year,
            registration_year: manufacture_year,
            registration_state: String::new(),
            owner_count: 1,
            rc_status: RcStatus::default(),
            insurance_type: InsuranceType::default(),
            hypothecation: false,
            expected_price,
            current_year,
            usage: UsageProfile::default(),
            scratches: ScratchCount::default(),
            dents: DentCount::default(),
            rust: RustExtent::default(),
            mechanical: MechanicalCondition::default(),
            fluids: FluidsCondition::default(),
            exterior: ExteriorCondition::default(),
            interior: InteriorCondition::default(),
            electrical: ElectricalCondition::default(),
            tyres: TyreCondition::default(),
            safety: SafetyCondition::default(),
            documents: DocumentCondition::default(),
            features: AdditionalFeatures::default(),
        }
    }

    /// Sets make and model.
    pub fn with_make_model(mut self, make: &str, model: &str) -> Self {
        self.make = make.to_string();
        self.model = model.to_string();
        self
    }

    /// Sets the odometer reading in kilometers.
    pub fn with_odometer(mut self, km: u32) -> Self {
        self.usage.odometer_km = km;
        self
    }

    /// Sets the full usage block.
    pub fn with_usage(mut self, usage: UsageProfile) -> Self {
        self.usage = usage;
        self
    }

    /// Sets the root-level exterior counters.
    pub fn with_body_counters(
        mut self,
        scratches: ScratchCount,
        dents: DentCount,
        rust: RustExtent,
    ) -> Self {
        self.scratches = scratches;
        self.dents = dents;
        self.rust = rust;
        self
    }

    /// Sets the mechanical section.
    pub fn with_mechanical(mut self, section: MechanicalCondition) -> Self {
        self.mechanical = section;
        self
    }

    /// Sets the fluids section.
    pub fn with_fluids(mut self, section: FluidsCondition) -> Self {
        self.fluids = section;
        self
    }

    /// Sets the exterior section.
    pub fn with_exterior(mut self, section: ExteriorCondition) -> Self {
        self.exterior = section;
        self
    }

    /// Sets the interior section.
    pub fn with_interior(mut self, section: InteriorCondition) -> Self {
        self.interior = section;
        self
    }

    /// Sets the electrical section.
    pub fn with_electrical(mut self, section: ElectricalCondition) -> Self {
        self.electrical = section;
        self
    }

    /// Sets the tyre section.
    pub fn with_tyres(mut self, section: TyreCondition) -> Self {
        self.tyres = section;
        self
    }

    /// Sets the safety section.
    pub fn with_safety(mut self, section: SafetyCondition) -> Self {
        self.safety = section;
        self
    }

    /// Sets the documents section.
    pub fn with_documents(mut self, section: DocumentCondition) -> Self {
        self.documents = section;
        self
    }

    /// Sets the additional-features section.
    pub fn with_features(mut self, features: AdditionalFeatures) -> Self {
        self.features = features;
        self
    }

    /// Vehicle age in years, or `None` when the manufacture year lies in the
    /// future relative to `current_year`.
    pub fn vehicle_age(&self) -> Option<u16> {
        self.current_year.checked_sub(self.manufacture_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_best_case() {
        let a = VehicleAssessment::new(300_000.0, 2020, 2024);
        assert_eq!(a.expected_price, 300_000.0);
        assert_eq!(a.usage.odometer_km, 0);
        assert_eq!(a.mechanical.raw_score(), 0.0);
        assert_eq!(a.documents.raw_score(), 0.0);
        assert!(!a.usage.flood_damage.is_flagged());
    }

    #[test]
    fn test_vehicle_age() {
        let a = VehicleAssessment::new(300_000.0, 2019, 2024);
        assert_eq!(a.vehicle_age(), Some(5));
    }

    #[test]
    fn test_vehicle_age_future_year() {
        let a = VehicleAssessment::new(300_000.0, 2025, 2024);
        assert_eq!(a.vehicle_age(), None);
    }

    #[test]
    fn test_builder_chain() {
        let a = VehicleAssessment::new(300_000.0, 2020, 2024)
            .with_odometer(62_000)
            .with_make_model("Hyundai", "i20");
        assert_eq!(a.usage.odometer_km, 62_000);
        assert_eq!(a.make, "Hyundai");
        assert_eq!(a.model, "i20");
    }

    #[test]
    fn test_damage_flag() {
        assert!(DamageFlag::Yes.is_flagged());
        assert!(!DamageFlag::No.is_flagged());
        assert!(!DamageFlag::Unrecognized.is_flagged());
    }
}
