//! Shipment record — the external input data model
//!
//! A `Shipment` is supplied read-only by the data layer and never mutated
//! here. Every string union in the wire format is a typed enum; serde
//! attributes preserve the exact wire strings (`COD`, `token-generated`,
//! `paid`, ...) and the camelCase field names the data layer uses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Transport mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TransportMode {
    #[default]
    Road,
    Courier,
    Air,
    Sea,
    Rail,
}

/// Domestic vs cross-border shipment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ShipmentType {
    #[default]
    Domestic,
    International,
}

/// Which party the shipment is billed to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum BillTo {
    #[default]
    Shipper,
    Consignee,
}

/// Standardized trade term defining the shipping/customs responsibility
/// split between buyer and seller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Incoterm {
    #[default]
    Exw,
    Fob,
    Cif,
    Dap,
    Ddp,
}

/// When payment is collected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PaymentTiming {
    /// Cash on Delivery — collected at delivery instead of prepaid
    #[serde(rename = "COD")]
    Cod,
    #[default]
    Prepaid,
    Postpaid,
}

/// Payment settlement state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Pending,
    Paid,
}

/// Automated compliance screening outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Cleared,
    #[default]
    Pending,
    Rejected,
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStatus::Cleared => write!(f, "cleared"),
            ComplianceStatus::Pending => write!(f, "pending"),
            ComplianceStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Customs broker review outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    #[default]
    Pending,
    Rejected,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Pending => write!(f, "pending"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Assessed risk level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

/// Shipment workflow state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ShipmentStatus {
    #[default]
    Draft,
    Submitted,
    UnderReview,
    /// Pre-clearance token issued; the shipment is authorized to proceed
    /// to booking
    TokenGenerated,
    Rejected,
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShipmentStatus::Draft => write!(f, "draft"),
            ShipmentStatus::Submitted => write!(f, "submitted"),
            ShipmentStatus::UnderReview => write!(f, "under-review"),
            ShipmentStatus::TokenGenerated => write!(f, "token-generated"),
            ShipmentStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Booking state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Unbooked,
    Booked,
}

/// Special-handling flags set on a shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SpecialFlag {
    DangerousGoods,
    LithiumBattery,
    TemperatureControlled,
    Restricted,
}

impl std::fmt::Display for SpecialFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecialFlag::DangerousGoods => write!(f, "Dangerous Goods"),
            SpecialFlag::LithiumBattery => write!(f, "Lithium Battery"),
            SpecialFlag::TemperatureControlled => write!(f, "Temperature Controlled"),
            SpecialFlag::Restricted => write!(f, "Restricted Item"),
        }
    }
}

/// A freight shipment record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// Unique identifier
    pub id: String,

    /// External reference identifier
    pub reference_id: String,

    /// Human-readable title
    pub title: String,

    /// Pre-clearance token, if one has been generated
    #[serde(default)]
    pub token: Option<String>,

    /// Transport mode
    pub mode: TransportMode,

    /// Domestic or international
    pub shipment_type: ShipmentType,

    /// Service level label (e.g. "Priority")
    pub service_level: String,

    /// Trade term
    pub incoterm: Incoterm,

    /// Billed party
    pub bill_to: BillTo,

    /// Payment collection timing
    pub payment_timing: PaymentTiming,

    /// Payment settlement state
    pub payment_status: PaymentStatus,

    /// ISO currency code of the declared value
    pub currency: String,

    /// Declared customs value
    pub declared_value: f64,

    /// Estimated duty and tax payable at customs
    pub estimated_duty_tax: f64,

    /// Total weight in kilograms
    pub total_weight: f64,

    /// Automated compliance screening outcome
    pub ai_compliance_status: ComplianceStatus,

    /// Compliance confidence score in [0, 100]
    pub ai_compliance_score: u8,

    /// Customs broker review outcome
    pub broker_review_status: ReviewStatus,

    /// Assessed risk level
    pub risk_level: RiskLevel,

    /// Dangerous-goods flag
    pub dangerous_goods: bool,

    /// Lithium-battery flag
    pub lithium_battery: bool,

    /// Temperature-controlled flag
    pub temperature_controlled: bool,

    /// Restricted-item flag
    pub restricted_flag: bool,

    /// Whether insurance must be included in the quote
    pub insurance_required: bool,

    /// Workflow state
    pub status: ShipmentStatus,

    /// Booking state
    pub booking_status: BookingStatus,
}

impl Shipment {
    /// Whether a usable pre-clearance token is present.
    ///
    /// A token counts as present only when it is `Some` and non-empty —
    /// the single definition used by every eligibility rule.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Special-handling flags set on this shipment, in display order
    pub fn special_flags(&self) -> Vec<SpecialFlag> {
        let mut flags = Vec::new();
        if self.dangerous_goods {
            flags.push(SpecialFlag::DangerousGoods);
        }
        if self.lithium_battery {
            flags.push(SpecialFlag::LithiumBattery);
        }
        if self.temperature_controlled {
            flags.push(SpecialFlag::TemperatureControlled);
        }
        if self.restricted_flag {
            flags.push(SpecialFlag::Restricted);
        }
        flags
    }

    /// Whether any special-handling flag is set
    pub fn has_special_flags(&self) -> bool {
        self.dangerous_goods
            || self.lithium_battery
            || self.temperature_controlled
            || self.restricted_flag
    }
}
