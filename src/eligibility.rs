//! Booking and COD eligibility rules
//!
//! Pure predicates over a shipment record. COD eligibility is a
//! priority-ordered chain that reports the first failing check; booking
//! eligibility is an AND of independent conditions with a separate
//! all-failures diagnostic list for display. Every evaluator takes
//! `Option<&Shipment>` — an absent shipment is a domain outcome
//! ("Shipment not found"), not a panic.

use crate::shipment::{
    BookingStatus, ComplianceStatus, PaymentTiming, ReviewStatus, Shipment, ShipmentStatus,
    ShipmentType, TransportMode,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An eligibility verdict with a human-readable reason.
///
/// Produced fresh on each evaluation; never cached or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Verdict {
    pub eligible: bool,
    pub reason: String,
}

impl Verdict {
    fn eligible(reason: &str) -> Self {
        Self {
            eligible: true,
            reason: reason.to_string(),
        }
    }

    fn ineligible(reason: &str) -> Self {
        Self {
            eligible: false,
            reason: reason.to_string(),
        }
    }
}

/// Cash-on-delivery eligibility.
///
/// Eligible iff payment timing is COD, the mode is Road or Courier, the
/// shipment is domestic, and no dangerous goods are declared. Checks run
/// in that fixed order and the verdict carries the reason of the first
/// failing check.
pub fn cod_eligibility(shipment: Option<&Shipment>) -> Verdict {
    let Some(shipment) = shipment else {
        return Verdict::ineligible("Shipment not found");
    };

    if shipment.payment_timing != PaymentTiming::Cod {
        return Verdict::ineligible("Payment timing must be COD");
    }
    if !matches!(shipment.mode, TransportMode::Road | TransportMode::Courier) {
        return Verdict::ineligible("COD only available for Road/Courier modes");
    }
    if shipment.shipment_type != ShipmentType::Domestic {
        return Verdict::ineligible("COD only available for domestic shipments");
    }
    if shipment.dangerous_goods {
        return Verdict::ineligible("Dangerous goods not allowed with COD");
    }

    Verdict::eligible("Eligible for COD")
}

/// Whether the shipment may be booked: compliance cleared, broker
/// approved, status token-generated, token present, not already booked.
pub fn booking_eligible(shipment: Option<&Shipment>) -> bool {
    match shipment {
        Some(s) => {
            s.ai_compliance_status == ComplianceStatus::Cleared
                && s.broker_review_status == ReviewStatus::Approved
                && s.status == ShipmentStatus::TokenGenerated
                && s.has_token()
                && s.booking_status != BookingStatus::Booked
        }
        None => false,
    }
}

/// All booking blockers for display, in fixed order.
///
/// Unlike [`cod_eligibility`] this does not short-circuit: every failing
/// condition contributes a reason. An eligible shipment yields an empty
/// list.
pub fn booking_blockers(shipment: Option<&Shipment>) -> Vec<String> {
    let Some(shipment) = shipment else {
        return vec!["Shipment not found".to_string()];
    };

    let mut reasons = Vec::new();
    if shipment.ai_compliance_status != ComplianceStatus::Cleared {
        reasons.push(format!(
            "AI compliance check: {}",
            shipment.ai_compliance_status
        ));
    }
    if shipment.broker_review_status != ReviewStatus::Approved {
        reasons.push(format!(
            "Broker review status: {}",
            shipment.broker_review_status
        ));
    }
    if shipment.status != ShipmentStatus::TokenGenerated {
        reasons.push(format!("Shipment status: {}", shipment.status));
    }
    if !shipment.has_token() {
        reasons.push("No pre-clearance token generated".to_string());
    }
    reasons
}

/// Whether the booking action should be disabled: already booked, or no
/// usable token.
pub fn booking_button_disabled(shipment: Option<&Shipment>) -> bool {
    match shipment {
        Some(s) => s.booking_status == BookingStatus::Booked || !s.has_token(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cod_ready() -> Shipment {
        Shipment {
            payment_timing: PaymentTiming::Cod,
            mode: TransportMode::Road,
            shipment_type: ShipmentType::Domestic,
            dangerous_goods: false,
            ..Shipment::default()
        }
    }

    #[test]
    fn test_cod_eligible() {
        let verdict = cod_eligibility(Some(&cod_ready()));
        assert!(verdict.eligible);
        assert_eq!(verdict.reason, "Eligible for COD");
    }

    #[test]
    fn test_cod_absent_shipment() {
        let verdict = cod_eligibility(None);
        assert!(!verdict.eligible);
        assert_eq!(verdict.reason, "Shipment not found");
    }

    #[test]
    fn test_cod_first_failure_wins() {
        // Both payment timing and mode disqualify; the chain reports the
        // payment timing first.
        let shipment = Shipment {
            payment_timing: PaymentTiming::Prepaid,
            mode: TransportMode::Air,
            ..cod_ready()
        };
        let verdict = cod_eligibility(Some(&shipment));
        assert!(!verdict.eligible);
        assert_eq!(verdict.reason, "Payment timing must be COD");
    }

    #[test]
    fn test_booking_button_disabled() {
        let mut shipment = Shipment {
            token: Some("TKN-1".into()),
            ..Shipment::default()
        };
        assert!(!booking_button_disabled(Some(&shipment)));

        shipment.booking_status = BookingStatus::Booked;
        assert!(booking_button_disabled(Some(&shipment)));

        shipment.booking_status = BookingStatus::Unbooked;
        shipment.token = None;
        assert!(booking_button_disabled(Some(&shipment)));

        assert!(booking_button_disabled(None));
    }
}
