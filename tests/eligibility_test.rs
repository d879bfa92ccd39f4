//! Tests for eligibility rules - COD rule chain, booking gate, blockers

use pretty_assertions::assert_eq;
use quotegate::{
    booking_blockers, booking_button_disabled, booking_eligible, cod_eligibility, BookingStatus,
    ComplianceStatus, PaymentTiming, ReviewStatus, Shipment, ShipmentStatus, ShipmentType,
    TransportMode,
};

fn cod_ready() -> Shipment {
    Shipment {
        payment_timing: PaymentTiming::Cod,
        mode: TransportMode::Road,
        shipment_type: ShipmentType::Domestic,
        dangerous_goods: false,
        ..Shipment::default()
    }
}

fn bookable() -> Shipment {
    Shipment {
        id: "SHP-001".into(),
        token: Some("TKN-2024-001".into()),
        ai_compliance_status: ComplianceStatus::Cleared,
        broker_review_status: ReviewStatus::Approved,
        status: ShipmentStatus::TokenGenerated,
        booking_status: BookingStatus::Unbooked,
        ..Shipment::default()
    }
}

#[test]
fn test_cod_eligible_when_all_four_conditions_hold() {
    let verdict = cod_eligibility(Some(&cod_ready()));
    assert!(verdict.eligible);
    assert_eq!(verdict.reason, "Eligible for COD");
}

#[test]
fn test_cod_courier_mode_also_qualifies() {
    let shipment = Shipment {
        mode: TransportMode::Courier,
        ..cod_ready()
    };
    assert!(cod_eligibility(Some(&shipment)).eligible);
}

#[test]
fn test_cod_rejects_non_cod_payment_timing() {
    let shipment = Shipment {
        payment_timing: PaymentTiming::Prepaid,
        ..cod_ready()
    };
    let verdict = cod_eligibility(Some(&shipment));
    assert!(!verdict.eligible);
    assert_eq!(verdict.reason, "Payment timing must be COD");
}

#[test]
fn test_cod_rejects_air_and_sea_modes() {
    for mode in [TransportMode::Air, TransportMode::Sea, TransportMode::Rail] {
        let shipment = Shipment { mode, ..cod_ready() };
        let verdict = cod_eligibility(Some(&shipment));
        assert!(!verdict.eligible);
        assert_eq!(verdict.reason, "COD only available for Road/Courier modes");
    }
}

#[test]
fn test_cod_rejects_international_shipments() {
    let shipment = Shipment {
        shipment_type: ShipmentType::International,
        ..cod_ready()
    };
    let verdict = cod_eligibility(Some(&shipment));
    assert!(!verdict.eligible);
    assert_eq!(verdict.reason, "COD only available for domestic shipments");
}

#[test]
fn test_cod_rejects_dangerous_goods() {
    let shipment = Shipment {
        dangerous_goods: true,
        ..cod_ready()
    };
    let verdict = cod_eligibility(Some(&shipment));
    assert!(!verdict.eligible);
    assert_eq!(verdict.reason, "Dangerous goods not allowed with COD");
}

#[test]
fn test_cod_reports_first_failure_only() {
    // Every check fails; only the highest-priority reason surfaces.
    let shipment = Shipment {
        payment_timing: PaymentTiming::Postpaid,
        mode: TransportMode::Sea,
        shipment_type: ShipmentType::International,
        dangerous_goods: true,
        ..Shipment::default()
    };
    let verdict = cod_eligibility(Some(&shipment));
    assert_eq!(verdict.reason, "Payment timing must be COD");

    // Drop the timing violation; the mode reason surfaces next.
    let shipment = Shipment {
        payment_timing: PaymentTiming::Cod,
        ..shipment
    };
    let verdict = cod_eligibility(Some(&shipment));
    assert_eq!(verdict.reason, "COD only available for Road/Courier modes");

    // Then the shipment type.
    let shipment = Shipment {
        mode: TransportMode::Road,
        ..shipment
    };
    let verdict = cod_eligibility(Some(&shipment));
    assert_eq!(verdict.reason, "COD only available for domestic shipments");
}

#[test]
fn test_cod_absent_shipment() {
    let verdict = cod_eligibility(None);
    assert!(!verdict.eligible);
    assert_eq!(verdict.reason, "Shipment not found");
}

#[test]
fn test_booking_eligible_when_all_five_conditions_hold() {
    assert!(booking_eligible(Some(&bookable())));
}

#[test]
fn test_booking_requires_each_condition() {
    assert!(!booking_eligible(None));

    let shipment = Shipment {
        ai_compliance_status: ComplianceStatus::Pending,
        ..bookable()
    };
    assert!(!booking_eligible(Some(&shipment)));

    let shipment = Shipment {
        broker_review_status: ReviewStatus::Rejected,
        ..bookable()
    };
    assert!(!booking_eligible(Some(&shipment)));

    let shipment = Shipment {
        status: ShipmentStatus::UnderReview,
        ..bookable()
    };
    assert!(!booking_eligible(Some(&shipment)));

    let shipment = Shipment {
        token: None,
        ..bookable()
    };
    assert!(!booking_eligible(Some(&shipment)));

    let shipment = Shipment {
        booking_status: BookingStatus::Booked,
        ..bookable()
    };
    assert!(!booking_eligible(Some(&shipment)));
}

#[test]
fn test_empty_token_does_not_qualify() {
    let shipment = Shipment {
        token: Some(String::new()),
        ..bookable()
    };
    assert!(!booking_eligible(Some(&shipment)));
    assert!(booking_button_disabled(Some(&shipment)));
}

#[test]
fn test_blockers_list_every_failure_in_order() {
    let shipment = Shipment {
        token: None,
        ai_compliance_status: ComplianceStatus::Pending,
        broker_review_status: ReviewStatus::Pending,
        status: ShipmentStatus::UnderReview,
        ..Shipment::default()
    };
    assert_eq!(
        booking_blockers(Some(&shipment)),
        vec![
            "AI compliance check: pending".to_string(),
            "Broker review status: pending".to_string(),
            "Shipment status: under-review".to_string(),
            "No pre-clearance token generated".to_string(),
        ]
    );
}

#[test]
fn test_blockers_report_only_failing_conditions() {
    let shipment = Shipment {
        ai_compliance_status: ComplianceStatus::Rejected,
        ..bookable()
    };
    assert_eq!(
        booking_blockers(Some(&shipment)),
        vec!["AI compliance check: rejected".to_string()]
    );
}

#[test]
fn test_blockers_empty_for_eligible_shipment() {
    assert!(booking_blockers(Some(&bookable())).is_empty());
}

#[test]
fn test_blockers_for_absent_shipment() {
    assert_eq!(booking_blockers(None), vec!["Shipment not found".to_string()]);
}

#[test]
fn test_button_disabled_iff_booked_or_no_token() {
    assert!(!booking_button_disabled(Some(&bookable())));

    let shipment = Shipment {
        booking_status: BookingStatus::Booked,
        ..bookable()
    };
    assert!(booking_button_disabled(Some(&shipment)));

    let shipment = Shipment {
        token: None,
        ..bookable()
    };
    assert!(booking_button_disabled(Some(&shipment)));

    assert!(booking_button_disabled(None));
}
