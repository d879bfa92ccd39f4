//! Payment context assembly and routing
//!
//! Once a shipment passes the booking gate, the screen hands the payment
//! flow an immutable context record and a route name. The routing branch
//! is a named predicate over two fields, never inlined at the call site.

use crate::catalog::Catalog;
use crate::eligibility::{booking_blockers, booking_eligible, cod_eligibility, Verdict};
use crate::error::{Error, Result};
use crate::pricing::{PriceBreakdown, PricingCalculator};
use crate::shipment::{
    BillTo, PaymentStatus, PaymentTiming, Shipment, ShipmentType, TransportMode,
};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The user's carrier and delivery-speed selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingSelection {
    /// Selected carrier id
    pub carrier: String,
    /// Selected delivery-speed id
    pub delivery_speed: String,
}

impl Default for BookingSelection {
    /// The screen's initial form state
    fn default() -> Self {
        Self {
            carrier: "ups".into(),
            delivery_speed: "standard".into(),
        }
    }
}

/// Which payment flow the navigation collaborator should route to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentRoute {
    /// Direct payment flow
    Payment,
    /// Request payment from the consignee
    RequestPayment,
}

impl PaymentRoute {
    /// Route name as the navigation collaborator expects it
    pub fn route_name(&self) -> &'static str {
        match self {
            PaymentRoute::Payment => "payment",
            PaymentRoute::RequestPayment => "request-payment",
        }
    }

    /// Pick the route for a shipment
    pub fn for_shipment(shipment: &Shipment) -> Self {
        if requires_consignee_payment_request(shipment.bill_to, shipment.payment_timing) {
            PaymentRoute::RequestPayment
        } else {
            PaymentRoute::Payment
        }
    }
}

/// Whether payment must be requested from the consignee: billed to the
/// consignee and not collected on delivery.
pub fn requires_consignee_payment_request(bill_to: BillTo, payment_timing: PaymentTiming) -> bool {
    bill_to == BillTo::Consignee && payment_timing != PaymentTiming::Cod
}

/// Immutable record handed to the payment flow
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentContext {
    pub mode: TransportMode,
    pub shipment_type: ShipmentType,
    pub bill_to: BillTo,
    pub payment_timing: PaymentTiming,
    pub payment_status: PaymentStatus,
    pub service_level: String,
    pub declared_value: f64,
    /// Outcome of the COD eligibility check
    pub cod_allowed: bool,
    pub selected_carrier: String,
    pub selected_delivery_speed: String,
    /// The full quote shown to the user
    pub pricing: PriceBreakdown,
    /// When this context was assembled
    pub created_at: DateTime<Utc>,
}

/// Assemble the payment context for a shipment.
///
/// Fails with `MissingShipment` when no shipment is supplied; an output
/// record is required here, so absence cannot be folded into a verdict.
pub fn build_payment_context(
    shipment: Option<&Shipment>,
    selection: &BookingSelection,
    pricing: PriceBreakdown,
    cod_verdict: &Verdict,
) -> Result<PaymentContext> {
    let shipment = shipment.ok_or(Error::MissingShipment)?;

    Ok(PaymentContext {
        mode: shipment.mode,
        shipment_type: shipment.shipment_type,
        bill_to: shipment.bill_to,
        payment_timing: shipment.payment_timing,
        payment_status: shipment.payment_status,
        service_level: shipment.service_level.clone(),
        declared_value: shipment.declared_value,
        cod_allowed: cod_verdict.eligible,
        selected_carrier: selection.carrier.clone(),
        selected_delivery_speed: selection.delivery_speed.clone(),
        pricing,
        created_at: Utc::now(),
    })
}

/// The assembled context plus the route to hand the navigation
/// collaborator
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDecision {
    pub context: PaymentContext,
    pub route: PaymentRoute,
}

/// Run the full booking flow: gate on eligibility, quote, evaluate COD,
/// assemble the context, and pick the payment route.
///
/// An ineligible shipment fails with `NotBookable` carrying the blocker
/// list instead of silently returning.
pub fn prepare_booking(
    shipment: Option<&Shipment>,
    selection: &BookingSelection,
    calculator: &PricingCalculator,
) -> Result<BookingDecision> {
    let shipment = shipment.ok_or(Error::MissingShipment)?;

    if !booking_eligible(Some(shipment)) {
        let mut reasons = booking_blockers(Some(shipment));
        if reasons.is_empty() {
            // The only condition outside the blocker list is an existing
            // booking.
            reasons.push("Shipment already booked".to_string());
        }
        debug!(shipment = %shipment.id, ?reasons, "booking refused");
        return Err(Error::NotBookable { reasons });
    }

    let pricing = calculator.compute(&selection.carrier, &selection.delivery_speed, shipment)?;
    let cod_verdict = cod_eligibility(Some(shipment));
    let context = build_payment_context(Some(shipment), selection, pricing, &cod_verdict)?;
    let route = PaymentRoute::for_shipment(shipment);

    debug!(
        shipment = %shipment.id,
        route = route.route_name(),
        total = context.pricing.total,
        cod_allowed = context.cod_allowed,
        "booking prepared"
    );

    Ok(BookingDecision { context, route })
}

/// Convenience form of [`prepare_booking`] over the built-in catalog
pub fn prepare_booking_with_defaults(
    shipment: Option<&Shipment>,
    selection: &BookingSelection,
) -> Result<BookingDecision> {
    prepare_booking(shipment, selection, &PricingCalculator::new(Catalog::builtin()))
}
