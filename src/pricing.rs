//! Price quoting — carrier + delivery speed + shipment flags → breakdown
//!
//! The breakdown is recomputed whole from its four inputs on every
//! selection change, never incrementally patched, so displayed totals
//! cannot drift. All intermediate amounts stay in floating point; rounding
//! happens only at presentation via [`PriceBreakdown::rounded`].

use crate::catalog::Catalog;
use crate::error::Result;
use crate::shipment::Shipment;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Flat customs clearance fee, in whole currency units
pub const CUSTOMS_CLEARANCE_FEE: f64 = 450.0;

/// Flat insurance fee, applied only when the shipment requires insurance
pub const INSURANCE_FEE: f64 = 200.0;

/// Goods and Services Tax rate, applied to the subtotal
pub const GST_RATE: f64 = 0.18;

/// Compute a quote against the built-in catalog and fee schedule
pub fn compute_price(
    carrier_id: &str,
    delivery_speed_id: &str,
    shipment: &Shipment,
) -> Result<PriceBreakdown> {
    PricingCalculator::new(Catalog::builtin()).compute(carrier_id, delivery_speed_id, shipment)
}

/// Price quote calculator
pub struct PricingCalculator {
    catalog: Catalog,
    fees: FeeSchedule,
}

/// Fixed fees and tax rate applied to every quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeeSchedule {
    /// Flat customs clearance fee
    pub customs_clearance: f64,
    /// Flat insurance fee
    pub insurance: f64,
    /// Tax rate applied to the subtotal
    pub gst_rate: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            customs_clearance: CUSTOMS_CLEARANCE_FEE,
            insurance: INSURANCE_FEE,
            gst_rate: GST_RATE,
        }
    }
}

/// An itemized price quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Carrier base price
    pub base_price: f64,
    /// Base price scaled by the delivery-speed multiplier
    pub delivery_charge: f64,
    /// Flat customs clearance fee
    pub customs_clearance: f64,
    /// Insurance fee, 0 when the shipment does not require insurance
    pub insurance: f64,
    /// Sum of the four line items above
    pub subtotal: f64,
    /// Tax on the subtotal
    pub gst: f64,
    /// Subtotal plus tax
    pub total: f64,
}

impl PriceBreakdown {
    /// Presentation copy with every amount rounded to 2 decimal places.
    ///
    /// Rounding never happens before summation; use this only for display.
    pub fn rounded(&self) -> Self {
        Self {
            base_price: round2(self.base_price),
            delivery_charge: round2(self.delivery_charge),
            customs_clearance: round2(self.customs_clearance),
            insurance: round2(self.insurance),
            subtotal: round2(self.subtotal),
            gst: round2(self.gst),
            total: round2(self.total),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl PricingCalculator {
    /// Calculator over a catalog with the reference fee schedule
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            fees: FeeSchedule::default(),
        }
    }

    /// Calculator with a custom fee schedule
    pub fn with_fees(catalog: Catalog, fees: FeeSchedule) -> Self {
        Self { catalog, fees }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    /// Compute the quote for a carrier/delivery-speed selection.
    ///
    /// Unknown selection ids fail with `UnknownCarrier` /
    /// `UnknownDeliveryOption`. Pure and idempotent: identical inputs
    /// produce bit-identical output.
    pub fn compute(
        &self,
        carrier_id: &str,
        delivery_speed_id: &str,
        shipment: &Shipment,
    ) -> Result<PriceBreakdown> {
        let carrier = self.catalog.carrier(carrier_id)?;
        let delivery = self.catalog.delivery_option(delivery_speed_id)?;

        let base_price = f64::from(carrier.base_price);
        let delivery_charge = base_price * delivery.multiplier;
        let insurance = if shipment.insurance_required {
            self.fees.insurance
        } else {
            0.0
        };
        let subtotal = base_price + delivery_charge + self.fees.customs_clearance + insurance;
        let gst = subtotal * self.fees.gst_rate;
        let total = subtotal + gst;

        debug!(
            carrier = carrier_id,
            delivery_speed = delivery_speed_id,
            insured = shipment.insurance_required,
            total,
            "computed price quote"
        );

        Ok(PriceBreakdown {
            base_price,
            delivery_charge,
            customs_clearance: self.fees.customs_clearance,
            insurance,
            subtotal,
            gst,
            total,
        })
    }
}
