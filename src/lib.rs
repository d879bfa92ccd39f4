// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # Quotegate — freight booking rules engine
//!
//! Pricing quotes, COD/booking eligibility, and payment routing for a
//! freight-shipment booking flow.
//!
//! ## Core Concept
//!
//! Quotegate treats the booking screen's decision logic as a set of
//! **pure functions** over a shipment record plus user selections. The
//! presentation layer supplies the record, calls back in on every
//! selection change, and consumes:
//!
//! - a **price breakdown** — base price, delivery charge, customs fee,
//!   conditional insurance, subtotal, GST, total
//! - **eligibility verdicts** — COD eligibility with a first-failure
//!   reason, a booking gate, and an all-failures blocker list for display
//! - a **payment context** and **route** for the navigation collaborator
//!
//! Everything is synchronous, side-effect-free, and cheap enough to
//! recompute on every input change. Outputs are recomputed whole from
//! their inputs, never incrementally patched.
//!
//! ## Quick Start
//!
//! ```rust
//! use quotegate::{cod_eligibility, compute_price, PaymentTiming, Shipment};
//!
//! let shipment = Shipment {
//!     payment_timing: PaymentTiming::Cod,
//!     ..Shipment::default()
//! };
//!
//! // ups base 2400, standard multiplier 1.0, no insurance:
//! // subtotal 5250, GST 945, total 6195
//! let quote = compute_price("ups", "standard", &shipment)?;
//! assert_eq!(quote.rounded().total, 6195.0);
//!
//! let verdict = cod_eligibility(Some(&shipment));
//! assert!(verdict.eligible);
//! assert_eq!(verdict.reason, "Eligible for COD");
//! # Ok::<(), quotegate::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                             │
//! │  SHIPMENT + SELECTION                                       │
//! │       │                                                     │
//! │       ├──► compute_price(...) ──────► PriceBreakdown        │
//! │       │                                                     │
//! │       ├──► cod_eligibility(...) ────► Verdict               │
//! │       │                                                     │
//! │       ├──► booking_eligible(...) ───► bool                  │
//! │       │    booking_blockers(...) ───► Vec<String>           │
//! │       │                                                     │
//! │       └──► prepare_booking(...) ────► BookingDecision       │
//! │                                        (context + route)    │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catalogs
//!
//! The carrier and delivery-speed tables are immutable configuration:
//! [`Catalog::builtin`] ships the reference data, or load your own once
//! at startup with [`Catalog::from_yaml`] / [`Catalog::from_json`].
//! Unknown selection ids always fail explicitly with
//! [`Error::UnknownCarrier`] / [`Error::UnknownDeliveryOption`].

// Core modules
pub mod catalog;
pub mod eligibility;
pub mod error;
pub mod payment;
pub mod pricing;
pub mod shipment;

// Re-exports
pub use catalog::{Carrier, Catalog, DeliveryOption, TransitDays};
pub use eligibility::{
    booking_blockers, booking_button_disabled, booking_eligible, cod_eligibility, Verdict,
};
pub use error::{Error, Result};
pub use payment::{
    build_payment_context, prepare_booking, prepare_booking_with_defaults,
    requires_consignee_payment_request, BookingDecision, BookingSelection, PaymentContext,
    PaymentRoute,
};
pub use pricing::{
    compute_price, FeeSchedule, PriceBreakdown, PricingCalculator, CUSTOMS_CLEARANCE_FEE,
    GST_RATE, INSURANCE_FEE,
};
pub use shipment::{
    BillTo, BookingStatus, ComplianceStatus, Incoterm, PaymentStatus, PaymentTiming, ReviewStatus,
    RiskLevel, Shipment, ShipmentStatus, ShipmentType, SpecialFlag, TransportMode,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
