//! Carrier and delivery-option catalogs
//!
//! The two static tables behind the booking screen, modeled as immutable
//! configuration: built-in reference data, or loaded once at startup from
//! YAML/JSON and validated. Lookups fail explicitly on unknown ids instead
//! of silently skipping recomputation.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::str::FromStr;

/// Nominal transit-time range in business days.
///
/// Serializes in the catalog's `"4-7"` string form; a `{min, max}` map is
/// also accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitDays {
    pub min: u32,
    pub max: u32,
}

impl TransitDays {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl std::fmt::Display for TransitDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for TransitDays {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (min, max) = s
            .split_once('-')
            .ok_or_else(|| format!("invalid transit range '{}', expected 'min-max'", s))?;
        let min = min
            .trim()
            .parse()
            .map_err(|e| format!("invalid transit range '{}': {}", s, e))?;
        let max = max
            .trim()
            .parse()
            .map_err(|e| format!("invalid transit range '{}': {}", s, e))?;
        Ok(Self { min, max })
    }
}

impl Serialize for TransitDays {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TransitDays {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Range { min: u32, max: u32 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::Range { min, max } => Ok(TransitDays { min, max }),
        }
    }
}

/// A carrier catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    /// Selection id (e.g. "ups")
    pub id: String,

    /// Display name
    pub name: String,

    /// Base price in whole currency units
    pub base_price: u32,

    /// Nominal transit-time range
    #[serde(rename = "estimatedDays")]
    #[schemars(with = "String")]
    pub transit_days: TransitDays,
}

/// A delivery-speed catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOption {
    /// Selection id (e.g. "standard")
    pub id: String,

    /// Display name
    pub name: String,

    /// Multiplier applied to the carrier base price
    pub multiplier: f64,

    /// Nominal transit-time range
    #[serde(rename = "days")]
    #[schemars(with = "String")]
    pub transit_days: TransitDays,
}

impl DeliveryOption {
    /// Signed percent delta relative to standard speed (+50 for 1.5x,
    /// -20 for 0.8x, 0 for 1.0x)
    pub fn surcharge_percent(&self) -> i32 {
        ((self.multiplier - 1.0) * 100.0).round() as i32
    }
}

/// The carrier and delivery-option tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub carriers: Vec<Carrier>,
    pub delivery_options: Vec<DeliveryOption>,
}

impl Catalog {
    /// The built-in reference catalog
    pub fn builtin() -> Self {
        Self {
            carriers: vec![
                Carrier {
                    id: "ups".into(),
                    name: "UPS Worldwide".into(),
                    base_price: 2400,
                    transit_days: TransitDays::new(4, 7),
                },
                Carrier {
                    id: "dhl".into(),
                    name: "DHL Express".into(),
                    base_price: 2500,
                    transit_days: TransitDays::new(3, 5),
                },
                Carrier {
                    id: "fedex".into(),
                    name: "FedEx International".into(),
                    base_price: 2300,
                    transit_days: TransitDays::new(4, 6),
                },
                Carrier {
                    id: "bluedart".into(),
                    name: "Blue Dart".into(),
                    base_price: 1800,
                    transit_days: TransitDays::new(5, 8),
                },
            ],
            delivery_options: vec![
                DeliveryOption {
                    id: "express".into(),
                    name: "Express Delivery".into(),
                    multiplier: 1.5,
                    transit_days: TransitDays::new(3, 5),
                },
                DeliveryOption {
                    id: "standard".into(),
                    name: "Standard Delivery".into(),
                    multiplier: 1.0,
                    transit_days: TransitDays::new(5, 8),
                },
                DeliveryOption {
                    id: "economy".into(),
                    name: "Economy Delivery".into(),
                    multiplier: 0.8,
                    transit_days: TransitDays::new(8, 12),
                },
            ],
        }
    }

    /// Load a catalog from YAML and validate it
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let catalog: Catalog = serde_norway::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Look up a carrier by selection id
    pub fn carrier(&self, id: &str) -> Result<&Carrier> {
        self.carriers
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::UnknownCarrier(id.to_string()))
    }

    /// Look up a delivery option by selection id
    pub fn delivery_option(&self, id: &str) -> Result<&DeliveryOption> {
        self.delivery_options
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| Error::UnknownDeliveryOption(id.to_string()))
    }

    /// Validate table invariants: non-empty tables, unique ids, positive
    /// prices and multipliers
    pub fn validate(&self) -> Result<()> {
        if self.carriers.is_empty() {
            return Err(Error::InvalidCatalog("no carriers defined".into()));
        }
        if self.delivery_options.is_empty() {
            return Err(Error::InvalidCatalog("no delivery options defined".into()));
        }

        let mut seen = HashSet::new();
        for carrier in &self.carriers {
            if !seen.insert(carrier.id.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate carrier id '{}'",
                    carrier.id
                )));
            }
            if carrier.base_price == 0 {
                return Err(Error::InvalidCatalog(format!(
                    "carrier '{}' has zero base price",
                    carrier.id
                )));
            }
        }

        let mut seen = HashSet::new();
        for option in &self.delivery_options {
            if !seen.insert(option.id.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate delivery option id '{}'",
                    option.id
                )));
            }
            if !option.multiplier.is_finite() || option.multiplier <= 0.0 {
                return Err(Error::InvalidCatalog(format!(
                    "delivery option '{}' has non-positive multiplier",
                    option.id
                )));
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.carriers.len(), 4);
        assert_eq!(catalog.delivery_options.len(), 3);
    }

    #[test]
    fn test_transit_days_parse_and_display() {
        let days: TransitDays = "4-7".parse().unwrap();
        assert_eq!(days, TransitDays::new(4, 7));
        assert_eq!(days.to_string(), "4-7");

        assert!("4".parse::<TransitDays>().is_err());
        assert!("a-b".parse::<TransitDays>().is_err());
    }

    #[test]
    fn test_transit_days_serde_forms() {
        let from_text: TransitDays = serde_json::from_str(r#""8-12""#).unwrap();
        assert_eq!(from_text, TransitDays::new(8, 12));

        let from_map: TransitDays = serde_json::from_str(r#"{"min": 8, "max": 12}"#).unwrap();
        assert_eq!(from_map, TransitDays::new(8, 12));

        assert_eq!(serde_json::to_string(&from_text).unwrap(), r#""8-12""#);
    }

    #[test]
    fn test_surcharge_percent() {
        let catalog = Catalog::builtin();
        let percents: Vec<i32> = catalog
            .delivery_options
            .iter()
            .map(DeliveryOption::surcharge_percent)
            .collect();
        assert_eq!(percents, vec![50, 0, -20]);
    }

    #[test]
    fn test_unknown_lookups_fail_explicitly() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            catalog.carrier("acme"),
            Err(crate::Error::UnknownCarrier(id)) if id == "acme"
        ));
        assert!(matches!(
            catalog.delivery_option("teleport"),
            Err(crate::Error::UnknownDeliveryOption(id)) if id == "teleport"
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.carriers.push(catalog.carriers[0].clone());
        assert!(matches!(catalog.validate(), Err(crate::Error::InvalidCatalog(_))));
    }
}
