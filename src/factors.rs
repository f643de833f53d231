// 🏷️ Pricing Factors - multiplier tables as data
// Every lookup degrades to the neutral 1.0 for a key the table does not
// know, so the web layer can ship a new category before this table does.

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Multiplier applied for any key the tables do not know.
pub const NEUTRAL: f64 = 1.0;

// ============================================================================
// FACTOR TABLE
// ============================================================================

/// The adjustment knobs of the price estimator.
///
/// Built-in defaults cover the marketplace's standard categories; a JSON
/// file can override any subset of fields, and fields left out of the file
/// keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorTable {
    /// Body-style multipliers
    pub category: HashMap<String, f64>,

    /// Fuel-type multipliers
    pub fuel: HashMap<String, f64>,

    /// Transmission multipliers
    pub transmission: HashMap<String, f64>,

    /// Condition multipliers
    pub condition: HashMap<String, f64>,

    /// Share of value lost per 10,000 km driven
    pub mileage_rate: f64,

    /// Hard lower bound for the mileage multiplier
    pub mileage_floor: f64,
}

impl Default for FactorTable {
    fn default() -> Self {
        FactorTable {
            category: table(&[
                ("sedan", 1.0),
                ("suv", 1.15),
                ("hatchback", 0.95),
                ("truck", 1.10),
                ("coupe", 0.90),
                ("van", 0.95),
            ]),
            fuel: table(&[
                ("petrol", 1.0),
                ("diesel", 1.05),
                ("electric", 1.20),
                ("hybrid", 1.10),
            ]),
            transmission: table(&[("manual", 0.95), ("automatic", 1.05)]),
            condition: table(&[
                ("excellent", 1.10),
                ("good", 1.0),
                ("fair", 0.85),
                ("poor", 0.70),
            ]),
            mileage_rate: 0.02,
            mileage_floor: 0.5,
        }
    }
}

impl FactorTable {
    /// Load a factor override file (JSON). Missing fields keep defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read factor file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content).context("Failed to parse factor JSON")
    }

    pub fn category_factor(&self, key: &str) -> f64 {
        lookup(&self.category, key)
    }

    pub fn fuel_factor(&self, key: &str) -> f64 {
        lookup(&self.fuel, key)
    }

    pub fn transmission_factor(&self, key: &str) -> f64 {
        lookup(&self.transmission, key)
    }

    pub fn condition_factor(&self, key: &str) -> f64 {
        lookup(&self.condition, key)
    }

    /// Mileage multiplier: loses `mileage_rate` per 10,000 km, clamped to
    /// `mileage_floor` so extreme odometers cannot zero out a price.
    pub fn mileage_factor(&self, mileage_km: i64) -> f64 {
        let units = mileage_km as f64 / 10_000.0;
        (1.0 - units * self.mileage_rate).max(self.mileage_floor)
    }
}

fn lookup(entries: &HashMap<String, f64>, key: &str) -> f64 {
    entries.get(key).copied().unwrap_or(NEUTRAL)
}

fn table(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries
        .iter()
        .map(|(key, factor)| (key.to_string(), *factor))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_factors() {
        let factors = FactorTable::default();

        assert_eq!(factors.category_factor("sedan"), 1.0);
        assert_eq!(factors.category_factor("suv"), 1.15);
        assert_eq!(factors.category_factor("coupe"), 0.90);
        assert_eq!(factors.fuel_factor("electric"), 1.20);
        assert_eq!(factors.transmission_factor("manual"), 0.95);
        assert_eq!(factors.condition_factor("poor"), 0.70);
    }

    #[test]
    fn test_unknown_key_is_neutral() {
        let factors = FactorTable::default();

        assert_eq!(factors.category_factor("hovercraft"), NEUTRAL);
        assert_eq!(factors.fuel_factor("steam"), NEUTRAL);
        assert_eq!(factors.transmission_factor("cvt"), NEUTRAL);
        assert_eq!(factors.condition_factor("mint"), NEUTRAL);
        // Keys are exact: a label is not a key
        assert_eq!(factors.category_factor("SUV"), NEUTRAL);
    }

    #[test]
    fn test_mileage_factor() {
        let factors = FactorTable::default();

        assert_eq!(factors.mileage_factor(0), 1.0);
        assert_eq!(factors.mileage_factor(10_000), 0.98);
        assert_eq!(factors.mileage_factor(100_000), 0.8);
    }

    #[test]
    fn test_mileage_factor_floor() {
        let factors = FactorTable::default();

        // 250,000 km hits the floor exactly; beyond it nothing changes
        assert_eq!(factors.mileage_factor(250_000), 0.5);
        assert_eq!(factors.mileage_factor(1_000_000), 0.5);
        assert_eq!(factors.mileage_factor(10_000_000), 0.5);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let factors: FactorTable =
            serde_json::from_str(r#"{"mileage_floor": 0.6, "category": {"sedan": 1.02}}"#)
                .unwrap();

        assert_eq!(factors.mileage_floor, 0.6);
        assert_eq!(factors.category_factor("sedan"), 1.02);
        // A replaced map replaces whole: suv is now unknown -> neutral
        assert_eq!(factors.category_factor("suv"), NEUTRAL);
        // Untouched fields keep their defaults
        assert_eq!(factors.fuel_factor("electric"), 1.20);
        assert_eq!(factors.mileage_rate, 0.02);
    }

    #[test]
    fn test_from_file_missing_path() {
        let result = FactorTable::from_file("/nonexistent/factors.json");
        assert!(result.is_err());
    }
}
