// 📉 Price Estimator - staged depreciation + multi-factor market value
// Depreciation is bucketed and sequential: the year-1 bucket always burns
// first, then up to four years at the middle rate, then the remainder.
// That order is not algebraically equivalent to one blended rate.

use serde::{Deserialize, Serialize};

use crate::factors::FactorTable;
use crate::vehicle::VehicleAttributes;

/// Value lost in the first year
const YEAR_1_RATE: f64 = 0.20;

/// Value lost per year, years 2-5
const YEAR_2_5_RATE: f64 = 0.15;

/// Value lost per year after year 5
const YEAR_6_PLUS_RATE: f64 = 0.10;

// ============================================================================
// RESULTS
// ============================================================================

/// Age-based depreciation, before any adjustment factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationResult {
    pub age_years: i32,
    pub depreciated_value: f64,
    pub total_depreciation: f64,
    pub depreciation_percentage: f64,
}

/// Full market-value estimate with the per-factor breakdown.
///
/// Impact fields are percentage deviation from the neutral multiplier,
/// for display: `(factor - 1) × 100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub estimated_price: f64,
    pub original_price: f64,
    pub age_years: i32,
    pub base_depreciated_value: f64,
    pub category_impact: f64,
    pub fuel_impact: f64,
    pub transmission_impact: f64,
    pub condition_impact: f64,
    pub mileage_impact: f64,
    pub total_depreciation_percentage: f64,
}

/// Suggested listing spread: a fixed ±10% band around the estimate,
/// not a confidence interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min_price: f64,
    pub estimated_price: f64,
    pub max_price: f64,
}

// ============================================================================
// PRICE ESTIMATOR
// ============================================================================

/// Deterministic market-value estimator.
///
/// Every estimate is computed fresh from its inputs against a fixed
/// `as_of_year`; the wall clock is only read by [`PriceEstimator::new`].
/// The estimator never errors: unknown categorical keys price at the
/// neutral multiplier and a future purchase year clamps to age zero.
pub struct PriceEstimator {
    factors: FactorTable,
    as_of_year: i32,
}

impl PriceEstimator {
    /// Default factors, current calendar year.
    pub fn new() -> Self {
        Self::as_of(crate::current_year())
    }

    /// Default factors at a pinned year, for reproducible results.
    pub fn as_of(as_of_year: i32) -> Self {
        PriceEstimator {
            factors: FactorTable::default(),
            as_of_year,
        }
    }

    pub fn with_factors(factors: FactorTable, as_of_year: i32) -> Self {
        PriceEstimator {
            factors,
            as_of_year,
        }
    }

    pub fn as_of_year(&self) -> i32 {
        self.as_of_year
    }

    /// Age-based depreciation: 20% for year 1, then 15% per year for up to
    /// four more years, then 10% per year, each step compounding on the
    /// last. Rounding happens once, on the result fields.
    pub fn calculate_depreciation(
        &self,
        original_price: f64,
        purchase_year: i32,
    ) -> DepreciationResult {
        let age_years = (self.as_of_year - purchase_year).max(0);

        let mut value = original_price;
        let mut remaining = age_years;

        if remaining >= 1 {
            value *= 1.0 - YEAR_1_RATE;
            remaining -= 1;
        }

        let middle_years = remaining.min(4);
        for _ in 0..middle_years {
            value *= 1.0 - YEAR_2_5_RATE;
        }
        remaining -= middle_years;

        for _ in 0..remaining {
            value *= 1.0 - YEAR_6_PLUS_RATE;
        }

        DepreciationResult {
            age_years,
            depreciated_value: round2(value),
            total_depreciation: round2(original_price - value),
            depreciation_percentage: round2((original_price - value) / original_price * 100.0),
        }
    }

    /// Market-value estimate: depreciated base times the five adjustment
    /// factors. The mileage impact reported here is the clamped factor, so
    /// the breakdown always matches the price actually produced.
    #[allow(clippy::too_many_arguments)]
    pub fn estimate_price(
        &self,
        original_price: f64,
        purchase_year: i32,
        category: &str,
        fuel_type: &str,
        transmission: &str,
        mileage_km: i64,
        condition: &str,
    ) -> EstimationResult {
        let depreciation = self.calculate_depreciation(original_price, purchase_year);
        let base_value = depreciation.depreciated_value;

        let category_factor = self.factors.category_factor(category);
        let fuel_factor = self.factors.fuel_factor(fuel_type);
        let transmission_factor = self.factors.transmission_factor(transmission);
        let condition_factor = self.factors.condition_factor(condition);
        let mileage_factor = self.factors.mileage_factor(mileage_km);

        let estimated_price = round2(
            base_value
                * category_factor
                * fuel_factor
                * transmission_factor
                * condition_factor
                * mileage_factor,
        );

        EstimationResult {
            estimated_price,
            original_price,
            age_years: depreciation.age_years,
            base_depreciated_value: base_value,
            category_impact: impact(category_factor),
            fuel_impact: impact(fuel_factor),
            transmission_impact: impact(transmission_factor),
            condition_impact: impact(condition_factor),
            mileage_impact: impact(mileage_factor),
            total_depreciation_percentage: round2(
                (original_price - estimated_price) / original_price * 100.0,
            ),
        }
    }

    /// [`PriceEstimator::estimate_price`] from a [`VehicleAttributes`].
    pub fn estimate(&self, vehicle: &VehicleAttributes) -> EstimationResult {
        self.estimate_price(
            vehicle.original_price,
            vehicle.purchase_year,
            &vehicle.category,
            &vehicle.fuel_type,
            &vehicle.transmission,
            vehicle.mileage_km,
            &vehicle.condition,
        )
    }

    /// Suggested listing spread around an estimate.
    pub fn price_range(&self, estimated_price: f64) -> PriceRange {
        PriceRange {
            min_price: round2(estimated_price * 0.90),
            estimated_price,
            max_price: round2(estimated_price * 1.10),
        }
    }
}

impl Default for PriceEstimator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Percentage deviation from the neutral multiplier, for the breakdown.
fn impact(factor: f64) -> f64 {
    round2((factor - 1.0) * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// TESTS
// ============================================================================
