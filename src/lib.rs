// Vehicle Valuation - Core Library
// Field validation, display formatting, and market-value estimation for
// the marketplace web layer. Pure computation; the only file the crate
// ever touches is an optional factor-table override.

pub mod estimator;
pub mod factors;
pub mod format;
pub mod validation;
pub mod vehicle;

// Re-export commonly used types
pub use estimator::{DepreciationResult, EstimationResult, PriceEstimator, PriceRange};
pub use factors::{FactorTable, NEUTRAL};
pub use format::{
    format_age, format_age_as_of, format_mileage, format_phone, format_price, DEFAULT_CURRENCY,
};
pub use validation::{
    validate_listing, validate_listing_as_of, validate_mileage, validate_phone, validate_price,
    validate_year, validate_year_as_of, CheckResult, FieldCheck, ListingReport,
};
pub use vehicle::{Category, Condition, FuelType, Transmission, VehicleAttributes};

use chrono::Datelike;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current calendar year from the local clock.
///
/// Every computation in this crate takes an explicit as-of year; this
/// default belongs at the outermost call only, so results stay
/// reproducible under test.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
