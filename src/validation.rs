// ✅ Field Validation - pass/fail checks for listing form input
// A parse failure and an out-of-range value report the same way: a failed
// check with a human-readable message. Nothing here returns Err or panics,
// so the form layer can surface per-field errors without exception flow.

use serde::{Deserialize, Serialize};

// ============================================================================
// CHECK RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub passed: bool,
    pub message: String,
}

impl CheckResult {
    pub fn pass() -> Self {
        CheckResult {
            passed: true,
            message: "Valid".to_string(),
        }
    }

    pub fn fail(message: &str) -> Self {
        CheckResult {
            passed: false,
            message: message.to_string(),
        }
    }
}

// ============================================================================
// FIELD CHECKS
// ============================================================================

/// Manufacturing year: integer, 1900 through next year.
pub fn validate_year_as_of(raw: &str, as_of_year: i32) -> CheckResult {
    let year = match raw.trim().parse::<i32>() {
        Ok(year) => year,
        Err(_) => return CheckResult::fail("Year must be a number"),
    };

    if year < 1900 || year > as_of_year + 1 {
        return CheckResult::fail("Invalid year");
    }

    CheckResult::pass()
}

/// [`validate_year_as_of`] against the current calendar year.
pub fn validate_year(raw: &str) -> CheckResult {
    validate_year_as_of(raw, crate::current_year())
}

/// Price: positive number, capped at 10,000,000.
pub fn validate_price(raw: &str) -> CheckResult {
    let price = match raw.trim().parse::<f64>() {
        Ok(price) => price,
        Err(_) => return CheckResult::fail("Invalid price"),
    };

    if price <= 0.0 {
        return CheckResult::fail("Price must be positive");
    }
    if price > 10_000_000.0 {
        return CheckResult::fail("Price too high");
    }

    CheckResult::pass()
}

/// Mileage in kilometers: non-negative integer, capped at 1,000,000.
pub fn validate_mileage(raw: &str) -> CheckResult {
    let mileage = match raw.trim().parse::<i64>() {
        Ok(mileage) => mileage,
        Err(_) => return CheckResult::fail("Invalid mileage"),
    };

    if mileage < 0 {
        return CheckResult::fail("Mileage cannot be negative");
    }
    if mileage > 1_000_000 {
        return CheckResult::fail("Mileage unrealistic");
    }

    CheckResult::pass()
}

/// Phone: 10-15 digits once separators are stripped. No country-code or
/// format rules beyond the digit count.
pub fn validate_phone(raw: &str) -> CheckResult {
    let digit_count = raw.chars().filter(|c| c.is_ascii_digit()).count();

    if !(10..=15).contains(&digit_count) {
        return CheckResult::fail("Phone must be 10-15 digits");
    }

    CheckResult::pass()
}

// ============================================================================
// LISTING REPORT
// ============================================================================

/// One named field check inside a [`ListingReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldCheck {
    pub field: String,
    pub result: CheckResult,
}

/// All four listing field checks in one pass, the way the listing form
/// runs them before persisting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingReport {
    pub checks: Vec<FieldCheck>,
    pub passed: bool,
}

impl ListingReport {
    /// Failed checks only, for rendering per-field errors.
    pub fn failures(&self) -> Vec<&FieldCheck> {
        self.checks.iter().filter(|c| !c.result.passed).collect()
    }
}

pub fn validate_listing_as_of(
    year: &str,
    price: &str,
    mileage: &str,
    phone: &str,
    as_of_year: i32,
) -> ListingReport {
    let checks = vec![
        FieldCheck {
            field: "year".to_string(),
            result: validate_year_as_of(year, as_of_year),
        },
        FieldCheck {
            field: "price".to_string(),
            result: validate_price(price),
        },
        FieldCheck {
            field: "mileage".to_string(),
            result: validate_mileage(mileage),
        },
        FieldCheck {
            field: "phone".to_string(),
            result: validate_phone(phone),
        },
    ];

    let passed = checks.iter().all(|c| c.result.passed);
    ListingReport { checks, passed }
}

pub fn validate_listing(year: &str, price: &str, mileage: &str, phone: &str) -> ListingReport {
    validate_listing_as_of(year, price, mileage, phone, crate::current_year())
}

// ============================================================================
// TESTS
// ============================================================================
