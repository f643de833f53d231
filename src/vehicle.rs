// 🚗 Vehicle Attributes - Input shapes for the valuation core
// Categorical fields stay open strings: an unknown category must estimate
// at the neutral multiplier, not fail the call.

use serde::{Deserialize, Serialize};

// ============================================================================
// CHOICE ENUMS
// ============================================================================

/// Body style offered by the listing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Sedan,
    Suv,
    Hatchback,
    Truck,
    Coupe,
    Van,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Sedan,
        Category::Suv,
        Category::Hatchback,
        Category::Truck,
        Category::Coupe,
        Category::Van,
    ];

    /// Stable key used in stored data and factor tables
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sedan => "sedan",
            Category::Suv => "suv",
            Category::Hatchback => "hatchback",
            Category::Truck => "truck",
            Category::Coupe => "coupe",
            Category::Van => "van",
        }
    }

    /// Human-readable label for selects and detail pages
    pub fn label(&self) -> &'static str {
        match self {
            Category::Sedan => "Sedan",
            Category::Suv => "SUV",
            Category::Hatchback => "Hatchback",
            Category::Truck => "Truck",
            Category::Coupe => "Coupe",
            Category::Van => "Van",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }

    pub fn from_key(key: &str) -> Option<FuelType> {
        FuelType::ALL.iter().copied().find(|f| f.as_str() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub const ALL: [Transmission; 2] = [Transmission::Manual, Transmission::Automatic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Manual => "manual",
            Transmission::Automatic => "automatic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        }
    }

    pub fn from_key(key: &str) -> Option<Transmission> {
        Transmission::ALL.iter().copied().find(|t| t.as_str() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }

    pub fn from_key(key: &str) -> Option<Condition> {
        Condition::ALL.iter().copied().find(|c| c.as_str() == key)
    }
}

// ============================================================================
// VEHICLE ATTRIBUTES
// ============================================================================

/// Everything the estimator needs to know about one vehicle.
///
/// Values arrive from the listing form already validated; the categorical
/// fields are the stable keys (`"sedan"`, `"petrol"`, ...), but any other
/// string is accepted and priced at the neutral multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleAttributes {
    /// Original purchase price
    pub original_price: f64,

    /// Year the vehicle was purchased
    pub purchase_year: i32,

    /// Body style key (see [`Category`])
    pub category: String,

    /// Fuel type key (see [`FuelType`])
    pub fuel_type: String,

    /// Transmission key (see [`Transmission`])
    pub transmission: String,

    /// Odometer reading in kilometers
    pub mileage_km: i64,

    /// Condition key (see [`Condition`])
    pub condition: String,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_key("spaceship"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Suv.label(), "SUV");
        assert_eq!(FuelType::Petrol.label(), "Petrol");
        assert_eq!(Transmission::Automatic.label(), "Automatic");
        assert_eq!(Condition::Poor.label(), "Poor");
    }

    #[test]
    fn test_choice_counts() {
        assert_eq!(Category::ALL.len(), 6);
        assert_eq!(FuelType::ALL.len(), 4);
        assert_eq!(Transmission::ALL.len(), 2);
        assert_eq!(Condition::ALL.len(), 4);
    }

    #[test]
    fn test_from_key_is_exact() {
        // Keys are the stored lowercase form; display labels don't resolve
        assert_eq!(Category::from_key("SUV"), None);
        assert_eq!(FuelType::from_key("Petrol"), None);
    }
}
