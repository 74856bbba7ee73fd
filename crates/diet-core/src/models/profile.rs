// ABOUTME: User profile model submitted with diet plan requests
// ABOUTME: Carries physical data, goal, regional preferences, and allergies with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::limits;
use crate::errors::AppError;

fn default_cuisine() -> String {
    "Vegetarian".to_owned()
}

/// Profile of the person a plan is generated for
///
/// Created per request and never mutated after [`UserProfile::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Free-text goal ("Weight Loss", "Weight Gain", "Maintenance", ...)
    pub goal: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current body weight in kilograms
    pub current_weight_kg: f64,
    /// Desired body weight in kilograms
    #[serde(default)]
    pub target_weight_kg: Option<f64>,
    /// Known health conditions, forwarded to the language model
    #[serde(default)]
    pub health_conditions: Vec<String>,
    /// Region used for catalog lookup
    pub region: String,
    /// Cuisine used for catalog lookup
    #[serde(default = "default_cuisine")]
    pub cuisine_preference: String,
    /// Allergen substrings matched against food names
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl UserProfile {
    /// Normalized region key (trimmed, lower-cased)
    #[must_use]
    pub fn region_key(&self) -> String {
        normalize_key(&self.region)
    }

    /// Normalized cuisine key (trimmed, lower-cased)
    #[must_use]
    pub fn cuisine_key(&self) -> String {
        normalize_key(&self.cuisine_preference)
    }

    /// Check field presence and physical ranges
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_INPUT` or `VALUE_OUT_OF_RANGE` error naming the
    /// offending field.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_field("name", "Name must not be empty"));
        }
        if self.region.trim().is_empty() {
            return Err(AppError::invalid_field("region", "Region must not be empty"));
        }
        if self.age == 0 || self.age > limits::MAX_AGE {
            return Err(AppError::out_of_range(
                "age",
                format!("Age must be between 1 and {} years", limits::MAX_AGE),
            ));
        }
        if !is_in_range(self.height_cm, limits::MAX_HEIGHT_CM) {
            return Err(AppError::out_of_range(
                "height_cm",
                format!("Height must be between 0 and {} cm", limits::MAX_HEIGHT_CM),
            ));
        }
        if !is_in_range(self.current_weight_kg, limits::MAX_WEIGHT_KG) {
            return Err(AppError::out_of_range(
                "current_weight_kg",
                format!("Weight must be between 0 and {} kg", limits::MAX_WEIGHT_KG),
            ));
        }
        if let Some(target) = self.target_weight_kg {
            if !is_in_range(target, limits::MAX_WEIGHT_KG) {
                return Err(AppError::out_of_range(
                    "target_weight_kg",
                    format!(
                        "Target weight must be between 0 and {} kg",
                        limits::MAX_WEIGHT_KG
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Trim and lower-case a catalog key
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// NaN fails both comparisons
fn is_in_range(value: f64, max: f64) -> bool {
    value > 0.0 && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn profile() -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "name": "Asha",
            "age": 30,
            "goal": "Weight Loss",
            "height_cm": 165.0,
            "current_weight_kg": 70.0,
            "region": "  South India ",
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let p = profile();
        assert_eq!(p.cuisine_preference, "Vegetarian");
        assert!(p.allergies.is_empty());
        assert!(p.health_conditions.is_empty());
        assert!(p.target_weight_kg.is_none());
    }

    #[test]
    fn test_keys_are_normalized() {
        let p = profile();
        assert_eq!(p.region_key(), "south india");
        assert_eq!(p.cuisine_key(), "vegetarian");
    }

    #[test]
    fn test_validate_accepts_reasonable_profile() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_age() {
        let mut p = profile();
        p.age = 0;
        let err = p.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.details["field"], "age");
    }

    #[test]
    fn test_validate_rejects_nan_height() {
        let mut p = profile();
        p.height_cm = f64::NAN;
        let err = p.validate().unwrap_err();
        assert_eq!(err.details["field"], "height_cm");
    }

    #[test]
    fn test_validate_rejects_blank_region() {
        let mut p = profile();
        p.region = "   ".to_owned();
        let err = p.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.details["field"], "region");
    }
}
