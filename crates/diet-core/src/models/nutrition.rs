// ABOUTME: Meal nutrition estimation request and result models
// ABOUTME: FoodPortion input, soft-fail NutritionEstimate output, and a typed breakdown view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A food and the amount eaten
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPortion {
    /// Food name
    pub item: String,
    /// Free-text quantity ("1 cup", "200 g")
    pub quantity: String,
}

impl FoodPortion {
    /// Create a portion
    #[must_use]
    pub fn new(item: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            quantity: quantity.into(),
        }
    }
}

/// Body of `POST /nutrition/analyze`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionRequest {
    /// Foods in the meal
    pub foods: Vec<FoodPortion>,
}

/// Outcome of a nutrition estimate
///
/// Never an `Err`: failures are reported in-band as `{"error": ...}` so the
/// HTTP layer still answers 200. The plan fallback path does the opposite and
/// fails hard; keep the two separate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutritionEstimate {
    /// Estimation failed
    Failed {
        /// Failure description
        error: String,
    },
    /// JSON object exactly as returned by the provider
    Estimated(Value),
}

impl NutritionEstimate {
    /// Build a failed estimate
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// Whether this is a value-level error
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Error message, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            Self::Estimated(_) => None,
        }
    }

    /// Raw estimate value, if any
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Estimated(value) => Some(value),
            Self::Failed { .. } => None,
        }
    }

    /// Typed view of the estimate when it follows the requested schema
    #[must_use]
    pub fn as_breakdown(&self) -> Option<MealNutrition> {
        self.value()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// Nutrients of one food in the breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemNutrition {
    /// Food name
    pub item: String,
    /// Quantity as echoed by the provider
    pub quantity: String,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

/// Macro totals for the meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

/// Typed form of the schema requested from the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealNutrition {
    /// Per-item breakdown
    pub breakdown: Vec<ItemNutrition>,
    /// Total calories for the meal
    pub total_calories: f64,
    /// Macro totals
    pub macros: Macros,
}
