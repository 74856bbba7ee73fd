// ABOUTME: Weekly meal plan models returned by the plan orchestrator
// ABOUTME: DayPlan, WeeklyPlan, PlanPayload, and PlanResult definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::meal_plan::DAY_NAMES;
use crate::errors::AppError;

/// Meal slot of a catalog entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast dishes
    Breakfast,
    /// Lunch dishes
    Lunch,
    /// Dinner dishes
    Dinner,
    /// Snacks, served as the evening snack
    Snacks,
}

impl MealSlot {
    /// All slots, in the order the planner samples them
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Catalog key of this slot
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }
}

/// One planned meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Dishes served
    pub items: Vec<String>,
    /// Calorie allowance for this meal
    pub calories: i32,
}

/// The four meals of a planned day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMeals {
    /// Breakfast
    pub breakfast: Meal,
    /// Lunch
    pub lunch: Meal,
    /// Evening snack
    pub evening_snack: Meal,
    /// Dinner
    pub dinner: Meal,
}

impl DailyMeals {
    /// Sum of the four meal calorie allowances
    #[must_use]
    pub fn total_calories(&self) -> i32 {
        self.breakfast.calories
            + self.lunch.calories
            + self.evening_snack.calories
            + self.dinner.calories
    }
}

/// Estimated daily nutrient intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionInfo {
    /// Protein (g)
    pub protein_g: u32,
    /// Carbohydrates (g)
    pub carbs_g: u32,
    /// Fats (g)
    pub fats_g: u32,
    /// Fiber (g)
    pub fiber_g: u32,
    /// Sodium (mg)
    pub sodium_mg: u32,
    /// Sugar (g)
    pub sugar_g: u32,
}

/// One day of a weekly plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1 for Monday through 7 for Sunday
    pub day_number: u8,
    /// Weekday name
    pub day_name: String,
    /// Daily calorie target
    pub total_calories: i32,
    /// Planned meals
    pub meals: DailyMeals,
    /// Estimated nutrients
    pub nutritional_breakdown: NutritionInfo,
    /// Hydration advice
    pub hydration_reminder: String,
    /// Suggested activity
    pub exercise_suggestion: String,
    /// General advice
    pub health_tips: Vec<String>,
}

/// Seven consecutive days, Monday through Sunday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyPlan(Vec<DayPlan>);

impl WeeklyPlan {
    /// Build a weekly plan, checking day count, numbering, and names
    ///
    /// # Errors
    ///
    /// Returns an internal error when the days do not run Monday to Sunday.
    pub fn new(days: Vec<DayPlan>) -> Result<Self, AppError> {
        if days.len() != DAY_NAMES.len() {
            return Err(AppError::internal(format!(
                "Weekly plan needs {} days, got {}",
                DAY_NAMES.len(),
                days.len()
            )));
        }
        for (expected, (day, name)) in (1_u8..).zip(days.iter().zip(DAY_NAMES)) {
            if day.day_number != expected || day.day_name != name {
                return Err(AppError::internal(format!(
                    "Day {expected} should be {name}, got {} {}",
                    day.day_number, day.day_name
                )));
            }
        }
        Ok(Self(days))
    }

    /// Days in order
    #[must_use]
    pub fn days(&self) -> &[DayPlan] {
        &self.0
    }
}

/// Plan content: built locally or produced by the language model
///
/// The generated variant is forwarded as the provider sent it and may be a
/// bare string when the completion was not JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanPayload {
    /// Built from the food catalog
    Local(WeeklyPlan),
    /// Produced by the language model
    Generated(Value),
}

impl PlanPayload {
    /// Whether the plan came from the language model
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    /// The locally built plan, if any
    #[must_use]
    pub const fn as_local(&self) -> Option<&WeeklyPlan> {
        match self {
            Self::Local(plan) => Some(plan),
            Self::Generated(_) => None,
        }
    }
}

/// Calorie and lookup summary attached to every plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Baseline metabolic estimate, two decimals
    pub bmr: f64,
    /// Goal-adjusted daily calories
    pub target_calories: i32,
    /// Normalized region key
    pub region: String,
    /// Normalized cuisine key
    pub cuisine: String,
}

/// Result of a plan generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Always true for a returned result; failures are errors
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
    /// The plan
    pub weekly_plan: PlanPayload,
    /// Calorie summary
    pub summary: PlanSummary,
}
