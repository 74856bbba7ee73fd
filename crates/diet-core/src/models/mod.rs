// ABOUTME: Core data models for diet planning and nutrition estimation
// ABOUTME: Re-exports profile, plan, and nutrition types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meal nutrition request and result types
pub mod nutrition;
/// Weekly plan types
pub mod plan;
/// User profile submitted with plan requests
pub mod profile;

pub use nutrition::{
    FoodPortion, ItemNutrition, Macros, MealNutrition, NutritionEstimate, NutritionRequest,
};
pub use plan::{
    DailyMeals, DayPlan, Meal, MealSlot, NutritionInfo, PlanPayload, PlanResult, PlanSummary,
    WeeklyPlan,
};
pub use profile::{normalize_key, UserProfile};
