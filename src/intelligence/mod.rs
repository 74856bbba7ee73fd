// ABOUTME: Intelligence module for calorie targets and catalog-driven meal plans
// ABOUTME: Pure, deterministic-given-an-rng logic with no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Calorie estimation, the curated regional food catalog, and the local
//! weekly plan builder. Nothing here talks to the network; randomness is
//! always injected by the caller.

/// Basal metabolic rate and goal-adjusted calorie targets
pub mod calorie_model;
/// Curated regional food catalog
pub mod food_catalog;
/// Weekly plan assembly from catalog data
pub mod local_plan;

pub use calorie_model::{
    calculate_calorie_targets, estimate_bmr, estimate_target_calories, goal_factor,
    CalorieTargets,
};
pub use food_catalog::{FoodCatalog, MealLists};
pub use local_plan::{build_local_plan, filter_allergens};
