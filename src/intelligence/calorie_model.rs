// ABOUTME: Calorie model turning body metrics and a goal into a daily calorie target
// ABOUTME: Simplified Mifflin-St Jeor style BMR without a sex term plus a goal multiplier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Model
//!
//! `BMR = 10 × weight_kg + 6.25 × height_cm − 5 × age + 5`
//!
//! The target is the BMR scaled by a goal factor and truncated toward zero.
//! Goals are free text; matching is a case-insensitive substring check so
//! "Aggressive Weight Loss" still counts as weight loss.

use serde::{Deserialize, Serialize};

use crate::constants::calorie_model::{
    AGE_COEF, HEIGHT_COEF, MAINTENANCE_FACTOR, OFFSET, WEIGHT_COEF, WEIGHT_GAIN_FACTOR,
    WEIGHT_LOSS_FACTOR,
};
use crate::models::UserProfile;

/// Calorie figures computed once per plan request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieTargets {
    /// Basal metabolic rate in kcal/day
    pub bmr: f64,
    /// Goal multiplier applied to the BMR
    pub goal_factor: f64,
    /// Daily calorie target, truncated toward zero
    pub target_calories: i32,
}

impl CalorieTargets {
    /// BMR rounded to two decimals for display
    #[must_use]
    pub fn rounded_bmr(&self) -> f64 {
        (self.bmr * 100.0).round() / 100.0
    }
}

/// Basal metabolic rate in kcal/day
///
/// No range checks here: validation happens on the profile before this runs.
#[must_use]
pub fn estimate_bmr(profile: &UserProfile) -> f64 {
    WEIGHT_COEF * profile.current_weight_kg + HEIGHT_COEF * profile.height_cm
        - AGE_COEF * f64::from(profile.age)
        + OFFSET
}

/// Multiplier for a free-text goal
///
/// "weight loss" is checked before "weight gain"; anything else maintains.
#[must_use]
pub fn goal_factor(goal: &str) -> f64 {
    let goal = goal.to_lowercase();
    if goal.contains("weight loss") {
        WEIGHT_LOSS_FACTOR
    } else if goal.contains("weight gain") {
        WEIGHT_GAIN_FACTOR
    } else {
        MAINTENANCE_FACTOR
    }
}

/// Daily calorie target for `profile`
#[must_use]
pub fn estimate_target_calories(profile: &UserProfile) -> i32 {
    calculate_calorie_targets(profile).target_calories
}

/// BMR, goal factor, and target in one pass
#[must_use]
pub fn calculate_calorie_targets(profile: &UserProfile) -> CalorieTargets {
    let bmr = estimate_bmr(profile);
    let factor = goal_factor(&profile.goal);
    CalorieTargets {
        bmr,
        goal_factor: factor,
        target_calories: (bmr * factor) as i32,
    }
}
