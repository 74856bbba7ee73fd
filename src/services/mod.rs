// ABOUTME: Service layer orchestrating plan generation and nutrition estimation
// ABOUTME: Wires the calorie model, local builder, and LLM provider into request-level operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Services
//!
//! - [`DietPlannerService`] validates a profile, computes its calorie target,
//!   and builds the week locally or through [`FallbackPlanGenerator`].
//! - [`NutritionEstimator`] asks the model for one meal's nutrition and never
//!   fails; errors come back inside the result.

/// Plan orchestration
pub mod diet_planner;
/// LLM-generated weekly plans for regions missing from the catalog
pub mod fallback_plan;
/// Meal nutrition estimates
pub mod nutrition_estimator;

pub use diet_planner::DietPlannerService;
pub use fallback_plan::{normalize_plan_completion, FallbackPlanGenerator};
pub use nutrition_estimator::{strip_code_fence, NutritionEstimator};

use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Strictly parse completion text as JSON
pub(crate) fn parse_completion(text: &str) -> AppResult<Value> {
    serde_json::from_str(text).map_err(|e| AppError::malformed_upstream(e.to_string()))
}
