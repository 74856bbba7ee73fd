// ABOUTME: Plan orchestrator choosing between the local catalog builder and the LLM fallback
// ABOUTME: Validates profiles, computes calorie targets, and maps failures to caller-facing errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Diet Planner Service
//!
//! One call per plan request:
//!
//! 1. validate the profile
//! 2. compute the calorie target once
//! 3. build the week from the catalog, or ask the model when the catalog has
//!    no entry for the region and cuisine
//!
//! Only validation errors and the fallback's own failure reach the caller
//! as-is. Everything else is logged and replaced by a generic message.

use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use super::FallbackPlanGenerator;
use crate::constants::messages;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::intelligence::{build_local_plan, calculate_calorie_targets, FoodCatalog};
use crate::llm::{CompletionOptions, LlmProvider};
use crate::logging::AppLogger;
use crate::models::{PlanPayload, PlanResult, PlanSummary, UserProfile};

/// Weekly plan orchestrator
#[derive(Clone)]
pub struct DietPlannerService {
    catalog: Arc<FoodCatalog>,
    fallback: FallbackPlanGenerator,
}

impl DietPlannerService {
    /// Create a planner over a shared catalog and completion provider
    #[must_use]
    pub fn new(
        catalog: Arc<FoodCatalog>,
        llm: Arc<dyn LlmProvider>,
        options: CompletionOptions,
    ) -> Self {
        Self {
            catalog,
            fallback: FallbackPlanGenerator::new(llm, options),
        }
    }

    /// Generate a plan with a fresh entropy-seeded rng
    ///
    /// # Errors
    ///
    /// See [`Self::generate_plan_with_rng`].
    pub async fn generate_plan(&self, profile: &UserProfile) -> AppResult<PlanResult> {
        let mut rng = StdRng::from_entropy();
        self.generate_plan_with_rng(profile, &mut rng).await
    }

    /// Generate a plan drawing all randomness from `rng`
    ///
    /// # Errors
    ///
    /// - `INVALID_INPUT` / `VALUE_OUT_OF_RANGE` for a bad profile
    /// - `UPSTREAM_GENERATION_FAILURE` when the fallback provider call fails
    ///   or returns no plan
    /// - `PLAN_GENERATION_FAILURE` for anything else
    #[instrument(skip_all, fields(region = %profile.region_key(), cuisine = %profile.cuisine_key()))]
    pub async fn generate_plan_with_rng<R: Rng + Send + ?Sized>(
        &self,
        profile: &UserProfile,
        rng: &mut R,
    ) -> AppResult<PlanResult> {
        let start = Instant::now();
        let result = self.build_plan(profile, rng).await.map_err(caller_error)?;
        AppLogger::log_plan_generated(
            &profile.name,
            result.weekly_plan.is_generated(),
            u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(result)
    }

    async fn build_plan<R: Rng + Send + ?Sized>(
        &self,
        profile: &UserProfile,
        rng: &mut R,
    ) -> AppResult<PlanResult> {
        profile.validate()?;

        let region = profile.region_key();
        let cuisine = profile.cuisine_key();
        let targets = calculate_calorie_targets(profile);
        if targets.target_calories <= 0 {
            return Err(AppError::out_of_range(
                "current_weight_kg",
                "Profile yields a non-positive calorie target",
            ));
        }
        let target_calories = targets.target_calories;

        let summary = PlanSummary {
            bmr: targets.rounded_bmr(),
            target_calories,
            region,
            cuisine,
        };

        if let Some(plan) = build_local_plan(&self.catalog, profile, target_calories, rng)? {
            info!(target_calories, "Using catalog plan");
            return Ok(PlanResult {
                success: true,
                message: format!("Diet plan generated successfully for {}", profile.name),
                weekly_plan: PlanPayload::Local(plan),
                summary,
            });
        }

        warn!(
            "No catalog data for region={}, cuisine={}. Using LLM fallback.",
            summary.region, summary.cuisine
        );
        let generated = self
            .fallback
            .build_fallback_plan(profile, target_calories)
            .await?;

        Ok(PlanResult {
            success: true,
            message: format!("Diet plan generated by AI for {}", profile.name),
            weekly_plan: PlanPayload::Generated(extract_weekly_plan(generated)?),
            summary,
        })
    }
}

/// Take the `weekly_plan` member of a generated object, or the whole value
///
/// # Errors
///
/// Returns `UPSTREAM_GENERATION_FAILURE` when the plan is null or empty.
fn extract_weekly_plan(generated: Value) -> AppResult<Value> {
    let plan = match generated {
        Value::Object(mut object) => match object.remove("weekly_plan") {
            Some(plan) => plan,
            None => Value::Object(object),
        },
        other => other,
    };

    let empty = match &plan {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    };
    if empty {
        error!("LLM fallback returned an empty weekly plan");
        return Err(AppError::upstream_generation(messages::FALLBACK_FAILED));
    }
    Ok(plan)
}

/// Reduce an internal error to what the caller may see
fn caller_error(e: AppError) -> AppError {
    match e.code {
        ErrorCode::InvalidInput
        | ErrorCode::ValueOutOfRange
        | ErrorCode::UpstreamGenerationFailure => e,
        code => {
            error!(?code, "Error generating diet plan: {}", e.message);
            AppError::plan_generation(messages::PLAN_FAILED).with_source(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_prefers_weekly_plan_member() {
        let plan = extract_weekly_plan(json!({"weekly_plan": [{"day": "Monday"}], "summary": {}}))
            .unwrap();
        assert_eq!(plan, json!([{"day": "Monday"}]));
    }

    #[test]
    fn test_extract_keeps_object_without_member() {
        let generated = json!({"Monday": {"breakfast": "Poha"}});
        assert_eq!(extract_weekly_plan(generated.clone()).unwrap(), generated);
    }

    #[test]
    fn test_extract_rejects_empty_plans() {
        for generated in [json!({"weekly_plan": null}), json!({"weekly_plan": []}), json!({}), json!("  ")] {
            let err = extract_weekly_plan(generated).unwrap_err();
            assert_eq!(err.code, ErrorCode::UpstreamGenerationFailure);
            assert_eq!(err.message, messages::FALLBACK_FAILED);
        }
    }

    #[test]
    fn test_caller_error_mapping() {
        let passed = caller_error(AppError::invalid_field("name", "blank"));
        assert_eq!(passed.code, ErrorCode::InvalidInput);

        let mapped = caller_error(AppError::insufficient_catalog_data("lunch", 1, 2));
        assert_eq!(mapped.code, ErrorCode::PlanGenerationFailure);
        assert_eq!(mapped.message, messages::PLAN_FAILED);
    }
}
