// ABOUTME: Meal nutrition estimator backed by the completion provider
// ABOUTME: Strips markdown code fences and reports every failure in-band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{instrument, warn};

use super::parse_completion;
use crate::errors::AppResult;
use crate::llm::{complete_with_timeout, prompts, ChatMessage, CompletionOptions, LlmProvider};
use crate::logging::AppLogger;
use crate::models::{FoodPortion, NutritionEstimate};

/// Remove a surrounding markdown code fence from completion text
///
/// Handles a leading "```json" or "```" and a trailing "```", with any
/// whitespace around them.
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let opened = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let closed = opened.trim_end();
    closed.strip_suffix("```").unwrap_or(closed).trim()
}

/// Estimates calories and macros for a meal with the language model
#[derive(Clone)]
pub struct NutritionEstimator {
    llm: Arc<dyn LlmProvider>,
    options: CompletionOptions,
}

impl NutritionEstimator {
    /// Create an estimator over `llm`
    #[must_use]
    pub fn new(llm: Arc<dyn LlmProvider>, options: CompletionOptions) -> Self {
        Self { llm, options }
    }

    /// Estimate the nutrition of `foods`
    ///
    /// Never fails: provider and parse errors are returned as
    /// [`NutritionEstimate::Failed`]. A successful estimate is the exact JSON
    /// value the provider sent.
    #[instrument(skip_all, fields(provider = %self.llm.name(), items = foods.len()))]
    pub async fn estimate_meal_nutrition(&self, foods: &[FoodPortion]) -> NutritionEstimate {
        let start = Instant::now();
        let estimate = match self.request_estimate(foods).await {
            Ok(value) => NutritionEstimate::Estimated(value),
            Err(e) => {
                warn!(code = ?e.code, "Nutrition estimate failed: {}", e.message);
                NutritionEstimate::failed(e.message)
            }
        };
        AppLogger::log_nutrition_estimate(
            foods.len(),
            !estimate.is_error(),
            u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        estimate
    }

    async fn request_estimate(&self, foods: &[FoodPortion]) -> AppResult<Value> {
        let request = self.options.request(vec![ChatMessage::user(
            prompts::meal_nutrition_prompt(foods),
        )]);
        let response =
            complete_with_timeout(self.llm.as_ref(), &request, self.options.timeout).await?;
        parse_completion(strip_code_fence(&response.content))
    }
}
