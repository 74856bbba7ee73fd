// ABOUTME: LLM fallback that asks the completion provider for a whole weekly plan
// ABOUTME: Fails hard with a fixed message when the provider call fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{error, instrument, warn};

use super::parse_completion;
use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::llm::{complete_with_timeout, prompts, CompletionOptions, LlmProvider};
use crate::models::UserProfile;

/// Generates a weekly plan with the language model
///
/// Unlike [`super::NutritionEstimator`], any provider failure here is an
/// error: a caller asking for a plan must not receive a partial one.
#[derive(Clone)]
pub struct FallbackPlanGenerator {
    llm: Arc<dyn LlmProvider>,
    options: CompletionOptions,
}

impl FallbackPlanGenerator {
    /// Create a generator over `llm`
    #[must_use]
    pub fn new(llm: Arc<dyn LlmProvider>, options: CompletionOptions) -> Self {
        Self { llm, options }
    }

    /// Ask the model for a plan for `profile` at `target_calories`
    ///
    /// Exactly one provider call, never retried.
    ///
    /// # Errors
    ///
    /// Returns `UPSTREAM_GENERATION_FAILURE` with a fixed message when the
    /// provider call fails. The underlying error is logged and kept as the
    /// source, never shown to the caller.
    #[instrument(skip_all, fields(provider = %self.llm.name(), target_calories))]
    pub async fn build_fallback_plan(
        &self,
        profile: &UserProfile,
        target_calories: i32,
    ) -> AppResult<Value> {
        let request = self
            .options
            .request(prompts::diet_plan_messages(profile, target_calories));

        let response = complete_with_timeout(self.llm.as_ref(), &request, self.options.timeout)
            .await
            .map_err(|e| {
                error!(code = ?e.code, "LLM fallback failed: {}", e.message);
                AppError::upstream_generation(messages::FALLBACK_FAILED).with_source(e)
            })?;

        Ok(normalize_plan_completion(&response.content))
    }
}

/// Parse completion text, wrapping non-JSON text as `{"weekly_plan": text}`
#[must_use]
pub fn normalize_plan_completion(text: &str) -> Value {
    parse_completion(text).unwrap_or_else(|e| {
        warn!("Fallback completion is not JSON, forwarding raw text: {}", e.message);
        json!({ "weekly_plan": text })
    })
}
