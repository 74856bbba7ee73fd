// ABOUTME: Diet plan route handler for the weekly meal plan endpoint
// ABOUTME: Wraps the planner result in the response envelope with timing and guidelines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diet plan routes
//!
//! `POST /diet-mistral/generate` takes a [`UserProfile`] and answers with a
//! [`DietPlanResponse`]. The handler stays thin: timing and the envelope
//! live here, planning lives in [`crate::services::DietPlannerService`].

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::constants::meal_plan::HEALTH_GUIDELINES;
use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::models::{PlanPayload, PlanSummary, UserProfile};
use crate::resources::ServerResources;

/// Response body for a generated plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlanResponse {
    /// Always true; failures use the error body
    pub success: bool,
    /// Outcome message
    pub message: String,
    /// The profile as received
    pub user_profile: UserProfile,
    /// Seven-day plan, catalog-built or model-generated
    pub weekly_plan: PlanPayload,
    /// Calorie summary
    pub summary: PlanSummary,
    /// Fixed general guidelines
    pub health_guidelines: Vec<String>,
    /// Wall time spent generating, two decimals
    pub generation_time_seconds: f64,
    /// RFC 3339 timestamp
    pub generated_at: String,
}

/// Diet plan routes handler
pub struct DietRoutes;

impl DietRoutes {
    /// Create the diet plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/diet-mistral/generate", post(Self::generate_plan))
            .with_state(resources)
    }

    /// Generate a 7-day plan for the submitted profile
    async fn generate_plan(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<UserProfile>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(profile) = payload.map_err(|rejection| {
            AppError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
        })?;

        AppLogger::log_plan_request(&profile.name, &profile.goal, &profile.region);
        let start = Instant::now();

        let result = resources.planner.generate_plan(&profile).await?;

        let elapsed = start.elapsed().as_secs_f64();
        let response = DietPlanResponse {
            success: result.success,
            message: result.message,
            user_profile: profile,
            weekly_plan: result.weekly_plan,
            summary: result.summary,
            health_guidelines: HEALTH_GUIDELINES.iter().map(|&g| g.to_owned()).collect(),
            generation_time_seconds: (elapsed * 100.0).round() / 100.0,
            generated_at: chrono::Utc::now().to_rfc3339(),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
