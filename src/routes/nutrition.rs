// ABOUTME: Nutrition route handler for single-meal calorie and macro estimates
// ABOUTME: Validates the food list and always answers 200 with the in-band estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{NutritionEstimate, NutritionRequest};
use crate::resources::ServerResources;

/// Response body for a nutrition estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionResponse {
    /// True whenever the request was valid, even if the estimate failed
    pub success: bool,
    /// Estimate or `{"error": ...}`
    pub meal_nutrition: NutritionEstimate,
}

/// Nutrition routes handler
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create the nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/nutrition/analyze", post(Self::analyze_meal))
            .with_state(resources)
    }

    /// Estimate calories and macros for a meal
    async fn analyze_meal(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<NutritionRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = payload.map_err(|rejection| {
            AppError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
        })?;

        if request.foods.is_empty() {
            return Err(AppError::invalid_field("foods", "At least one food is required"));
        }
        if let Some(index) = request.foods.iter().position(|f| f.item.trim().is_empty()) {
            return Err(AppError::invalid_field(
                &format!("foods[{index}].item"),
                "Food item must not be empty",
            ));
        }

        let estimate = resources
            .estimator
            .estimate_meal_nutrition(&request.foods)
            .await;

        let response = NutritionResponse {
            success: true,
            meal_nutrition: estimate,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
