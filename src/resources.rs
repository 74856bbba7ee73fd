// ABOUTME: Shared server resources built once at startup and handed to route handlers
// ABOUTME: Holds the food catalog, completion provider, and the services built on them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server resources
//!
//! Everything in here is immutable after construction, so handlers share it
//! behind an `Arc` without locking.

use std::sync::Arc;

use tracing::info;

use crate::config::environment::ServerConfig;
use crate::errors::AppResult;
use crate::intelligence::FoodCatalog;
use crate::llm::{CompletionOptions, LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider};
use crate::services::{DietPlannerService, NutritionEstimator};

/// Dependencies shared by all request handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Weekly plan orchestrator
    pub planner: DietPlannerService,
    /// Meal nutrition estimator
    pub estimator: NutritionEstimator,
}

impl ServerResources {
    /// Wire services over an existing catalog and provider
    #[must_use]
    pub fn new(
        catalog: Arc<FoodCatalog>,
        llm: Arc<dyn LlmProvider>,
        options: CompletionOptions,
    ) -> Self {
        Self {
            planner: DietPlannerService::new(catalog, Arc::clone(&llm), options.clone()),
            estimator: NutritionEstimator::new(llm, options),
        }
    }

    /// Build production resources: built-in catalog and the Mistral client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let catalog = Arc::new(FoodCatalog::builtin());
        let provider = OpenAiCompatibleProvider::new(OpenAiCompatibleConfig::mistral(
            &config.llm.api_key,
            &config.llm.model,
            &config.llm.base_url,
        ))?;
        let options = CompletionOptions {
            model: Some(config.llm.model.clone()),
            temperature: config.llm.temperature,
            max_tokens: config.llm.max_tokens,
            ..CompletionOptions::default()
        };

        info!(
            catalog_entries = catalog.len(),
            provider = provider.name(),
            "Server resources initialized"
        );

        Ok(Self::new(catalog, Arc::new(provider), options))
    }
}
