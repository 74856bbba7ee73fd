// ABOUTME: Route module organization for the diet planner HTTP endpoints
// ABOUTME: Assembles domain routers and the tracing, CORS, and timeout middleware stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the diet planner
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Weekly diet plan routes
pub mod diet;
/// Health check and service info routes
pub mod health;
/// Meal nutrition routes
pub mod nutrition;

pub use diet::{DietPlanResponse, DietRoutes};
pub use health::HealthRoutes;
pub use nutrition::{NutritionResponse, NutritionRoutes};

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::{header, Method};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::resources::ServerResources;

/// CORS policy: any origin, JSON bodies only
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

/// Full application router with middleware
///
/// `request_timeout` must exceed the services' provider deadline so a slow
/// provider still yields the route's own response instead of a bare 408.
#[must_use]
pub fn build_router(resources: Arc<ServerResources>, request_timeout: Duration) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(DietRoutes::routes(Arc::clone(&resources)))
        .merge(NutritionRoutes::routes(resources))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer())
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
