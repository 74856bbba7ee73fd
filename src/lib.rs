// ABOUTME: Main library entry point for the diet planner API
// ABOUTME: Regional 7-day meal plans with LLM fallback and meal nutrition estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Planner
//!
//! An HTTP service that builds personalized 7-day meal plans from a curated
//! regional food catalog and falls back to a language model when the catalog
//! has no entry for the requested region and cuisine. It also estimates the
//! calories and macros of a single meal through the same model.
//!
//! ## Architecture
//!
//! - **Intelligence**: calorie model, food catalog, and the local plan builder
//! - **LLM**: provider abstraction and the `OpenAI`-compatible client used for Mistral
//! - **Services**: plan orchestration, fallback generation, nutrition estimation
//! - **Routes**: axum handlers for the public endpoints
//! - **Config**: environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use diet_planner::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Diet planner configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-only configuration
pub mod config;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Calorie model, food catalog, and local plan building
pub mod intelligence;

/// Language model provider abstraction
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Shared server resources handed to route handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Plan orchestration and nutrition estimation services
pub mod services;

pub use diet_core::constants;
pub use diet_core::models;
