// ABOUTME: Core types and constants for the diet planner service
// ABOUTME: Foundation crate with error handling, domain models, and planning constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Core
//!
//! Foundation crate providing shared types and constants for the diet
//! planner. It has no HTTP or runtime dependencies unless the
//! `http-response` feature is enabled.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Planning policy values, advisory text, configuration defaults
//! - **models**: User profile, weekly plan, and nutrition estimate types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
