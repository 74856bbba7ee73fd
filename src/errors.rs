// ABOUTME: Unified error handling re-exported from the diet-core foundation crate
// ABOUTME: Keeps `crate::errors::AppError` paths stable for the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error codes, `AppError`, and the JSON error body live in `diet-core` so
//! models can return them without depending on the server crate. The
//! `http-response` feature gives `AppError` its axum `IntoResponse` impl.

pub use diet_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};
