// ABOUTME: Configuration module for the diet planner server
// ABOUTME: Environment-only settings for HTTP binding and the completion provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! All settings come from environment variables. There is no config file.

/// Environment-based server and provider configuration
pub mod environment;
