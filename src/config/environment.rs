// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses HTTP binding, request timeout, and completion provider settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_config, llm};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Environment type used for logging defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Completion provider settings
#[derive(Clone)]
pub struct LlmConfig {
    /// Bearer token for the provider
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Provider base URL, without the `/v1` suffix
    pub base_url: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Token budget per completion
    pub max_tokens: u32,
}

// Keeps the API key out of debug logs
impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// Main server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub http_host: String,
    /// HTTP listener port
    pub http_port: u16,
    /// Inbound request timeout in seconds
    pub request_timeout_secs: u64,
    /// Completion provider settings
    pub llm: LlmConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when `MISTRAL_API_KEY` is unset, a numeric variable
    /// does not parse, or validation fails.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let api_key = env::var(env_config::MISTRAL_API_KEY).with_context(|| {
            format!("{} environment variable not set", env_config::MISTRAL_API_KEY)
        })?;

        let config = Self {
            http_host: env_var_or(env_config::HTTP_HOST, defaults::HTTP_HOST),
            http_port: parse_env_or(env_config::HTTP_PORT, defaults::HTTP_PORT)?,
            request_timeout_secs: parse_env_or(
                env_config::REQUEST_TIMEOUT_SECS,
                defaults::REQUEST_TIMEOUT_SECS,
            )?,
            llm: LlmConfig {
                api_key,
                model: env_var_or(env_config::MISTRAL_MODEL, defaults::MISTRAL_MODEL),
                base_url: env_var_or(
                    env_config::MISTRAL_API_BASE_URL,
                    defaults::MISTRAL_API_BASE_URL,
                ),
                temperature: parse_env_or(env_config::LLM_TEMPERATURE, llm::DEFAULT_TEMPERATURE)?,
                max_tokens: parse_env_or(env_config::LLM_MAX_TOKENS, llm::DEFAULT_MAX_TOKENS)?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must be non-zero"));
        }
        // Provider calls must time out first so their errors reach the caller
        if self.request_timeout_secs <= llm::REQUEST_TIMEOUT_SECS {
            return Err(anyhow::anyhow!(
                "REQUEST_TIMEOUT_SECS must be greater than the {}s provider timeout",
                llm::REQUEST_TIMEOUT_SECS
            ));
        }
        if self.llm.api_key.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "{} must not be empty",
                env_config::MISTRAL_API_KEY
            ));
        }
        if !(0.0..=llm::MAX_TEMPERATURE).contains(&self.llm.temperature) {
            return Err(anyhow::anyhow!(
                "LLM_TEMPERATURE must be between 0 and {}",
                llm::MAX_TEMPERATURE
            ));
        }
        if self.llm.max_tokens == 0 {
            return Err(anyhow::anyhow!("LLM_MAX_TOKENS must be greater than 0"));
        }
        Ok(())
    }

    /// Inbound request timeout
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Diet Planner Configuration:\n\
             - HTTP: {}:{}\n\
             - Request Timeout: {}s\n\
             - Completion Provider: {}\n\
             - Model: {}\n\
             - Temperature: {}\n\
             - Max Tokens: {}\n\
             - API Key: {}",
            self.http_host,
            self.http_port,
            self.request_timeout_secs,
            self.llm.base_url,
            self.llm.model,
            self.llm.temperature,
            self.llm.max_tokens,
            if self.llm.api_key.is_empty() {
                "Missing"
            } else {
                "Configured"
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}")),
        Err(_) => Ok(default),
    }
}
