// ABOUTME: LLM provider abstraction layer for pluggable AI model integration
// ABOUTME: Defines chat message types, completion options, and the provider contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LLM Provider Service Provider Interface
//!
//! The planner talks to its language model through [`LlmProvider`], so the
//! services never see HTTP details and tests can substitute a scripted
//! provider.
//!
//! ## Key Concepts
//!
//! - **`LlmProvider`**: Async trait for a single chat completion
//! - **`ChatMessage`**: Role-based message structure for conversations
//! - **`ChatRequest`**: Request configuration including model, temperature, etc.
//! - **`CompletionOptions`**: Per-service defaults applied to every request
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use diet_planner::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let messages = vec![
//!         ChatMessage::system("You are a certified dietitian."),
//!         ChatMessage::user("How much protein is in one boiled egg?"),
//!     ];
//!
//!     let request = ChatRequest::new(messages).with_temperature(0.2);
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod openai_compatible;
pub mod prompts;

pub use openai_compatible::{OpenAiCompatibleConfig, OpenAiCompatibleProvider};

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::constants::llm;
use crate::errors::AppError;

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

impl MessageRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier (provider-specific)
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new chat request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Response from a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated message content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, length, etc.)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Sampling settings a service applies to each of its requests
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    /// Model override; the provider default applies when `None`
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
    /// Token budget
    pub max_tokens: u32,
    /// Deadline for one provider call, enforced by the calling service
    pub timeout: Duration,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: None,
            temperature: llm::DEFAULT_TEMPERATURE,
            max_tokens: llm::DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(llm::REQUEST_TIMEOUT_SECS),
        }
    }
}

impl CompletionOptions {
    /// Wrap `messages` in a request carrying these options
    #[must_use]
    pub fn request(&self, messages: Vec<ChatMessage>) -> ChatRequest {
        let request = ChatRequest::new(messages)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);
        match &self.model {
            Some(model) => request.with_model(model.clone()),
            None => request,
        }
    }
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider trait for chat completion
///
/// Implementations perform exactly one round-trip per call and never retry.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "mistral")
    fn name(&self) -> &str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &str;

    /// Default model to use if not specified in request
    fn default_model(&self) -> &str;

    /// Perform a chat completion
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}

/// Run one completion, giving up after `timeout`
///
/// A missed deadline is reported as `EXTERNAL_SERVICE_UNAVAILABLE`, the same
/// code the HTTP client uses for its own timeouts, so callers handle both
/// alike.
///
/// # Errors
///
/// Returns the provider's error, or an unavailable error on timeout.
pub async fn complete_with_timeout(
    provider: &dyn LlmProvider,
    request: &ChatRequest,
    timeout: Duration,
) -> Result<ChatResponse, AppError> {
    tokio::time::timeout(timeout, provider.complete(request))
        .await
        .unwrap_or_else(|_| {
            Err(AppError::external_unavailable(
                provider.display_name(),
                format!("Request timed out after {} ms", timeout.as_millis()),
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_options_build_request() {
        let options = CompletionOptions {
            model: Some("mistral-small-latest".to_owned()),
            ..CompletionOptions::default()
        };
        let request = options.request(vec![ChatMessage::user("hi")]);
        assert_eq!(request.model.as_deref(), Some("mistral-small-latest"));
        assert_eq!(request.max_tokens, Some(800));
        assert!(request
            .temperature
            .is_some_and(|t| (t - 0.2).abs() < f32::EPSILON));
    }

    #[test]
    fn test_default_options_leave_model_to_provider() {
        let request = CompletionOptions::default().request(Vec::new());
        assert!(request.model.is_none());
    }

    #[test]
    fn test_message_role_serialization() {
        let message = ChatMessage::system("rules");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(MessageRole::Assistant.as_str(), "assistant");
    }
}
