// ABOUTME: Scripted LLM provider for tests that need deterministic completions
// ABOUTME: Replays queued replies or errors in order and records every request it receives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use diet_planner::errors::AppError;
use diet_planner::llm::{ChatRequest, ChatResponse, LlmProvider};

/// Provider that answers from a queue instead of the network
///
/// An empty queue answers with an external service error, so a test that
/// expects no provider call fails loudly if one happens.
#[derive(Default)]
pub struct ScriptedLlmProvider {
    replies: Mutex<VecDeque<Result<String, AppError>>>,
    requests: Mutex<Vec<ChatRequest>>,
    delay: Option<Duration>,
}

impl ScriptedLlmProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful completion
    pub fn with_reply(self, content: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(content.to_owned()));
        self
    }

    /// Queue a provider failure
    pub fn with_error(self, error: AppError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// Wait this long before every reply, like a slow upstream
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlmProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn display_name(&self) -> &str {
        "Scripted"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Ok(content)) => Ok(ChatResponse {
                content,
                model: self.default_model().to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Some(Err(error)) => Err(error),
            None => Err(AppError::external_service(
                "Scripted",
                "no scripted reply left",
            )),
        }
    }
}
