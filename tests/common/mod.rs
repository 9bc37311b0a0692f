//! Shared test helpers and mock provider.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use recipe_mcp::error::RecipeError;
use recipe_mcp::provider::{CompletionProvider, CompletionRequest, CompletionResponse};
use recipe_mcp::types::*;

/// A mock provider that counts calls, records requests and replays queued results.
///
/// With nothing queued it echoes the prompt back, which lets concurrent tests
/// check that each caller got its own answer.
pub struct MockProvider {
    model_id: String,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
    results: Mutex<VecDeque<Result<CompletionResponse, RecipeError>>>,
    delay: Option<Duration>,
}

impl MockProvider {
    pub fn new(model_id: &str) -> Self {
        Self {
            model_id: model_id.to_string(),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            results: Mutex::new(VecDeque::new()),
            delay: None,
        }
    }

    /// Sleep this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a text response.
    pub fn queue_response(&self, text: &str) {
        self.results.lock().unwrap().push_back(Ok(CompletionResponse {
            text: text.to_string(),
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
                total_tokens: 30,
            },
            finish_reason: Some(FinishReason::Stop),
        }));
    }

    /// Queue a failure.
    pub fn queue_error(&self, error: RecipeError) {
        self.results.lock().unwrap().push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Prompt of the only request seen so far.
    pub fn last_prompt(&self) -> String {
        let requests = self.requests.lock().unwrap();
        requests
            .last()
            .and_then(|r| r.prompt())
            .expect("provider should have been called")
            .to_string()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, RecipeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let queued = self.results.lock().unwrap().pop_front();
        match queued {
            Some(result) => result,
            None => Ok(CompletionResponse::text(format!(
                "echo: {}",
                request.prompt().unwrap_or_default()
            ))),
        }
    }
}
