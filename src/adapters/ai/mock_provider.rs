//! Mock AI Provider for testing.
//!
//! Returns queued responses or errors and records every request it sees.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new().with_response("Hello, I'm the coach!");
//!
//! let response = provider.complete(request).await?;
//! assert_eq!(response.content, "Hello, I'm the coach!");
//! assert_eq!(provider.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// A configured mock response.
#[derive(Debug)]
pub enum MockResponse {
    /// Return a successful completion.
    Success {
        content: String,
        usage: TokenUsage,
    },
    /// Return an error.
    Error(AIError),
}

/// Mock AI provider for testing.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Queued responses, consumed in order.
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Usage reported once the queue is empty.
    default_usage: TokenUsage,
    info: ProviderInfo,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            default_usage: TokenUsage::new(5, 10),
            info: ProviderInfo::new("mock", "mock-model-1"),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        let usage = self.default_usage;
        lock(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
            usage,
        });
        self
    }

    /// Usage reported by responses queued after this call and by the
    /// fallback response.
    pub fn with_usage(mut self, prompt_tokens: u32, completion_tokens: u32) -> Self {
        self.default_usage = TokenUsage::new(prompt_tokens, completion_tokens);
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: AIError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        lock(&self.calls).last().cloned()
    }

    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: "Mock response".to_string(),
                usage: self.default_usage,
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        lock(&self.calls).push(request);

        match self.next_response() {
            MockResponse::Success { content, usage } => Ok(CompletionResponse {
                content,
                usage,
                model: self.info.model.clone(),
                finish_reason: FinishReason::Stop,
            }),
            MockResponse::Error(err) => Err(err),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Message;

    fn request() -> CompletionRequest {
        CompletionRequest::new().with_message(Message::user("Hello"))
    }

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let provider = MockAIProvider::new()
            .with_response("first")
            .with_response("second");

        assert_eq!(provider.complete(request()).await.unwrap().content, "first");
        assert_eq!(provider.complete(request()).await.unwrap().content, "second");
        assert_eq!(provider.complete(request()).await.unwrap().content, "Mock response");
    }

    #[tokio::test]
    async fn returns_queued_error() {
        let provider = MockAIProvider::new().with_error(AIError::AuthenticationFailed);
        assert!(matches!(
            provider.complete(request()).await,
            Err(AIError::AuthenticationFailed)
        ));
    }

    #[tokio::test]
    async fn records_calls() {
        let provider = MockAIProvider::new();
        provider.complete(request()).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.last_request().unwrap().messages[0].content, "Hello");
    }

    #[tokio::test]
    async fn with_usage_applies_to_fallback() {
        let provider = MockAIProvider::new().with_usage(3, 4);
        let response = provider.complete(request()).await.unwrap();
        assert_eq!(response.usage, TokenUsage::new(3, 4));
    }
}
