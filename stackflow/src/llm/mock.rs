//! Mock LLM: fixed reply or fixed failure, records every request.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmClient, LlmError, LlmRequest};

pub struct MockLlm {
    reply: Result<String, String>,
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlm {
    /// Answers every request with `reply`.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails every request with [`LlmError::Api`].
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn generate(&self, request: &LlmRequest) -> Result<String, LlmError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());
        self.reply.clone().map_err(LlmError::Api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_requests_and_replies() {
        let llm = MockLlm::with_reply("hi there");
        let req = LlmRequest::new("gemini-1.5-flash", "hello", 0.5);
        assert_eq!(llm.generate(&req).await.unwrap(), "hi there");
        assert_eq!(llm.requests(), vec![req]);
    }

    #[tokio::test]
    async fn failing_mock_returns_api_error() {
        let llm = MockLlm::failing("quota exceeded");
        let err = llm
            .generate(&LlmRequest::new("", "hello", 0.5))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "LLM API error: quota exceeded");
    }
}
