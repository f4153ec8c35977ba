//! OpenAI-compatible chat completions client implementing [`LlmClient`].
//!
//! Works against any endpoint speaking the Chat Completions protocol; the backend points it
//! at Gemini's OpenAI-compatible base URL. Depends on `async_openai` (feature `openai`).

use async_trait::async_trait;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        CreateChatCompletionRequestArgs,
    },
    Client,
};

use super::{LlmClient, LlmError, LlmRequest};

/// Chat completions client. The prompt is sent as a single user message.
pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    model: String,
}

impl ChatOpenAI {
    /// Client with default config (API key from `OPENAI_API_KEY`).
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
        }
    }

    /// Client with custom config (API key, base URL). `model` is used when a request
    /// does not name one.
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            model: model.into(),
        }
    }

    pub fn default_model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    async fn generate(&self, request: &LlmRequest) -> Result<String, LlmError> {
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };
        let messages = vec![ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessage::from(request.prompt.as_str()),
        )];
        let built = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .temperature(request.temperature)
            .build()
            .map_err(|e| LlmError::Request(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(built)
            .await
            .map_err(|e| LlmError::Api(e.to_string()))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse)?;
        Ok(choice.message.content.unwrap_or_default())
    }
}
