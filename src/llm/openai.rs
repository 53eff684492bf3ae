//! OpenAI chat-completions provider

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;

use super::{ChatProvider, ChatRequest, ChatResponse, TokenUsage};
use crate::config::LlmSettings;
use crate::error::{LlmError, LlmResult};

/// OpenAI chat provider
#[derive(Debug)]
pub struct OpenAiChatProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiChatProvider {
    /// Create a provider from configuration, reading the API key from the
    /// configured environment variable.
    pub fn new(settings: &LlmSettings) -> LlmResult<Self> {
        let api_key = env::var(&settings.api_key_env).map_err(|_| {
            LlmError::Authentication(format!(
                "Environment variable {} not set",
                settings.api_key_env
            ))
        })?;

        Ok(Self::with_api_key(settings, api_key))
    }

    /// Create a provider with an explicit API key.
    ///
    /// No key validation is performed beyond what the API rejects.
    pub fn with_api_key(settings: &LlmSettings, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
        }
    }

    /// Build the request body for the chat completions endpoint
    fn build_request_body(&self, request: &ChatRequest) -> Value {
        json!({
            "model": request.model.as_ref().unwrap_or(&self.model),
            "messages": request.messages,
        })
    }

    /// Parse the API response into a completion plus usage
    fn parse_response(&self, response: OpenAiResponse) -> LlmResult<ChatResponse> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Parse("No choices in response".to_string()))?;

        // Usage drives session accounting, so a payload without it is
        // malformed for our purposes.
        let usage = response
            .usage
            .ok_or_else(|| LlmError::Parse("No usage in response".to_string()))?;

        Ok(ChatResponse {
            content: choice.message.content.unwrap_or_default(),
            usage: TokenUsage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            },
        })
    }
}

#[async_trait]
impl ChatProvider for OpenAiChatProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: ChatRequest) -> LlmResult<ChatResponse> {
        let body = self.build_request_body(&request);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let openai_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(format!("Failed to parse response: {}", e)))?;

        self.parse_response(openai_response)
    }
}

// OpenAI API response types

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
