//! Chat-completion provider interface
//!
//! A narrow seam over the external language-model API: an ordered list of
//! `{role, content}` messages goes out, a text completion plus billed token
//! usage comes back. Tests stub [`ChatProvider`]; production uses
//! [`OpenAiChatProvider`].

mod openai;

pub use openai::OpenAiChatProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LlmResult;

/// Message role in a chat exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System message (instructions to the LLM)
    System,
    /// User message
    User,
    /// Assistant (LLM) message
    Assistant,
}

/// A message in a chat exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,
    /// Message content (text)
    pub content: String,
}

impl Message {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request for a chat completion
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Messages in the exchange, in order
    pub messages: Vec<Message>,
    /// Model to use (overrides provider default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Token usage information as billed by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Response from a chat completion
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Raw text of the first choice
    pub content: String,
    /// Billed usage for the call
    pub usage: TokenUsage,
}

/// Trait for chat-completion providers
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;

    /// Complete a request. Blocks until the provider responds; no retry,
    /// no timeout beyond what the transport imposes.
    async fn complete(&self, request: ChatRequest) -> LlmResult<ChatResponse>;
}
