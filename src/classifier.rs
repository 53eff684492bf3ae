//! Sentiment classification against a chat-completion provider

use std::sync::Arc;

use tracing::debug;

use crate::domain::{ClassificationResult, Sentiment};
use crate::error::Result;
use crate::llm::{ChatProvider, ChatRequest, Message};
use crate::token::{SessionTotals, TokenCounter};

/// Fixed system message sent with every classification call
const SYSTEM_MESSAGE: &str = "You are a helpful assistant.";

/// System message for the session usage commentary call
const USAGE_SYSTEM_MESSAGE: &str =
    "You are a witty assistant who makes short, fun comments about API usage.";

/// Line shown in the session summary before any tokens have been spent
pub const IDLE_USAGE_COMMENT: &str =
    "Waiting for you to start analyzing... The tokens are getting restless!";

/// Classifies review text through a chat provider, charging billed tokens
/// to the session it was built with.
pub struct SentimentClassifier {
    provider: Arc<dyn ChatProvider>,
    counter: TokenCounter,
    session: Arc<SessionTotals>,
}

impl SentimentClassifier {
    /// Create a classifier bound to a provider, a local token counter and
    /// a session accumulator
    pub fn new(
        provider: Arc<dyn ChatProvider>,
        counter: TokenCounter,
        session: Arc<SessionTotals>,
    ) -> Self {
        Self {
            provider,
            counter,
            session,
        }
    }

    /// Build the instruction prompt, embedding the review verbatim
    fn build_prompt(review_text: &str) -> String {
        format!(
            "Classify the following customer review. State your answer as a single word, \
             \"positive\", \"negative\" or \"neutral\":\n\n{}",
            review_text
        )
    }

    /// Classify one review.
    ///
    /// `input_tokens` is a local estimate of system message plus prompt,
    /// computed before the call; `response_tokens` is the provider's billed
    /// total for the call and may diverge from the estimate. The billed
    /// total is added to the session accumulator before returning.
    pub async fn classify(&self, review_text: &str) -> Result<ClassificationResult> {
        let prompt = Self::build_prompt(review_text);
        let input_tokens = self.counter.count(SYSTEM_MESSAGE) + self.counter.count(&prompt);

        let request = ChatRequest {
            messages: vec![Message::system(SYSTEM_MESSAGE), Message::user(prompt)],
            model: None,
        };

        let response = self.provider.complete(request).await?;
        let response_tokens = response.usage.total_tokens;

        self.session.add(u64::from(response_tokens));

        debug!(
            "classified review: {} tokens estimated, {} billed",
            input_tokens, response_tokens
        );

        Ok(ClassificationResult {
            sentiment: Sentiment::from_response(&response.content),
            input_tokens,
            response_tokens,
        })
    }

    /// Build the prompt asking for a remark on the session's token spend
    fn build_usage_prompt(total_tokens: u64) -> String {
        format!(
            "Write a single short, witty sentence about someone who has used {} tokens \
             in their API calls. Make it funny and creative, mentioning the specific \
             token count. Keep it under 100 characters.",
            total_tokens
        )
    }

    /// Ask the model for a short, witty remark about the cumulative session
    /// token count.
    ///
    /// Unlike classification calls, the commentary call is not charged to
    /// the session accumulator.
    pub async fn usage_comment(&self, total_tokens: u64) -> Result<String> {
        let request = ChatRequest {
            messages: vec![
                Message::system(USAGE_SYSTEM_MESSAGE),
                Message::user(Self::build_usage_prompt(total_tokens)),
            ],
            model: None,
        };

        let response = self.provider.complete(request).await?;
        Ok(response.content.trim().to_string())
    }
}
