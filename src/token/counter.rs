//! Local token counting backed by tiktoken

use tiktoken_rs::CoreBPE;

use crate::error::{Result, SentiraError};

/// Token counter bound to one model's BPE vocabulary.
///
/// Counts are deterministic for a fixed (text, model) pair and are a local
/// estimate only; the provider's own accounting is what gets billed.
pub struct TokenCounter {
    bpe: CoreBPE,
    model: String,
}

impl TokenCounter {
    /// Resolve the tokenizer for a model identifier.
    ///
    /// An identifier the tokenizer does not recognize is a configuration
    /// error, surfaced before any API spend.
    pub fn for_model(model: &str) -> Result<Self> {
        let bpe = tiktoken_rs::get_bpe_from_model(model).map_err(|e| {
            SentiraError::Configuration(format!("unrecognized model '{}': {}", model, e))
        })?;

        Ok(Self {
            bpe,
            model: model.to_string(),
        })
    }

    /// Model identifier this counter was built for
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Count tokens in text. No side effects.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }
}

/// Count tokens in `text` under `model`'s vocabulary.
pub fn count_tokens(text: &str, model: &str) -> Result<usize> {
    Ok(TokenCounter::for_model(model)?.count(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_is_deterministic() {
        let counter = TokenCounter::for_model("gpt-3.5-turbo").unwrap();
        let text = "Great food, terrible service.";
        assert_eq!(counter.count(text), counter.count(text));
        assert!(counter.count(text) > 0);
    }

    #[test]
    fn test_empty_text_counts_zero() {
        let counter = TokenCounter::for_model("gpt-3.5-turbo").unwrap();
        assert_eq!(counter.count(""), 0);
    }

    #[test]
    fn test_unrecognized_model_is_configuration_error() {
        let err = count_tokens("hello", "not-a-real-model").unwrap_err();
        assert!(matches!(err, SentiraError::Configuration(_)));
    }

    #[test]
    fn test_free_function_matches_counter() {
        let counter = TokenCounter::for_model("gpt-3.5-turbo").unwrap();
        let text = "It was okay";
        assert_eq!(count_tokens(text, "gpt-3.5-turbo").unwrap(), counter.count(text));
    }
}
