//! Core types for the review-classification workflow

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single unit of review text awaiting classification.
///
/// Created from user input or one CSV cell; ephemeral unless retained in
/// the finished batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Raw review text
    pub text: String,
}

impl Review {
    /// Create a review from raw text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Sentiment label produced by the classifier.
///
/// The three canonical labels are matched case-insensitively against the
/// model's response. Any other response is preserved verbatim as
/// `Unrecognized` so callers can decide what to do with it, instead of a
/// bare string silently passing prose through as a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Unrecognized(String),
}

impl Sentiment {
    /// Normalize a raw model response into a sentiment label.
    ///
    /// Matching is case-insensitive on the trimmed response, so "positive",
    /// "POSITIVE" and " Positive " all map to [`Sentiment::Positive`].
    pub fn from_response(raw: &str) -> Self {
        let word = raw.trim();
        if word.eq_ignore_ascii_case("positive") {
            Sentiment::Positive
        } else if word.eq_ignore_ascii_case("negative") {
            Sentiment::Negative
        } else if word.eq_ignore_ascii_case("neutral") {
            Sentiment::Neutral
        } else {
            Sentiment::Unrecognized(word.to_string())
        }
    }

    /// Whether this is one of the three canonical labels
    pub fn is_canonical(&self) -> bool {
        !matches!(self, Sentiment::Unrecognized(_))
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Unrecognized(raw) => write!(f, "{}", raw),
        }
    }
}

/// Outcome of classifying one review. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Normalized sentiment label
    pub sentiment: Sentiment,
    /// Local estimate of prompt tokens, computed before the call
    pub input_tokens: usize,
    /// Total tokens billed by the provider for the call (prompt + completion)
    pub response_tokens: u32,
}

/// Count and percentage share for one label class
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LabelShare {
    pub count: usize,
    /// Share of the batch as a percentage; 0.0 for an empty batch
    pub percent: f64,
}

impl fmt::Display for LabelShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}%)", self.count, self.percent)
    }
}

/// Aggregate label distribution over a finished batch.
///
/// Labels absent from the result set count as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SentimentBreakdown {
    pub positive: LabelShare,
    pub negative: LabelShare,
    pub neutral: LabelShare,
    pub unrecognized: LabelShare,
}

impl SentimentBreakdown {
    /// Compute the distribution over a slice of labels.
    pub fn from_sentiments(sentiments: &[Sentiment]) -> Self {
        let total = sentiments.len();
        let mut positive = 0usize;
        let mut negative = 0usize;
        let mut neutral = 0usize;
        let mut unrecognized = 0usize;

        for sentiment in sentiments {
            match sentiment {
                Sentiment::Positive => positive += 1,
                Sentiment::Negative => negative += 1,
                Sentiment::Neutral => neutral += 1,
                Sentiment::Unrecognized(_) => unrecognized += 1,
            }
        }

        // Empty batches must not divide by zero.
        let share = |count: usize| LabelShare {
            count,
            percent: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        };

        Self {
            positive: share(positive),
            negative: share(negative),
            neutral: share(neutral),
            unrecognized: share(unrecognized),
        }
    }
}

/// An ordered batch of reviews with their classification outcomes.
///
/// Invariant: `sentiments.len() == reviews.len()` and `sentiments[i]` is
/// the label for `reviews[i]`.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewBatch {
    /// Input reviews, in submission order
    pub reviews: Vec<Review>,
    /// Labels aligned with `reviews` by position
    pub sentiments: Vec<Sentiment>,
    /// Sum of provider-billed tokens across the batch
    pub total_tokens: u64,
    /// Label distribution with counts and percentage shares
    pub breakdown: SentimentBreakdown,
}

impl ReviewBatch {
    /// Number of reviews in the batch
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the batch is empty
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_title_cases_canonical_labels() {
        assert_eq!(Sentiment::from_response("positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_response("POSITIVE"), Sentiment::Positive);
        assert_eq!(Sentiment::from_response(" Negative "), Sentiment::Negative);
        assert_eq!(Sentiment::from_response("neutral"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_response("Positive").to_string(), "Positive");
        assert_eq!(Sentiment::from_response("negative").to_string(), "Negative");
    }

    #[test]
    fn test_from_response_preserves_unexpected_text() {
        let raw = "I think this review is mostly positive overall";
        let sentiment = Sentiment::from_response(raw);
        assert_eq!(sentiment, Sentiment::Unrecognized(raw.to_string()));
        assert!(!sentiment.is_canonical());
        assert_eq!(sentiment.to_string(), raw);
    }

    #[test]
    fn test_unexpected_text_is_trimmed_but_otherwise_untouched() {
        let sentiment = Sentiment::from_response("  Hard to Say, Really.  \n");
        assert_eq!(
            sentiment,
            Sentiment::Unrecognized("Hard to Say, Really.".to_string())
        );
    }

    #[test]
    fn test_breakdown_counts_and_percentages() {
        let sentiments = vec![
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Neutral,
        ];
        let breakdown = SentimentBreakdown::from_sentiments(&sentiments);
        assert_eq!(breakdown.positive.count, 1);
        assert_eq!(breakdown.negative.count, 1);
        assert_eq!(breakdown.neutral.count, 1);
        assert_eq!(breakdown.unrecognized.count, 0);
        assert!((breakdown.positive.percent - 33.33).abs() < 0.01);

        let sum = breakdown.positive.percent + breakdown.negative.percent + breakdown.neutral.percent;
        assert!((sum - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_breakdown_absent_labels_count_zero() {
        let sentiments = vec![Sentiment::Positive, Sentiment::Positive];
        let breakdown = SentimentBreakdown::from_sentiments(&sentiments);
        assert_eq!(breakdown.positive.count, 2);
        assert!((breakdown.positive.percent - 100.0).abs() < f64::EPSILON);
        assert_eq!(breakdown.negative.count, 0);
        assert_eq!(breakdown.negative.percent, 0.0);
    }

    #[test]
    fn test_breakdown_empty_batch_does_not_divide_by_zero() {
        let breakdown = SentimentBreakdown::from_sentiments(&[]);
        assert_eq!(breakdown.positive.count, 0);
        assert_eq!(breakdown.positive.percent, 0.0);
        assert_eq!(breakdown.unrecognized.percent, 0.0);
    }

    #[test]
    fn test_label_share_display_two_decimals() {
        let share = LabelShare { count: 1, percent: 100.0 / 3.0 };
        assert_eq!(share.to_string(), "1 (33.33%)");
    }
}
