//! Ordered batch classification

use futures::stream::{self, StreamExt};
use tracing::info;

use crate::classifier::SentimentClassifier;
use crate::domain::{Review, ReviewBatch, SentimentBreakdown};
use crate::error::BatchError;

/// Progress callback, invoked with `(completed, total)` after each item
pub type ProgressFn = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Runs a batch of reviews through the classifier, preserving input order.
pub struct BatchRunner<'a> {
    classifier: &'a SentimentClassifier,
    concurrency: usize,
    on_progress: Option<ProgressFn>,
}

impl<'a> BatchRunner<'a> {
    /// Create a sequential batch runner
    pub fn new(classifier: &'a SentimentClassifier) -> Self {
        Self {
            classifier,
            concurrency: 1,
            on_progress: None,
        }
    }

    /// Cap on simultaneous in-flight API calls. 1 keeps strictly
    /// sequential processing; values above 1 overlap calls while results
    /// stay aligned with input positions.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Register a progress callback
    pub fn with_progress(mut self, on_progress: ProgressFn) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    /// Classify every review in the batch.
    ///
    /// The first failing call aborts the whole batch; the error records how
    /// many reviews finished before the failure. In-progress results are
    /// discarded, but their billed tokens remain charged to the session.
    pub async fn run(&self, reviews: Vec<Review>) -> Result<ReviewBatch, BatchError> {
        let total = reviews.len();
        let mut sentiments = Vec::with_capacity(total);
        let mut total_tokens = 0u64;

        // buffered() polls up to `concurrency` futures at once but yields
        // completions in input order, so sentiments[i] always maps to
        // reviews[i].
        let mut results = stream::iter(
            reviews
                .iter()
                .map(|review| self.classifier.classify(&review.text)),
        )
        .buffered(self.concurrency);

        while let Some(result) = results.next().await {
            match result {
                Ok(outcome) => {
                    total_tokens += u64::from(outcome.response_tokens);
                    sentiments.push(outcome.sentiment);

                    let completed = sentiments.len();
                    if let Some(on_progress) = &self.on_progress {
                        on_progress(completed, total);
                    }
                    info!("classified {}/{} reviews", completed, total);
                }
                Err(source) => {
                    return Err(BatchError {
                        completed: sentiments.len(),
                        total,
                        source,
                    });
                }
            }
        }
        drop(results);

        let breakdown = SentimentBreakdown::from_sentiments(&sentiments);

        Ok(ReviewBatch {
            reviews,
            sentiments,
            total_tokens,
            breakdown,
        })
    }
}
