use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use sentira::batch::BatchRunner;
use sentira::classifier::{SentimentClassifier, IDLE_USAGE_COMMENT};
use sentira::cli::{Cli, Command};
use sentira::config::Settings;
use sentira::input;
use sentira::llm::OpenAiChatProvider;
use sentira::token::{SessionTotals, TokenCounter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut settings = Settings::load(&cli.config)?;
    settings.merge_cli(&cli);

    // Column listing needs no tokenizer, provider or API key.
    if let Command::Batch {
        file,
        list_columns: true,
        ..
    } = &cli.command
    {
        for name in input::text_columns(file)? {
            println!("{}", name);
        }
        return Ok(());
    }

    let session = Arc::new(SessionTotals::new());
    let counter = TokenCounter::for_model(&settings.llm.model)?;
    let provider = Arc::new(OpenAiChatProvider::new(&settings.llm)?);
    let classifier = SentimentClassifier::new(provider, counter, session.clone());

    match &cli.command {
        Command::Classify { text } => {
            let outcome = classifier.classify(text).await?;
            println!("Sentiment: {}", outcome.sentiment);
            println!("Estimated prompt tokens: {}", outcome.input_tokens);
            println!("Billed tokens: {}", outcome.response_tokens);
        }
        Command::Batch { file, column, .. } => {
            let (column, reviews) = input::load_reviews(file, column.as_deref())?;
            info!(
                "classifying {} reviews from column '{}' of {}",
                reviews.len(),
                column,
                file.display()
            );

            let batch = BatchRunner::new(&classifier)
                .with_concurrency(settings.batch.concurrency)
                .run(reviews)
                .await
                .map_err(|e| {
                    error!("batch aborted after {} of {} reviews", e.completed, e.total);
                    anyhow::Error::new(e)
                })?;

            for (review, sentiment) in batch.reviews.iter().zip(&batch.sentiments) {
                println!("{}\t{}", sentiment, review.text);
            }

            println!();
            println!("Sentiment distribution over {} reviews:", batch.len());
            println!("  Positive: {}", batch.breakdown.positive);
            println!("  Negative: {}", batch.breakdown.negative);
            println!("  Neutral: {}", batch.breakdown.neutral);
            if batch.breakdown.unrecognized.count > 0 {
                println!("  Unrecognized: {}", batch.breakdown.unrecognized);
            }
            println!("Batch tokens: {}", batch.total_tokens);
        }
    }

    println!();
    println!("Session totals:");
    println!("  Total tokens: {}", session.read());
    println!(
        "  Approximate cost: ${:.4} USD",
        session.cost_usd(settings.pricing.usd_per_token)
    );

    let comment = if session.read() > 0 {
        classifier.usage_comment(session.read()).await?
    } else {
        IDLE_USAGE_COMMENT.to_string()
    };
    println!("  {}", comment);

    Ok(())
}
