use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sentira - Customer review sentiment analyzer
#[derive(Parser, Debug, Clone)]
#[command(name = "sentira", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "SENTIRA_CONFIG", default_value = "sentira.toml")]
    pub config: PathBuf,

    /// Model identifier (overrides configuration)
    #[arg(long, env = "SENTIRA_MODEL")]
    pub model: Option<String>,

    /// Maximum simultaneous in-flight API calls (overrides configuration)
    #[arg(long, env = "SENTIRA_CONCURRENCY")]
    pub concurrency: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a single review
    Classify {
        /// The review text
        text: String,
    },
    /// Classify a column of reviews from a CSV file
    Batch {
        /// CSV file with one review per row
        file: PathBuf,

        /// Column holding the review text (defaults to the first text column)
        #[arg(long)]
        column: Option<String>,

        /// List detected text columns and exit
        #[arg(long)]
        list_columns: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sentira", "classify", "Great food!"]);
        assert_eq!(cli.config, PathBuf::from("sentira.toml"));
        assert!(cli.model.is_none());
        assert!(cli.concurrency.is_none());
        match cli.command {
            Command::Classify { text } => assert_eq!(text, "Great food!"),
            _ => panic!("expected classify command"),
        }
    }

    #[test]
    fn test_batch_args() {
        let cli = Cli::parse_from([
            "sentira",
            "--config",
            "custom.toml",
            "--model",
            "gpt-4o-mini",
            "--concurrency",
            "4",
            "batch",
            "reviews.csv",
            "--column",
            "review",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.model, Some("gpt-4o-mini".to_string()));
        assert_eq!(cli.concurrency, Some(4));
        match cli.command {
            Command::Batch {
                file,
                column,
                list_columns,
            } => {
                assert_eq!(file, PathBuf::from("reviews.csv"));
                assert_eq!(column, Some("review".to_string()));
                assert!(!list_columns);
            }
            _ => panic!("expected batch command"),
        }
    }

    #[test]
    fn test_batch_list_columns_flag() {
        let cli = Cli::parse_from(["sentira", "batch", "reviews.csv", "--list-columns"]);
        match cli.command {
            Command::Batch { list_columns, .. } => assert!(list_columns),
            _ => panic!("expected batch command"),
        }
    }
}
