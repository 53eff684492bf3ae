//! # Sentira - Customer Review Sentiment Analyzer
//!
//! Sentira classifies customer-review text through an OpenAI-compatible
//! chat-completions API and accounts for the tokens it spends doing so.
//! It takes a single review or a CSV column, normalizes the model's answer
//! into a sentiment label, and reports a label distribution alongside
//! cumulative session token usage and an approximate USD cost.
//!
//! ## Architecture
//!
//! - `domain` - Core types (Review, Sentiment, ReviewBatch)
//! - `llm` - Chat-completion provider seam with the OpenAI implementation
//! - `token` - Local token counting (tiktoken) and session accounting
//! - `classifier` - Prompt construction and label normalization
//! - `batch` - Order-preserving batch execution with progress reporting
//! - `input` - CSV ingestion and text-column detection
//! - `config` - Layered settings (file, environment, CLI)

pub mod batch;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod llm;
pub mod token;
