//! Token counting and session accounting

mod counter;
mod session;

pub use counter::{count_tokens, TokenCounter};
pub use session::{SessionTotals, DEFAULT_USD_PER_TOKEN};
