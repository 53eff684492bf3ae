//! Session-wide token accounting

use std::sync::atomic::{AtomicU64, Ordering};

/// Default USD price per billed token.
///
/// Provider list price at time of writing; callers should treat this as
/// configuration, not a constant of nature (see `PricingSettings`).
pub const DEFAULT_USD_PER_TOKEN: f64 = 0.000002;

/// Append-only token counter for one interactive session.
///
/// Shared via `Arc` into every classifier call site instead of living in
/// process-global state. There is no decrement and no reset short of
/// dropping the session.
#[derive(Debug, Default)]
pub struct SessionTotals {
    total: AtomicU64,
}

impl SessionTotals {
    /// Create a session counter starting at zero
    pub fn new() -> Self {
        Self {
            total: AtomicU64::new(0),
        }
    }

    /// Add billed tokens from one completed call
    pub fn add(&self, tokens: u64) {
        self.total.fetch_add(tokens, Ordering::Relaxed);
    }

    /// Total tokens consumed so far. Monotonically non-decreasing.
    pub fn read(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Approximate cost at the given USD-per-token price
    pub fn cost_usd(&self, usd_per_token: f64) -> f64 {
        self.read() as f64 * usd_per_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_accumulate() {
        let session = SessionTotals::new();
        assert_eq!(session.read(), 0);
        session.add(10);
        session.add(15);
        assert_eq!(session.read(), 25);
    }

    #[test]
    fn test_reads_are_monotone() {
        let session = SessionTotals::new();
        let mut last = session.read();
        for tokens in [3u64, 0, 7, 12] {
            session.add(tokens);
            let now = session.read();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn test_cost_at_default_price() {
        let session = SessionTotals::new();
        session.add(1_000_000);
        let cost = session.cost_usd(DEFAULT_USD_PER_TOKEN);
        assert!((cost - 2.0).abs() < 1e-9);
        assert_eq!(format!("{:.4}", cost), "2.0000");
    }
}
