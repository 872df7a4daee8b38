use alloy::primitives::B256;
use chrono::{DateTime, Utc};

/// Latest oracle price observation with its confidence interval
///
/// Values are stored as the oracle publishes them: fixed-point integers
/// scaled by `10^expo`.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleSnapshot {
    pub feed_id: B256,
    pub raw_price: i64,
    pub raw_confidence: u64,
    pub expo: i32,
    pub publish_time: DateTime<Utc>,
}

impl OracleSnapshot {
    /// Confidence interval half-width in price units
    pub fn confidence(&self) -> f64 {
        self.raw_confidence as f64 * 10f64.powi(self.expo)
    }
}
