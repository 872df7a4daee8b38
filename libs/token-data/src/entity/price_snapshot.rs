use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::DataError;

/// Single price observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price_usd: f64,
}

/// Historical price samples, ascending by time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalPriceSeries {
    points: Vec<PricePoint>,
}

/// Raw `market_chart` payload: `[unix_millis, value]` pairs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketChart {
    #[serde(default)]
    pub prices: Vec<[f64; 2]>,
}

impl HistoricalPriceSeries {
    /// Build a series, ordering the samples by timestamp
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|point| point.timestamp);
        Self { points }
    }

    pub fn from_market_chart(chart: MarketChart) -> Result<Self, DataError> {
        let points = chart
            .prices
            .into_iter()
            .map(|[millis, price_usd]| {
                DateTime::from_timestamp_millis(millis as i64)
                    .map(|timestamp| PricePoint {
                        timestamp,
                        price_usd,
                    })
                    .ok_or_else(|| {
                        DataError::InvalidPayload(format!("price timestamp out of range: {millis}"))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(points))
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.price_usd).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
