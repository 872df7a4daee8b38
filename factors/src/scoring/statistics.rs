//! Descriptive statistics over price series and holder tables

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator), `None` for fewer than two values
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// `ln(p_t / p_{t-1})` for each consecutive pair; one shorter than the input
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect()
}

/// Herfindahl-Hirschman Index over holder shares given as fractions of supply
///
/// Whatever the listed holders do not own is counted as one extra holder
/// with share `1 - Σ shares`.
pub fn herfindahl_index(shares: &[f64]) -> f64 {
    let listed: f64 = shares.iter().sum();
    let others = 1.0 - listed;
    shares.iter().map(|s| s * s).sum::<f64>() + others * others
}
