//! Prometheus metrics for the roast service.
//!
//! - Roasts generated, labelled by category
//! - Requests rejected for a blank name
//! - Time spent "thinking" before a roast is returned

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Encoder, Histogram,
    IntCounter, IntCounterVec, TextEncoder,
};

use crate::roast::RoastCategory;

/// Prefix for all metrics
const METRIC_PREFIX: &str = "roast";

lazy_static! {
    /// Total roasts generated by category
    pub static ref ROASTS_GENERATED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_generated_total", METRIC_PREFIX),
        "Total roasts generated",
        &["category"]
    ).unwrap();

    /// Requests rejected because no name was given
    pub static ref BLANK_NAMES_TOTAL: IntCounter = register_int_counter!(
        format!("{}_blank_names_total", METRIC_PREFIX),
        "Total roast requests rejected for a blank name"
    ).unwrap();

    /// Wall time between request and roast, including the thinking delay
    pub static ref THINKING_SECONDS: Histogram = register_histogram!(
        format!("{}_thinking_seconds", METRIC_PREFIX),
        "Time spent producing a roast",
        vec![0.01, 0.1, 0.5, 1.0, 2.0, 2.5, 5.0]
    ).unwrap();
}

/// Encode all registered metrics in Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording roast metrics
pub struct RoastMetrics;

impl RoastMetrics {
    pub fn record_generated(category: RoastCategory, elapsed_secs: f64) {
        ROASTS_GENERATED_TOTAL
            .with_label_values(&[category.as_str()])
            .inc();
        THINKING_SECONDS.observe(elapsed_secs);
    }

    pub fn record_blank_name() {
        BLANK_NAMES_TOTAL.inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_contains_recorded_metrics() {
        RoastMetrics::record_generated(RoastCategory::Light, 0.2);
        RoastMetrics::record_blank_name();

        let output = encode_metrics().unwrap();
        assert!(output.contains("roast_generated_total"));
        assert!(output.contains("category=\"light\""));
        assert!(output.contains("roast_blank_names_total"));
        assert!(output.contains("roast_thinking_seconds"));
    }
}
