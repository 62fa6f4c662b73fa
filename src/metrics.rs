/// Metrics and monitoring for the crawl endpoint
///
/// Tracks success rates, error counts, and response times for page renders

use std::sync::{Arc, Mutex};
use std::time::Duration;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CrawlMetrics {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub last_success: Option<DateTime<Utc>>,
    pub last_failure: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub average_response_time_ms: f64,
    pub total_response_time_ms: u64,
    pub timeout_count: u64,
}

impl CrawlMetrics {
    pub fn success_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            (self.successful_requests as f64 / self.total_requests as f64) * 100.0
        }
    }

    pub fn record_success(&mut self, response_time: Duration) {
        self.total_requests += 1;
        self.successful_requests += 1;
        self.last_success = Some(Utc::now());

        let response_ms = response_time.as_millis() as u64;
        self.total_response_time_ms += response_ms;
        self.average_response_time_ms =
            self.total_response_time_ms as f64 / self.successful_requests as f64;
    }

    pub fn record_failure(&mut self, error: String) {
        self.total_requests += 1;
        self.failed_requests += 1;
        self.last_failure = Some(Utc::now());

        if error.to_lowercase().contains("timeout") {
            self.timeout_count += 1;
        }
        self.last_error = Some(error);
    }
}

/// Thread-safe tracker shared across request handlers
#[derive(Clone)]
pub struct MetricsTracker {
    metrics: Arc<Mutex<CrawlMetrics>>,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(Mutex::new(CrawlMetrics::default())),
        }
    }

    pub fn record_success(&self, response_time: Duration) {
        let mut metrics = self.metrics.lock().unwrap();
        metrics.record_success(response_time);

        log::info!(
            "Render success - Response time: {}ms - Success rate: {:.2}%",
            response_time.as_millis(),
            metrics.success_rate()
        );
    }

    pub fn record_failure(&self, error: String) {
        let mut metrics = self.metrics.lock().unwrap();
        metrics.record_failure(error.clone());

        log::warn!(
            "Render failure - Error: {} - Success rate: {:.2}%",
            error,
            metrics.success_rate()
        );
    }

    pub fn snapshot(&self) -> CrawlMetrics {
        self.metrics.lock().unwrap().clone()
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}
