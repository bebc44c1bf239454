// src/application/ports/metrics.rs
use std::time::Duration;

/// Sink for coarse timing of query operations.
pub trait SearchMetrics: Send + Sync {
    fn record(&self, operation: &'static str, elapsed: Duration);
}
