// src/infrastructure/metrics.rs
use crate::application::ports::metrics::SearchMetrics;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

/// Emits one debug event per recorded operation.
#[derive(Default, Clone)]
pub struct TracingSearchMetrics;

impl SearchMetrics for TracingSearchMetrics {
    fn record(&self, operation: &'static str, elapsed: Duration) {
        tracing::debug!(
            operation,
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "query timing"
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub count: u64,
    pub total: Duration,
}

impl MetricsSnapshot {
    pub fn average(&self) -> Option<Duration> {
        if self.count == 0 {
            return None;
        }
        let count = u32::try_from(self.count).unwrap_or(u32::MAX);
        Some(self.total / count)
    }
}

/// Accumulates call count and total elapsed time. Owned by whoever builds
/// it; there is no process-wide instance.
#[derive(Debug, Default)]
pub struct InMemorySearchMetrics {
    count: AtomicU64,
    total_micros: AtomicU64,
}

impl InMemorySearchMetrics {
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            count: self.count.load(Ordering::Relaxed),
            total: Duration::from_micros(self.total_micros.load(Ordering::Relaxed)),
        }
    }

    pub fn clear(&self) {
        self.count.store(0, Ordering::Relaxed);
        self.total_micros.store(0, Ordering::Relaxed);
    }
}

impl SearchMetrics for InMemorySearchMetrics {
    fn record(&self, _operation: &'static str, elapsed: Duration) {
        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.total_micros.fetch_add(micros, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}
