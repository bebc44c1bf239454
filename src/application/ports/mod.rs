// src/application/ports/mod.rs
pub mod metrics;

pub type SearchMetricsPort = dyn metrics::SearchMetrics;
