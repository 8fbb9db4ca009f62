//! Prometheus request metrics middleware.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;

/// Shared Prometheus handle, mounted once per `App`.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("alliance")
        .endpoint("/metrics")
        .build()
        .expect("metrics builder")
});
