//! Lookup metrics and observability.
//!
//! Counters for content loads and translation lookups. A `LookupMetrics` is
//! owned by whoever composes the content cache and translator, and shared
//! between them through an `Arc`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Accesses served from an already-populated content cache
    cache_hits: AtomicUsize,

    /// Attempts to load the content source
    loads: AtomicUsize,

    /// Load attempts that failed
    load_failures: AtomicUsize,

    /// Key-path lookups performed
    lookups: AtomicUsize,

    /// Lookups that fell back to returning the key path
    lookup_misses: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_load_failure(&self) {
        self.load_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup_miss(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot the counters.
    pub fn report(&self) -> MetricsReport {
        let cache_hits = self.cache_hits.load(Ordering::Relaxed);
        let loads = self.loads.load(Ordering::Relaxed);
        let load_failures = self.load_failures.load(Ordering::Relaxed);
        let lookups = self.lookups.load(Ordering::Relaxed);
        let lookup_misses = self.lookup_misses.load(Ordering::Relaxed);

        MetricsReport {
            cache_hits,
            loads,
            load_failures,
            lookups,
            lookup_misses,
            lookup_hit_rate: percentage(lookups.saturating_sub(lookup_misses), lookups),
        }
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Point-in-time copy of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub cache_hits: usize,
    pub loads: usize,
    pub load_failures: usize,
    pub lookups: usize,
    pub lookup_misses: usize,

    /// Share of lookups that resolved to a translation, as a percentage (0-100)
    pub lookup_hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_empty() {
        let report = LookupMetrics::new().report();

        assert_eq!(report.cache_hits, 0);
        assert_eq!(report.loads, 0);
        assert_eq!(report.load_failures, 0);
        assert_eq!(report.lookups, 0);
        assert_eq!(report.lookup_hit_rate, 0.0);
    }

    #[test]
    fn test_counters() {
        let metrics = LookupMetrics::new();
        metrics.record_cache_hit();
        metrics.record_cache_hit();
        metrics.record_load();
        metrics.record_load_failure();

        let report = metrics.report();
        assert_eq!(report.cache_hits, 2);
        assert_eq!(report.loads, 1);
        assert_eq!(report.load_failures, 1);
    }

    #[test]
    fn test_lookup_hit_rate() {
        let metrics = LookupMetrics::new();

        // 4 lookups, 1 miss = 75%
        for _ in 0..4 {
            metrics.record_lookup();
        }
        metrics.record_lookup_miss();

        let report = metrics.report();
        assert_eq!(report.lookups, 4);
        assert_eq!(report.lookup_misses, 1);
        assert_eq!(report.lookup_hit_rate, 75.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = LookupMetrics::new();
        metrics.record_lookup();

        let json = serde_json::to_value(metrics.report()).expect("Should serialize");
        assert_eq!(json["lookups"], 1);
        assert_eq!(json["lookup_hit_rate"], 100.0);
    }
}
