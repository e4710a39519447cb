//! Request and render metrics.
//!
//! Every recording goes to the `metrics` facade (exported by the Prometheus
//! recorder installed in `main`) and to in-process counters that back the
//! JSON snapshot at `/api/metrics`.

use metrics::{counter, histogram};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Metrics collector for the map API.
#[derive(Debug)]
pub struct MetricsCollector {
    pub requests: AtomicU64,
    pub renders_total: AtomicU64,
    pub client_errors: AtomicU64,
    pub server_errors: AtomicU64,

    render_times: Mutex<TimingStats>,
    start_time: Instant,
}

#[derive(Debug, Default)]
struct TimingStats {
    count: u64,
    total_us: u64,
    min_us: u64,
    max_us: u64,
    last_us: u64,
}

impl TimingStats {
    fn record(&mut self, duration_us: u64) {
        self.count += 1;
        self.total_us += duration_us;
        self.last_us = duration_us;
        if self.min_us == 0 || duration_us < self.min_us {
            self.min_us = duration_us;
        }
        if duration_us > self.max_us {
            self.max_us = duration_us;
        }
    }

    fn avg_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.total_us as f64 / self.count as f64) / 1000.0
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            requests: AtomicU64::new(0),
            renders_total: AtomicU64::new(0),
            client_errors: AtomicU64::new(0),
            server_errors: AtomicU64::new(0),
            render_times: Mutex::new(TimingStats::default()),
            start_time: Instant::now(),
        }
    }

    /// Record a finished `/map` request by its HTTP status.
    pub fn record_request(&self, status: u16) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        counter!("map_requests_total", "status" => status.to_string()).increment(1);
    }

    /// Record a successful render.
    pub fn record_render(&self, duration: Duration, bytes: usize) {
        self.renders_total.fetch_add(1, Ordering::Relaxed);
        histogram!("map_render_duration_seconds").record(duration.as_secs_f64());
        histogram!("map_png_bytes").record(bytes as f64);

        if let Ok(mut times) = self.render_times.lock() {
            times.record(duration.as_micros() as u64);
        }
    }

    /// Record a failed request by error kind.
    pub fn record_error(&self, kind: &'static str, client_error: bool) {
        if client_error {
            self.client_errors.fetch_add(1, Ordering::Relaxed);
        } else {
            self.server_errors.fetch_add(1, Ordering::Relaxed);
        }
        counter!("map_errors_total", "kind" => kind).increment(1);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let (render_avg_ms, render_min_ms, render_max_ms, render_last_ms) =
            match self.render_times.lock() {
                Ok(t) => (
                    t.avg_ms(),
                    t.min_us as f64 / 1000.0,
                    t.max_us as f64 / 1000.0,
                    t.last_us as f64 / 1000.0,
                ),
                Err(_) => (0.0, 0.0, 0.0, 0.0),
            };

        MetricsSnapshot {
            uptime_secs: self.start_time.elapsed().as_secs(),
            requests: self.requests.load(Ordering::Relaxed),
            renders_total: self.renders_total.load(Ordering::Relaxed),
            client_errors: self.client_errors.load(Ordering::Relaxed),
            server_errors: self.server_errors.load(Ordering::Relaxed),
            render_avg_ms,
            render_min_ms,
            render_max_ms,
            render_last_ms,
        }
    }
}

/// Point-in-time view of the collector, served as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub uptime_secs: u64,
    pub requests: u64,
    pub renders_total: u64,
    pub client_errors: u64,
    pub server_errors: u64,
    pub render_avg_ms: f64,
    pub render_min_ms: f64,
    pub render_max_ms: f64,
    pub render_last_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_counts() {
        let metrics = MetricsCollector::new();
        metrics.record_request(200);
        metrics.record_render(Duration::from_millis(20), 1024);
        metrics.record_request(400);
        metrics.record_error("invalid_input", true);

        let snap = metrics.snapshot();
        assert_eq!(snap.requests, 2);
        assert_eq!(snap.renders_total, 1);
        assert_eq!(snap.client_errors, 1);
        assert_eq!(snap.server_errors, 0);
        assert!((snap.render_last_ms - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_timing_min_max() {
        let mut stats = TimingStats::default();
        stats.record(3000);
        stats.record(1000);
        stats.record(2000);
        assert_eq!(stats.min_us, 1000);
        assert_eq!(stats.max_us, 3000);
        assert!((stats.avg_ms() - 2.0).abs() < 1e-9);
    }
}
