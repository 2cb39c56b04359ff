use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

/// Trait for measuring layout performance.
///
/// This allows us to swap implementations. Timing is only taken when the crate is built
/// with the "profiling" feature; otherwise the engine never calls into the profiler.
pub trait Profiler: Send + Sync {
    /// Accumulates time spent under `key` (one key per pass).
    fn record(&self, key: &str, duration: Duration);

    /// Records one complete layout run over `nodes` visited nodes.
    fn record_run(&self, nodes: usize, duration: Duration);

    fn reset(&self);

    /// Get the average wall time of a complete run.
    fn get_avg_run_time(&self) -> Option<Duration>;
}

/// A no-op profiler for production use.
/// The compiler will inline these and eliminate the overhead.
pub struct NoOpProfiler;

impl Profiler for NoOpProfiler {
    #[inline(always)]
    fn record(&self, _key: &str, _duration: Duration) {}
    #[inline(always)]
    fn record_run(&self, _nodes: usize, _duration: Duration) {}
    #[inline(always)]
    fn reset(&self) {}
    #[inline(always)]
    fn get_avg_run_time(&self) -> Option<Duration> {
        None
    }
}

/// Real profiler implementation.
/// Only useful when the "profiling" feature is enabled or for debugging.
pub struct DebugProfiler {
    stats: Mutex<HashMap<String, Duration>>,
    runs: AtomicUsize,
    /// Total nodes visited across all runs
    nodes_visited: AtomicUsize,
    /// Total run time in nanoseconds
    total_run_time_ns: AtomicU64,
}

impl DebugProfiler {
    pub fn new() -> Self {
        Self {
            stats: Mutex::new(HashMap::new()),
            runs: AtomicUsize::new(0),
            nodes_visited: AtomicUsize::new(0),
            total_run_time_ns: AtomicU64::new(0),
        }
    }

    /// Total time accumulated under `key`, if anything was recorded.
    pub fn total(&self, key: &str) -> Option<Duration> {
        self.stats.lock().ok()?.get(key).copied()
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::Acquire)
    }

    pub fn log_summary(&self) {
        let runs = self.runs.load(Ordering::Acquire);
        if runs == 0 {
            return;
        }

        log::info!("=== Layout Profile Summary ===");
        let nodes = self.nodes_visited.load(Ordering::Acquire);
        log::info!(
            "Runs: {} ({:.1} nodes/run)",
            runs,
            nodes as f64 / runs as f64
        );

        let time_ns = self.total_run_time_ns.load(Ordering::Acquire);
        if nodes > 0 && time_ns > 0 {
            let time_secs = time_ns as f64 / 1_000_000_000.0;
            log::info!(
                "Throughput: {:.2} nodes/sec ({} nodes in {:.3}s)",
                nodes as f64 / time_secs,
                nodes,
                time_secs
            );
        }

        if let Ok(stats) = self.stats.lock() {
            let mut keys: Vec<_> = stats.iter().collect();
            keys.sort_by(|a, b| a.0.cmp(b.0));
            for (k, v) in keys {
                log::info!("{}: {:?}", k, v);
            }
        }
    }
}

impl Default for DebugProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Profiler for DebugProfiler {
    fn record(&self, key: &str, duration: Duration) {
        if let Ok(mut g) = self.stats.lock() {
            *g.entry(key.to_string()).or_default() += duration;
        }
    }

    fn record_run(&self, nodes: usize, duration: Duration) {
        self.runs.fetch_add(1, Ordering::Release);
        self.nodes_visited.fetch_add(nodes, Ordering::Release);
        // Saturating conversion to prevent overflow on very long durations
        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        self.total_run_time_ns.fetch_add(nanos, Ordering::Release);
    }

    fn reset(&self) {
        if let Ok(mut g) = self.stats.lock() {
            g.clear();
        }
        self.runs.store(0, Ordering::Release);
        self.nodes_visited.store(0, Ordering::Release);
        self.total_run_time_ns.store(0, Ordering::Release);
    }

    fn get_avg_run_time(&self) -> Option<Duration> {
        let runs = self.runs.load(Ordering::Acquire);
        let time_ns = self.total_run_time_ns.load(Ordering::Acquire);
        if runs == 0 {
            return None;
        }
        Some(Duration::from_nanos(time_ns / runs as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_profiler_accumulates_per_key() {
        let profiler = DebugProfiler::new();
        profiler.record("pass0", Duration::from_millis(2));
        profiler.record("pass0", Duration::from_millis(3));
        profiler.record("pass1", Duration::from_millis(1));

        assert_eq!(profiler.total("pass0"), Some(Duration::from_millis(5)));
        assert_eq!(profiler.total("pass1"), Some(Duration::from_millis(1)));
        assert_eq!(profiler.total("pass2"), None);
    }

    #[test]
    fn test_debug_profiler_average_run_time() {
        let profiler = DebugProfiler::new();
        assert_eq!(profiler.get_avg_run_time(), None);

        profiler.record_run(10, Duration::from_micros(100));
        profiler.record_run(10, Duration::from_micros(300));
        assert_eq!(profiler.runs(), 2);
        assert_eq!(profiler.get_avg_run_time(), Some(Duration::from_micros(200)));

        profiler.reset();
        assert_eq!(profiler.runs(), 0);
        assert_eq!(profiler.total("pass0"), None);
    }

    #[test]
    fn test_noop_profiler_reports_nothing() {
        let profiler = NoOpProfiler;
        profiler.record_run(1, Duration::from_secs(1));
        assert_eq!(profiler.get_avg_run_time(), None);
    }
}
