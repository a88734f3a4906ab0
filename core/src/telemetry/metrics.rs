use serde::Serialize;
use std::sync::Mutex;

/// Counters for the two page views and for empty filter results.
pub struct ViewMetrics {
    inner: Mutex<Counters>,
}

#[derive(Default)]
struct Counters {
    gallery_views: usize,
    map_views: usize,
    empty_results: usize,
}

/// Point-in-time copy of the counters, shaped for a JSON reply.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ViewMetricsSnapshot {
    pub gallery_views: usize,
    pub map_views: usize,
    pub empty_results: usize,
}

impl ViewMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters::default()),
        }
    }

    pub fn record_gallery_view(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.gallery_views += 1;
        }
    }

    pub fn record_map_view(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.map_views += 1;
        }
    }

    pub fn record_empty_result(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.empty_results += 1;
        }
    }

    pub fn snapshot(&self) -> ViewMetricsSnapshot {
        if let Ok(counters) = self.inner.lock() {
            ViewMetricsSnapshot {
                gallery_views: counters.gallery_views,
                map_views: counters.map_views,
                empty_results: counters.empty_results,
            }
        } else {
            ViewMetricsSnapshot {
                gallery_views: 0,
                map_views: 0,
                empty_results: 0,
            }
        }
    }
}

impl Default for ViewMetrics {
    fn default() -> Self {
        Self::new()
    }
}
