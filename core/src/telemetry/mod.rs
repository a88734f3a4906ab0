pub mod metrics;

pub use metrics::{ViewMetrics, ViewMetricsSnapshot};
