//! Observability: thread-local telemetry counters and the sink boundary.
//!
//! Recording never changes results and never crosses threads.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport, EventState, OutputCounters, OutputSummary};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
