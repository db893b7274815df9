//! Observability: comparator-selection counters and the sink abstraction.
//!
//! Nothing here prints; callers read counters through `metrics_report` or
//! install their own `MetricsSink`.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventState};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
