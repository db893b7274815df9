//! Metrics sink boundary.
//!
//! Comparator selection never touches `obs::metrics` directly; every event
//! goes through `record`, which routes to a scoped override or the
//! thread-local default.
use crate::{comparator::ComparatorKind, obs::metrics};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    ComparatorBuilt { kind: ComparatorKind },
    ComparatorRejected { wire_tag: i32 },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that accumulates into the thread-local counters.
/// Used whenever no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::ComparatorBuilt { kind } => metrics::with_state_mut(|m| {
                m.ops.comparators_built = m.ops.comparators_built.saturating_add(1);
                let entry = m.built_by_kind.entry(kind.to_string()).or_default();
                *entry = entry.saturating_add(1);
            }),

            MetricsEvent::ComparatorRejected { wire_tag } => metrics::with_state_mut(|m| {
                m.ops.comparators_rejected = m.ops.comparators_rejected.saturating_add(1);
                let entry = m.rejected_by_tag.entry(wire_tag).or_default();
                *entry = entry.saturating_add(1);
            }),
        }
    }
}

pub(crate) fn record(event: MetricsEvent) {
    // Clone out of the slot so a sink may itself install overrides.
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GlobalMetricsSink.record(event),
    }
}

/// Snapshot the current thread's metrics.
#[must_use]
pub fn metrics_report() -> metrics::EventState {
    metrics::report()
}

/// Reset all metrics counters for the current thread.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
///
/// The previous sink is restored on every exit, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}
