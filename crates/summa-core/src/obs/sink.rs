//! Metrics sink boundary.
//!
//! Engine logic MUST NOT touch `obs::metrics` directly.
//! All instrumentation flows through `MetricsEvent` and `MetricsSink`.
use crate::{error::ErrorClass, obs::metrics, shape::Shape};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    Classify {
        shape: Shape,
    },
    Reduce {
        groups: u64,
        elements: u64,
    },
    Materialize {
        output: &'static str,
        capacity: u64,
        written: u64,
    },
    Rejected {
        class: ErrorClass,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// LocalMetricsSink
/// Default sink that writes into the thread-local counters.
/// Used whenever no scoped override is installed.

pub(crate) struct LocalMetricsSink;

impl MetricsSink for LocalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::Classify { shape } => {
                metrics::with_state_mut(|m| {
                    m.ops.classify_calls = m.ops.classify_calls.saturating_add(1);
                    metrics::bump(&mut m.shapes, &shape.to_string());
                });
            }

            MetricsEvent::Reduce { groups, elements } => {
                metrics::with_state_mut(|m| {
                    m.ops.reduce_calls = m.ops.reduce_calls.saturating_add(1);
                    m.ops.groups_reduced = m.ops.groups_reduced.saturating_add(groups);
                    m.ops.elements_folded = m.ops.elements_folded.saturating_add(elements);
                });
            }

            MetricsEvent::Materialize {
                output,
                capacity,
                written,
            } => {
                metrics::with_state_mut(|m| {
                    m.ops.materialize_calls = m.ops.materialize_calls.saturating_add(1);
                    m.ops.sums_written = m.ops.sums_written.saturating_add(written);
                    m.ops.slots_allocated = m.ops.slots_allocated.saturating_add(capacity);

                    let entry = m.outputs.entry(output.to_string()).or_default();
                    entry.calls = entry.calls.saturating_add(1);
                    entry.written = entry.written.saturating_add(written);
                    entry.capacity = entry.capacity.saturating_add(capacity);
                });
            }

            MetricsEvent::Rejected { class } => {
                metrics::with_state_mut(|m| {
                    m.ops.rejected_calls = m.ops.rejected_calls.saturating_add(1);
                    metrics::bump(&mut m.rejections, class.label());
                });
            }
        }
    }
}

pub(crate) const LOCAL_METRICS_SINK: LocalMetricsSink = LocalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` came from a live `&dyn MetricsSink` in `with_metrics_sink`,
        //   which restores the previous slot on every exit, unwinding included.
        // - `record` is synchronous and never keeps `ptr` past this call.
        // - Only a shared reference is materialized, matching the borrow it replaces.
        unsafe { (&*ptr).record(event) };
    } else {
        LOCAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the current thread's metrics counters.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset the current thread's metrics counters.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with `sink` receiving every event recorded on this thread.
///
/// Overrides nest; the previous sink is restored when `f` returns or unwinds.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - The pointer is installed only for the dynamic scope of `f`.
    // - `Guard` restores the previous slot on all exits, including panic.
    // - `record` dereferences it synchronously and never stores it.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink_ptr));
    let _guard = Guard(prev);

    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Container;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSink<'a> {
        calls: &'a AtomicUsize,
    }

    impl MetricsSink for CountingSink<'_> {
        fn record(&self, _: MetricsEvent) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    const CLASSIFY_LIST: MetricsEvent = MetricsEvent::Classify {
        shape: Shape::Flat(Container::List),
    };

    #[test]
    fn with_metrics_sink_routes_and_restores_nested_overrides() {
        SINK_OVERRIDE.with(|cell| {
            *cell.borrow_mut() = None;
        });

        let outer_calls = AtomicUsize::new(0);
        let inner_calls = AtomicUsize::new(0);
        let outer = CountingSink {
            calls: &outer_calls,
        };
        let inner = CountingSink {
            calls: &inner_calls,
        };

        record(CLASSIFY_LIST);
        assert_eq!(outer_calls.load(Ordering::SeqCst), 0);

        with_metrics_sink(&outer, || {
            record(CLASSIFY_LIST);
            with_metrics_sink(&inner, || record(CLASSIFY_LIST));
            record(CLASSIFY_LIST);
        });

        assert_eq!(outer_calls.load(Ordering::SeqCst), 2);
        assert_eq!(inner_calls.load(Ordering::SeqCst), 1);
        SINK_OVERRIDE.with(|cell| assert!(cell.borrow().is_none()));
    }

    #[test]
    fn with_metrics_sink_restores_override_on_panic() {
        SINK_OVERRIDE.with(|cell| {
            *cell.borrow_mut() = None;
        });

        let calls = AtomicUsize::new(0);
        let sink = CountingSink { calls: &calls };

        let panicked = catch_unwind(AssertUnwindSafe(|| {
            with_metrics_sink(&sink, || {
                record(CLASSIFY_LIST);
                panic!("intentional panic for guard test");
            });
        }))
        .is_err();

        assert!(panicked);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        SINK_OVERRIDE.with(|cell| assert!(cell.borrow().is_none()));
    }

    #[test]
    fn empty_state_reports_no_counters() {
        metrics_reset_all();

        let report = metrics_report();
        assert!(report.counters.is_none());
        assert!(report.output_summaries.is_empty());
    }

    #[test]
    fn local_sink_accumulates_counters() {
        metrics_reset_all();

        record(CLASSIFY_LIST);
        record(MetricsEvent::Reduce {
            groups: 2,
            elements: 5,
        });
        record(MetricsEvent::Materialize {
            output: "Array",
            capacity: 3,
            written: 2,
        });
        record(MetricsEvent::Rejected {
            class: ErrorClass::EmptyInput,
        });

        let report = metrics_report();
        let counters = report.counters.expect("counters after recording");
        assert_eq!(counters.ops.classify_calls, 1);
        assert_eq!(counters.ops.groups_reduced, 2);
        assert_eq!(counters.ops.elements_folded, 5);
        assert_eq!(counters.ops.sums_written, 2);
        assert_eq!(counters.ops.slots_allocated, 3);
        assert_eq!(counters.shapes.get("List"), Some(&1));
        assert_eq!(counters.rejections.get("empty_input"), Some(&1));

        let summary = &report.output_summaries[0];
        assert_eq!(summary.output, "Array");
        assert!((summary.avg_written_per_call - 2.0).abs() < f64::EPSILON);
        assert!((summary.unused_capacity_ratio - 1.0 / 3.0).abs() < 1e-12);
    }
}
